//! Provider selection state.
//!
//! Tracks which providers the user currently has enabled. Only map
//! coloring honors the selection; the grouped list always shows every
//! provider and the view layer re-renders both on each toggle.

use serde::{Deserialize, Serialize};

use crate::catalog::PROVIDER_DISPLAY_ORDER;

/// The set of currently enabled providers, in enable order.
///
/// Order matters: it is preserved into the per-country active lists
/// only insofar as callers intersect against it; the country encounter
/// order itself comes from the catalog. Duplicates are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn empty() -> Self {
        Self { ids: Vec::new() }
    }

    /// Creates a selection from provider ids, dropping duplicates while
    /// keeping the first occurrence's position.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::empty();
        for id in ids {
            selection.enable(id);
        }
        selection
    }

    /// Enables a provider. No-op when already enabled.
    pub fn enable(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.contains(&id) {
            self.ids.push(id);
        }
    }

    /// Disables a provider. No-op when not enabled.
    pub fn disable(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
    }

    /// Flips a provider's enabled state and returns the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.disable(id);
            false
        } else {
            self.enable(id);
            true
        }
    }

    /// Whether the provider is currently enabled.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// The enabled provider ids in enable order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }
}

impl Default for Selection {
    /// All four known providers enabled, in display order.
    fn default() -> Self {
        Self::from_ids(PROVIDER_DISPLAY_ORDER)
    }
}

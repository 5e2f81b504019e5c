//! Color and palette types.
//!
//! Colors are carried as CSS hex strings (e.g. `#3498db`) exactly as the
//! upstream data service supplies them. The [`Palette`] maps provider
//! identifiers to display colors; lookups for unknown providers miss and
//! callers fall back to a configured default.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A display color carried as a CSS hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Creates a color from any string value.
    ///
    /// No validation is performed; snapshot data may carry any CSS color
    /// and it is passed through to the renderer unchanged.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Parses a strict `#rrggbb` hex color, normalizing to lowercase.
    ///
    /// Returns `None` for anything that is not a `#` followed by six hex
    /// digits. Used to validate user-supplied configuration overrides;
    /// snapshot data goes through [`Color::new`] unvalidated.
    pub fn parse_hex(value: &str) -> Option<Self> {
        let v = value.trim();
        let digits = v.strip_prefix('#')?;
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(v.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// Returns the color value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq<str> for Color {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Color {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Provider identifier → display color mapping.
///
/// Built from the provider catalog and optionally overlaid with
/// user-configured overrides (an override for a provider replaces the
/// catalog color; providers without overrides keep theirs).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Palette {
    colors: HashMap<String, Color>,
}

impl Palette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a palette from (provider, color) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Color)>,
        S: Into<String>,
    {
        let colors = pairs
            .into_iter()
            .map(|(provider, color)| (provider.into(), color))
            .collect();
        Self { colors }
    }

    /// Sets or replaces the color for a provider.
    pub fn set(&mut self, provider: impl Into<String>, color: Color) {
        self.colors.insert(provider.into(), color);
    }

    /// Looks up the color for a provider.
    pub fn color_of(&self, provider: &str) -> Option<&Color> {
        self.colors.get(provider)
    }

    /// Overlays another palette on top of this one. Entries in
    /// `overrides` win; providers absent from it are untouched.
    pub fn merge(&mut self, overrides: &Palette) {
        for (provider, color) in &overrides.colors {
            self.colors.insert(provider.clone(), color.clone());
        }
    }

    /// Returns the number of providers with a palette entry.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true when no provider has a palette entry.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

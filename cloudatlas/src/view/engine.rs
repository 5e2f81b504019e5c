//! View engine daemon for latest-wins plan recomputation.
//!
//! The [`ViewEngine`] is a long-running background service that:
//! - Receives selection and catalog mutations via a channel
//! - Rebuilds the full [`RenderPlan`] after each batch of commands
//! - Publishes only the newest plan, superseding stale rebuilds
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                        ViewEngine                          │
//! │                                                            │
//! │  ViewCommand ──► ┌──────────────┐                          │
//! │                  │ Apply + drain│──► bump generation       │
//! │                  └──────┬───────┘                          │
//! │                         ▼                                  │
//! │                  ┌──────────────┐   cancelled when a new   │
//! │                  │   Rebuild    │◄── command arrives       │
//! │                  └──────┬───────┘                          │
//! │                         ▼                                  │
//! │                  ┌──────────────┐   only if still the      │
//! │                  │   Publish    │◄── newest generation     │
//! │                  └──────────────┘                          │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Subscribers watch a single slot holding the latest [`PlanUpdate`];
//! they can only ever observe non-decreasing generations, and after the
//! engine drains its queue the published plan reflects the final
//! selection state.
//!
//! # Example
//!
//! ```ignore
//! use cloudatlas::view::{ViewCommand, ViewEngine};
//!
//! let (engine, command_tx) = ViewEngine::new(catalog, selection, defaults);
//! let mut plans = engine.subscribe();
//!
//! let shutdown = CancellationToken::new();
//! tokio::spawn(engine.run(shutdown.clone()));
//!
//! command_tx.send(ViewCommand::ToggleProvider("linode".into())).await?;
//! plans.changed().await?;
//! ```

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::plan::RenderPlan;
use crate::catalog::Catalog;
use crate::color::ResolverDefaults;
use crate::pipeline::PipelineError;
use crate::selection::Selection;

/// Default capacity for the command channel.
pub const DEFAULT_COMMAND_CHANNEL_CAPACITY: usize = 64;

/// Mutations the engine accepts while running.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Flip one provider in the current selection.
    ToggleProvider(String),
    /// Replace the selection wholesale.
    SetSelection(Selection),
    /// Replace the catalog snapshot (a data refresh).
    ReplaceCatalog(Catalog),
}

/// One published plan, stamped with the generation that produced it.
///
/// `plan` is an error when the catalog at that generation had no data;
/// renderers show their empty state instead of a frame.
#[derive(Debug, Clone)]
pub struct PlanUpdate {
    pub generation: u64,
    pub plan: Result<Arc<RenderPlan>, PipelineError>,
}

/// The view engine daemon.
///
/// Owns the catalog snapshot and selection state. Commands mutate that
/// state; every processed batch bumps the generation and triggers a
/// rebuild whose publish is guarded by a generation check, so a slow
/// stale rebuild can never overwrite a newer plan.
pub struct ViewEngine {
    catalog: Catalog,
    selection: Selection,
    defaults: ResolverDefaults,
    command_rx: mpsc::Receiver<ViewCommand>,
    plan_tx: Arc<watch::Sender<PlanUpdate>>,
    generation: u64,
}

impl ViewEngine {
    /// Creates a new engine with its command channel.
    ///
    /// The initial plan for generation 0 is built synchronously and is
    /// immediately visible to subscribers.
    ///
    /// # Arguments
    ///
    /// * `catalog` - The loaded provider/region snapshot
    /// * `selection` - Initial provider selection
    /// * `defaults` - Theme defaults for map coloring
    pub fn new(
        catalog: Catalog,
        selection: Selection,
        defaults: ResolverDefaults,
    ) -> (Self, mpsc::Sender<ViewCommand>) {
        let (command_tx, command_rx) = mpsc::channel(DEFAULT_COMMAND_CHANNEL_CAPACITY);

        let initial = PlanUpdate {
            generation: 0,
            plan: RenderPlan::build(&catalog, &selection, &defaults).map(Arc::new),
        };
        let (plan_tx, _) = watch::channel(initial);

        let engine = Self {
            catalog,
            selection,
            defaults,
            command_rx,
            plan_tx: Arc::new(plan_tx),
            generation: 0,
        };

        (engine, command_tx)
    }

    /// Returns a receiver for published plans.
    ///
    /// # Note
    ///
    /// This must be called before `run()` consumes the engine.
    pub fn subscribe(&self) -> watch::Receiver<PlanUpdate> {
        self.plan_tx.subscribe()
    }

    /// Runs the engine until shutdown is signalled or every command
    /// sender is dropped.
    ///
    /// Commands queued behind the one being handled are drained into
    /// the same rebuild, so a burst of toggles costs one recomputation.
    pub async fn run(mut self, shutdown: CancellationToken) {
        info!("View engine starting");

        let mut in_flight: Option<CancellationToken> = None;

        loop {
            tokio::select! {
                biased;

                _ = shutdown.cancelled() => {
                    info!("View engine shutting down");
                    break;
                }

                command = self.command_rx.recv() => {
                    let Some(command) = command else {
                        debug!("All command senders dropped");
                        break;
                    };
                    self.apply(command);
                    while let Ok(queued) = self.command_rx.try_recv() {
                        self.apply(queued);
                    }

                    if let Some(stale) = in_flight.take() {
                        stale.cancel();
                    }
                    let rebuild = CancellationToken::new();
                    in_flight = Some(rebuild.clone());
                    self.spawn_rebuild(rebuild);
                }
            }
        }

        if let Some(stale) = in_flight.take() {
            stale.cancel();
        }
        info!("View engine stopped");
    }

    /// Applies one command to the engine state, bumping the generation.
    fn apply(&mut self, command: ViewCommand) {
        self.generation += 1;
        match command {
            ViewCommand::ToggleProvider(id) => {
                let enabled = self.selection.toggle(&id);
                debug!(provider = %id, enabled, generation = self.generation, "Toggled provider");
            }
            ViewCommand::SetSelection(selection) => {
                debug!(selected = selection.len(), generation = self.generation, "Replaced selection");
                self.selection = selection;
            }
            ViewCommand::ReplaceCatalog(catalog) => {
                debug!(
                    regions = catalog.regions.len(),
                    providers = catalog.providers.len(),
                    generation = self.generation,
                    "Replaced catalog"
                );
                self.catalog = catalog;
            }
        }
    }

    /// Rebuilds the plan off the event loop and publishes it, unless a
    /// newer command superseded this rebuild in the meantime.
    fn spawn_rebuild(&self, cancel: CancellationToken) {
        let catalog = self.catalog.clone();
        let selection = self.selection.clone();
        let defaults = self.defaults.clone();
        let plan_tx = Arc::clone(&self.plan_tx);
        let generation = self.generation;

        tokio::spawn(async move {
            if cancel.is_cancelled() {
                debug!(generation, "Rebuild superseded before it started");
                return;
            }

            let plan = RenderPlan::build(&catalog, &selection, &defaults).map(Arc::new);

            if cancel.is_cancelled() {
                debug!(generation, "Rebuild superseded, dropping result");
                return;
            }

            let published = plan_tx.send_if_modified(|current| {
                if generation > current.generation {
                    *current = PlanUpdate { generation, plan };
                    true
                } else {
                    false
                }
            });

            if published {
                debug!(generation, "Published plan");
            } else {
                debug!(generation, "Plan already superseded at publish");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{builtin_catalog, Provider, Region};
    use std::time::Duration;

    const TEST_TIMEOUT: Duration = Duration::from_secs(2);

    fn engine_with_builtin() -> (ViewEngine, mpsc::Sender<ViewCommand>) {
        ViewEngine::new(
            builtin_catalog(),
            Selection::default(),
            ResolverDefaults::map_theme(),
        )
    }

    #[tokio::test]
    async fn test_initial_plan_visible_before_run() {
        let (engine, tx) = engine_with_builtin();
        let rx = engine.subscribe();

        let update = rx.borrow();
        assert_eq!(update.generation, 0);
        let plan = update.plan.as_ref().unwrap();
        assert_eq!(plan.stats.total_regions, 91);

        assert!(!tx.is_closed());
        drop(update);
        drop(engine);
    }

    #[tokio::test]
    async fn test_toggle_publishes_new_generation() {
        let (engine, tx) = engine_with_builtin();
        let mut rx = engine.subscribe();

        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(engine.run(shutdown.clone()));

        tx.send(ViewCommand::ToggleProvider("linode".into()))
            .await
            .unwrap();

        let update = tokio::time::timeout(TEST_TIMEOUT, rx.wait_for(|u| u.generation >= 1))
            .await
            .expect("Plan timeout")
            .expect("Engine dropped sender")
            .clone();

        let plan = update.plan.unwrap();
        assert!(!plan.selection.contains("linode"));
        assert_eq!(plan.selection.len(), 3);

        shutdown.cancel();
        let _ = handle.await;
    }

    #[tokio::test]
    async fn test_replacing_catalog_with_empty_publishes_error() {
        let (engine, tx) = engine_with_builtin();
        let mut rx = engine.subscribe();

        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(engine.run(shutdown.clone()));

        tx.send(ViewCommand::ReplaceCatalog(Catalog::new(Vec::new(), Vec::new())))
            .await
            .unwrap();

        let update = tokio::time::timeout(TEST_TIMEOUT, rx.wait_for(|u| u.generation >= 1))
            .await
            .expect("Plan timeout")
            .expect("Engine dropped sender")
            .clone();

        assert_eq!(update.plan.unwrap_err(), PipelineError::NoRegions);

        shutdown.cancel();
        let _ = handle.await;
    }

    #[tokio::test]
    async fn test_set_selection_replaces_wholesale() {
        let (engine, tx) = engine_with_builtin();
        let mut rx = engine.subscribe();

        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(engine.run(shutdown.clone()));

        tx.send(ViewCommand::SetSelection(Selection::from_ids(["tencent"])))
            .await
            .unwrap();

        let update = tokio::time::timeout(TEST_TIMEOUT, rx.wait_for(|u| u.generation >= 1))
            .await
            .expect("Plan timeout")
            .expect("Engine dropped sender")
            .clone();

        let plan = update.plan.unwrap();
        assert_eq!(plan.selection.ids(), ["tencent"]);
        assert_eq!(*plan.map.color_for("CN"), "#2ecc71");

        shutdown.cancel();
        let _ = handle.await;
    }

    #[tokio::test]
    async fn test_dropping_all_senders_stops_engine() {
        let (engine, tx) = engine_with_builtin();

        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(engine.run(shutdown));

        drop(tx);

        tokio::time::timeout(TEST_TIMEOUT, handle)
            .await
            .expect("Engine did not stop after channel close")
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_provider_in_catalog_is_tolerated() {
        // A snapshot can carry providers the display order knows
        // nothing about; they group and color but get no column.
        let catalog = Catalog::new(
            vec![
                Provider::new("linode", "Linode", "#3498db"),
                Provider::new("vultr", "Vultr", "#007bfc"),
            ],
            vec![
                Region::new("us-east", "linode", "US", "Newark, NJ"),
                Region::new("ewr", "vultr", "US", "New Jersey"),
                Region::new("syd", "vultr", "AU", "Sydney"),
            ],
        );
        let (engine, tx) = ViewEngine::new(
            catalog,
            Selection::from_ids(["linode", "vultr"]),
            ResolverDefaults::map_theme(),
        );
        let rx = engine.subscribe();

        let update = rx.borrow().clone();
        let plan = update.plan.unwrap();

        // One column (linode is the only known provider), but vultr
        // still colors AU via its palette entry.
        assert_eq!(plan.list.columns.len(), 1);
        assert_eq!(*plan.map.color_for("AU"), "#007bfc");

        drop(tx);
        drop(engine);
    }
}

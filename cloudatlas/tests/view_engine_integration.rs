//! Integration tests for the view engine daemon.
//!
//! These tests verify the complete command → rebuild → publish flow:
//! - Initial plan visibility before the engine runs
//! - Burst coalescing: rapid toggles converge on the final selection
//! - Monotonic generations: subscribers never observe a rollback
//! - Catalog replacement, including the degraded no-data state
//! - Prompt shutdown via cancellation
//!
//! Run with: `cargo test --test view_engine_integration`

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use cloudatlas::catalog::{
    builtin_catalog, Catalog, Provider, Region, ALIYUN, DIGITALOCEAN, LINODE, TENCENT,
};
use cloudatlas::color::{ResolverDefaults, MULTI_LINODE_COLOR};
use cloudatlas::pipeline::PipelineError;
use cloudatlas::selection::Selection;
use cloudatlas::view::{PlanUpdate, RenderPlan, ViewCommand, ViewEngine};

// ============================================================================
// Test Helpers
// ============================================================================

/// Upper bound for any single wait in these tests.
const TEST_TIMEOUT: Duration = Duration::from_secs(2);

/// Create a small catalog where DE has overlapping linode and
/// digitalocean coverage.
fn overlap_catalog() -> Catalog {
    Catalog::new(
        vec![
            Provider::new(LINODE, "Linode", "#3498db"),
            Provider::new(DIGITALOCEAN, "DigitalOcean", "#ffb3d9"),
            Provider::new(ALIYUN, "阿里云", "#ff8c00"),
            Provider::new(TENCENT, "腾讯云", "#2ecc71"),
        ],
        vec![
            Region::new("eu-central", LINODE, "DE", "Frankfurt, DE"),
            Region::new("fra1", DIGITALOCEAN, "DE", "Frankfurt"),
            Region::new("ap-northeast", LINODE, "JP", "Tokyo 2, JP"),
        ],
    )
}

/// Spawn an engine over the given catalog with the default selection.
fn spawn_engine(
    catalog: Catalog,
) -> (
    mpsc::Sender<ViewCommand>,
    watch::Receiver<PlanUpdate>,
    CancellationToken,
    JoinHandle<()>,
) {
    let (engine, command_tx) =
        ViewEngine::new(catalog, Selection::default(), ResolverDefaults::map_theme());
    let plan_rx = engine.subscribe();
    let shutdown = CancellationToken::new();
    let handle = tokio::spawn(engine.run(shutdown.clone()));
    (command_tx, plan_rx, shutdown, handle)
}

// ============================================================================
// Initial Plan
// ============================================================================

/// The generation-0 plan is visible to subscribers before run() ever
/// executes.
#[tokio::test]
async fn test_initial_plan_visible_without_running() {
    let (engine, _command_tx) = ViewEngine::new(
        builtin_catalog(),
        Selection::default(),
        ResolverDefaults::map_theme(),
    );
    let plan_rx = engine.subscribe();

    let update = plan_rx.borrow().clone();
    assert_eq!(update.generation, 0);
    let plan = update.plan.unwrap();
    assert_eq!(plan.list.columns.len(), 4);
    assert_eq!(plan.stats.total_regions, 91);
}

// ============================================================================
// Burst Coalescing
// ============================================================================

/// A rapid burst of toggles settles on exactly the plan a synchronous
/// rebuild of the final selection would produce.
#[tokio::test]
async fn test_toggle_burst_converges_to_final_selection() {
    let catalog = builtin_catalog();
    let (command_tx, mut plan_rx, shutdown, handle) = spawn_engine(catalog.clone());

    let toggles = [DIGITALOCEAN, ALIYUN, TENCENT, ALIYUN];
    for id in toggles {
        command_tx
            .send(ViewCommand::ToggleProvider(id.to_string()))
            .await
            .unwrap();
    }

    // One generation per command, so the settled plan is generation 4.
    let update = tokio::time::timeout(
        TEST_TIMEOUT,
        plan_rx.wait_for(|u| u.generation >= toggles.len() as u64),
    )
    .await
    .expect("Engine should settle within the timeout")
    .unwrap()
    .clone();

    let mut expected_selection = Selection::default();
    for id in toggles {
        expected_selection.toggle(id);
    }
    let expected =
        RenderPlan::build(&catalog, &expected_selection, &ResolverDefaults::map_theme()).unwrap();

    assert_eq!(update.generation, toggles.len() as u64);
    assert_eq!(*update.plan.unwrap(), expected);

    shutdown.cancel();
    let _ = handle.await;
}

// ============================================================================
// Monotonic Generations
// ============================================================================

/// However rebuilds and commands interleave, a subscriber only ever
/// sees non-decreasing generations.
#[tokio::test]
async fn test_observed_generations_never_decrease() {
    let (command_tx, mut plan_rx, shutdown, handle) = spawn_engine(builtin_catalog());

    const COMMANDS: u64 = 5;

    let collector = tokio::spawn(async move {
        let mut seen = vec![plan_rx.borrow_and_update().generation];
        while plan_rx.changed().await.is_ok() {
            let generation = plan_rx.borrow_and_update().generation;
            seen.push(generation);
            if generation >= COMMANDS {
                break;
            }
        }
        seen
    });

    // Space the commands out so intermediate publishes can land.
    for i in 0..COMMANDS {
        let id = if i % 2 == 0 { TENCENT } else { ALIYUN };
        command_tx
            .send(ViewCommand::ToggleProvider(id.to_string()))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let seen = tokio::time::timeout(TEST_TIMEOUT, collector)
        .await
        .expect("Collector should finish within the timeout")
        .unwrap();

    assert_eq!(seen[0], 0);
    for pair in seen.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "Generation rolled back: {:?}",
            seen
        );
    }
    assert_eq!(*seen.last().unwrap(), COMMANDS);

    shutdown.cancel();
    let _ = handle.await;
}

// ============================================================================
// Catalog Replacement
// ============================================================================

/// Replacing the catalog rebuilds plans from the new data while the
/// selection carries over.
#[tokio::test]
async fn test_catalog_replacement_flows_into_plans() {
    let (command_tx, mut plan_rx, shutdown, handle) = spawn_engine(builtin_catalog());

    command_tx
        .send(ViewCommand::ReplaceCatalog(overlap_catalog()))
        .await
        .unwrap();

    let update = tokio::time::timeout(TEST_TIMEOUT, plan_rx.wait_for(|u| u.generation >= 1))
        .await
        .expect("Replacement plan should publish within the timeout")
        .unwrap()
        .clone();

    let plan = update.plan.unwrap();
    // Default selection still holds linode and digitalocean, so their
    // DE overlap resolves to the multi-provider color.
    assert_eq!(plan.map.color_for("DE"), MULTI_LINODE_COLOR);
    assert_eq!(plan.stats.total_regions, 3);

    shutdown.cancel();
    let _ = handle.await;
}

/// Replacing the catalog with empty data publishes the no-data error
/// state rather than a stale or empty plan.
#[tokio::test]
async fn test_empty_replacement_publishes_no_data_state() {
    let (command_tx, mut plan_rx, shutdown, handle) = spawn_engine(builtin_catalog());

    let empty = Catalog::new(vec![Provider::new(LINODE, "Linode", "#3498db")], Vec::new());
    command_tx
        .send(ViewCommand::ReplaceCatalog(empty))
        .await
        .unwrap();

    let update = tokio::time::timeout(TEST_TIMEOUT, plan_rx.wait_for(|u| u.generation >= 1))
        .await
        .expect("Degraded plan should publish within the timeout")
        .unwrap()
        .clone();

    assert_eq!(update.plan.unwrap_err(), PipelineError::NoRegions);

    // A later toggle recovers nothing until data returns, but the
    // engine itself keeps running and processing commands.
    command_tx
        .send(ViewCommand::ToggleProvider(LINODE.to_string()))
        .await
        .unwrap();
    let update = tokio::time::timeout(TEST_TIMEOUT, plan_rx.wait_for(|u| u.generation >= 2))
        .await
        .expect("Engine should keep processing after a degraded plan")
        .unwrap()
        .clone();
    assert_eq!(update.plan.unwrap_err(), PipelineError::NoRegions);

    shutdown.cancel();
    let _ = handle.await;
}

// ============================================================================
// Shutdown
// ============================================================================

/// Cancelling the shutdown token stops the engine promptly, after
/// which commands are no longer accepted.
#[tokio::test]
async fn test_shutdown_stops_engine_promptly() {
    let (command_tx, _plan_rx, shutdown, handle) = spawn_engine(builtin_catalog());

    shutdown.cancel();
    tokio::time::timeout(TEST_TIMEOUT, handle)
        .await
        .expect("Engine should stop within the timeout")
        .unwrap();

    let result = command_tx
        .send(ViewCommand::ToggleProvider(LINODE.to_string()))
        .await;
    assert!(result.is_err(), "Stopped engine should not accept commands");
}

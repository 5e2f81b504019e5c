//! View engine and render plan
//!
//! Turns the pure pipeline into a long-running service: selection and
//! catalog mutations go in, complete render plans come out, and only
//! the newest plan is ever observable.

mod engine;
mod plan;

pub use engine::{PlanUpdate, ViewCommand, ViewEngine, DEFAULT_COMMAND_CHANNEL_CAPACITY};
pub use plan::RenderPlan;

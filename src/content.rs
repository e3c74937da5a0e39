//! Static workout content
//!
//! Loaded once at startup and shared read-only between conversations.

mod error;
mod plan;
mod store;

pub use plan::{Discipline, ExerciseGroup, Plan};
#[cfg(test)]
pub use plan::{Exercise, PlanContent};
pub use store::{ContentStore, DEFAULT_RUN_WEEK};

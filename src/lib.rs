//! Adaptive workout decision engine
//!
//! Turns a read-only snapshot of a user's state (readiness, sleep, stress,
//! muscle recovery, goal trajectory) into a concrete recommendation: rest,
//! reduced or boosted intensity, exercise substitution, or a plan change.
//! All computation is pure; the only side effect is a best-effort audit
//! write at the public API boundary.

pub mod adjustment;
pub mod audit;
pub mod decision;
pub mod engine;
pub mod models;
pub mod plan;

#[cfg(test)]
pub mod test_utils;

pub use engine::DecisionEngine;
pub use models::context::ContextSnapshot;
pub use models::decision::{
  Decision, DecisionType, PlanModification, PlanModificationType, Priority,
  WorkoutAdjustment,
};
pub use models::workout::Workout;

pub mod context;
pub mod decision;
pub mod workout;

pub use context::ContextSnapshot;
pub use decision::{Decision, PlanModification, WorkoutAdjustment};
pub use workout::Workout;

//! Output value objects produced by the engine
//!
//! Decisions, workout adjustments, and plan modifications are all new values
//! derived from a context snapshot. The priority ordering lives here as a
//! single ordered enum so the decision prioritizer and the plan-modification
//! selector can never diverge.

use serde::{Deserialize, Serialize};

use super::workout::Workout;

/// ---------------------------------------------------------------------------
/// Shared priority ordering
/// ---------------------------------------------------------------------------

/// Urgency ranking shared by every selection step in the engine.
/// Variant order defines the ranking: Low < Medium < High < Critical.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
  Low,
  Medium,
  High,
  Critical,
}

impl Priority {
  pub fn as_str(&self) -> &'static str {
    match self {
      Priority::Low => "low",
      Priority::Medium => "medium",
      Priority::High => "high",
      Priority::Critical => "critical",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Decision
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
  WorkoutAdjustment,
  PlanModification,
  RestRecommendation,
  IntensityChange,
  ExerciseSwap,
  ScheduleChange,
}

impl DecisionType {
  pub fn as_str(&self) -> &'static str {
    match self {
      DecisionType::WorkoutAdjustment => "workout_adjustment",
      DecisionType::PlanModification => "plan_modification",
      DecisionType::RestRecommendation => "rest_recommendation",
      DecisionType::IntensityChange => "intensity_change",
      DecisionType::ExerciseSwap => "exercise_swap",
      DecisionType::ScheduleChange => "schedule_change",
    }
  }
}

/// A single actionable recommendation for today
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
  #[serde(rename = "type")]
  pub decision_type: DecisionType,
  pub priority: Priority,
  /// Human-readable directive
  pub action: String,
  /// Justification lines, append-only
  pub reasoning: Vec<String>,
  pub impact_on_goals: String,
  /// Fallback suggestions the user can pick instead
  pub alternatives: Vec<String>,
  /// 0.0 - 1.0
  pub confidence: f64,
  /// False means the decision may be auto-applied
  pub requires_user_approval: bool,
}

/// ---------------------------------------------------------------------------
/// Workout adjustment
/// ---------------------------------------------------------------------------

/// Structured diff between the planned workout and today's adjusted version
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutAdjustment {
  /// Copy of the planned workout, untouched by later passes
  pub original_workout: Option<Workout>,
  pub adjusted_workout: Workout,
  /// One entry per applied transformation
  pub changes: Vec<String>,
  pub reason: String,
  pub goal_alignment: String,
}

/// ---------------------------------------------------------------------------
/// Plan modification
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanModificationType {
  ReduceFrequency,
  IncreaseIntensity,
  AddDeloadWeek,
}

impl PlanModificationType {
  pub fn as_str(&self) -> &'static str {
    match self {
      PlanModificationType::ReduceFrequency => "reduce_frequency",
      PlanModificationType::IncreaseIntensity => "increase_intensity",
      PlanModificationType::AddDeloadWeek => "add_deload_week",
    }
  }

  /// Selection ranking: recovery-biased, deload always wins
  pub fn priority(&self) -> Priority {
    match self {
      PlanModificationType::AddDeloadWeek => Priority::High,
      PlanModificationType::ReduceFrequency => Priority::Medium,
      PlanModificationType::IncreaseIntensity => Priority::Low,
    }
  }
}

/// A single proposed structural change to the training plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanModification {
  pub modification_type: PlanModificationType,
  pub reason: String,
  pub suggestion: String,
  pub impact: String,
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

//! Context snapshot consumed by the decision engine
//!
//! The snapshot is assembled upstream from logged workouts, wearable data,
//! and goal tracking. The engine treats it as read-only: every derived
//! structure is a new value, never a mutation of the input.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::workout::Workout;

/// ---------------------------------------------------------------------------
/// Health signals
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrvTrend {
  Improving,
  Stable,
  Declining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
  Low,
  Moderate,
  High,
}

/// Composite readiness computed upstream (0-100)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Readiness {
  pub overall_score: i64,
  pub hrv_trend: HrvTrend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sleep {
  pub quality_score: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stress {
  pub level: StressLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthState {
  pub readiness: Readiness,
  pub sleep: Sleep,
  pub stress: Stress,
}

/// ---------------------------------------------------------------------------
/// User & goals
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingHistory {
  pub current_streak: i64,
  pub total_workouts: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
  /// Target workout days per week
  pub workout_frequency: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
  pub id: String,
  pub history: TrainingHistory,
  pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
  /// Free-form goal category ("strength", "endurance", "weight loss", ...)
  pub goal_type: String,
  pub on_track: bool,
  pub projected_completion: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goals {
  pub primary_goal: Goal,
}

/// ---------------------------------------------------------------------------
/// Workout state
/// ---------------------------------------------------------------------------

/// Per-muscle-group recovery classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
  Recovered,
  Fatigued,
  Overworked,
}

impl RecoveryStatus {
  /// Whether exercises targeting this group should be avoided today
  pub fn needs_rest(&self) -> bool {
    matches!(self, RecoveryStatus::Fatigued | RecoveryStatus::Overworked)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
  pub id: String,
  /// Completion rate over recent weeks (0-100)
  pub adherence_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutState {
  /// Absent means a rest day is already scheduled
  pub todays_workout: Option<Workout>,
  pub current_plan: Option<Plan>,
  pub muscle_group_recovery: HashMap<String, RecoveryStatus>,
}

impl WorkoutState {
  /// Muscle groups currently flagged as fatigued or overworked
  pub fn fatigued_muscle_groups(&self) -> Vec<String> {
    let mut groups: Vec<String> = self
      .muscle_group_recovery
      .iter()
      .filter(|(_, status)| status.needs_rest())
      .map(|(name, _)| name.clone())
      .collect();
    groups.sort();
    groups
  }
}

/// ---------------------------------------------------------------------------
/// The full snapshot
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSnapshot {
  pub user: UserProfile,
  pub health: HealthState,
  pub goals: Goals,
  pub workout: WorkoutState,
}

//! Test utilities and helpers
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Mock snapshot factories
//! - Helper assertions

use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::collections::HashMap;

use crate::models::context::{
  ContextSnapshot, Goal, Goals, HealthState, HrvTrend, Plan, Readiness,
  RecoveryStatus, Sleep, Stress, StressLevel, TrainingHistory, UserPreferences,
  UserProfile, WorkoutState,
};
use crate::models::workout::{Exercise, IntensityLevel, Workout};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// A full-body workout targeting chest and back
pub fn mock_workout() -> Workout {
  Workout {
    name: "Upper Body Strength".to_string(),
    duration_minutes: 60,
    intensity: IntensityLevel::Moderate,
    intensity_percentage: None,
    muscle_groups: vec!["chest".to_string(), "back".to_string()],
    exercises: vec![
      Exercise {
        name: "Bench Press".to_string(),
        sets: 4,
        reps: 8,
        rest_seconds: Some(90),
        muscle_groups: vec!["chest".to_string()],
      },
      Exercise {
        name: "Incline Dumbbell Press".to_string(),
        sets: 4,
        reps: 10,
        rest_seconds: None,
        muscle_groups: vec!["chest".to_string()],
      },
      Exercise {
        name: "Bent-Over Row".to_string(),
        sets: 4,
        reps: 8,
        rest_seconds: Some(90),
        muscle_groups: vec!["back".to_string()],
      },
    ],
  }
}

/// A healthy baseline snapshot: readiness 85, goal on track, no fatigued
/// muscles, low stress. No evaluator fires against this context.
pub fn mock_context() -> ContextSnapshot {
  let mut muscle_group_recovery = HashMap::new();
  muscle_group_recovery.insert("chest".to_string(), RecoveryStatus::Recovered);
  muscle_group_recovery.insert("back".to_string(), RecoveryStatus::Recovered);

  ContextSnapshot {
    user: UserProfile {
      id: "user-1".to_string(),
      history: TrainingHistory {
        current_streak: 5,
        total_workouts: 50,
      },
      preferences: UserPreferences {
        workout_frequency: 4,
      },
    },
    health: HealthState {
      readiness: Readiness {
        overall_score: 85,
        hrv_trend: HrvTrend::Stable,
      },
      sleep: Sleep { quality_score: 80 },
      stress: Stress {
        level: StressLevel::Low,
      },
    },
    goals: Goals {
      primary_goal: Goal {
        goal_type: "strength".to_string(),
        on_track: true,
        projected_completion: NaiveDate::from_ymd_opt(2026, 12, 1)
          .expect("valid date"),
      },
    },
    workout: WorkoutState {
      todays_workout: Some(mock_workout()),
      current_plan: Some(Plan {
        id: "plan-1".to_string(),
        adherence_rate: 90.0,
      }),
      muscle_group_recovery,
    },
  }
}

/// Baseline snapshot with a specific readiness score
pub fn mock_context_with_readiness(score: i64) -> ContextSnapshot {
  let mut ctx = mock_context();
  ctx.health.readiness.overall_score = score;
  ctx
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name = 'decision_log'",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 1, "decision_log table should exist");

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_context_is_quiet_baseline() {
    let ctx = mock_context();

    // Nothing in the baseline should trip an evaluator
    assert!(ctx.health.readiness.overall_score >= 80);
    assert!(ctx.goals.primary_goal.on_track);
    assert!(ctx.workout.fatigued_muscle_groups().is_empty());
    assert_eq!(ctx.health.stress.level, StressLevel::Low);
    assert!(ctx.workout.todays_workout.is_some());
  }

  #[test]
  fn test_fatigued_groups_are_sorted() {
    let mut ctx = mock_context();
    ctx
      .workout
      .muscle_group_recovery
      .insert("legs".to_string(), RecoveryStatus::Overworked);
    ctx
      .workout
      .muscle_group_recovery
      .insert("back".to_string(), RecoveryStatus::Fatigued);

    assert_eq!(
      ctx.workout.fatigued_muscle_groups(),
      vec!["back".to_string(), "legs".to_string()]
    );
  }
}

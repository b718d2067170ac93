//! Workout adjustment synthesizer
//!
//! Takes today's planned workout and produces a structurally independent
//! adjusted copy: readiness-based scaling first, then a muscle-conflict pass
//! and a comeback pass that always run. The planned workout is never mutated.

use crate::models::context::{ContextSnapshot, Goal};
use crate::models::decision::WorkoutAdjustment;
use crate::models::workout::{IntensityLevel, Workout};

/// Below this, today becomes a full rest day
const FULL_REST_THRESHOLD: i64 = 40;
/// Below this, today becomes a recovery session
const RECOVERY_THRESHOLD: i64 = 60;
/// Below this, intensity is trimmed and rests lengthened
const MODIFIED_THRESHOLD: i64 = 80;
/// Above this (with a slipping goal), today is intensified
const INTENSIFY_THRESHOLD: i64 = 90;

/// Rest period added per exercise in the modified band
const EXTRA_REST_SECONDS: i64 = 15;
/// Default rest period when an exercise has none set
const DEFAULT_REST_SECONDS: i64 = 60;
/// Comeback workouts never exceed this duration
const COMEBACK_MAX_MINUTES: i64 = 45;
/// Scaling never drops an exercise below this many sets
const MIN_SETS: i64 = 2;

/// ---------------------------------------------------------------------------
/// Synthesizer
/// ---------------------------------------------------------------------------

/// Build today's adjustment from the snapshot. Pure: persistence happens at
/// the engine boundary.
pub fn compute_adjustment(ctx: &ContextSnapshot) -> WorkoutAdjustment {
  let Some(original) = &ctx.workout.todays_workout else {
    // Already a rest day; emit an empty-workout adjustment
    let adjusted = Workout::rest_day();
    let goal_alignment = assess_goal_alignment(&ctx.goals.primary_goal, None, &adjusted);
    return WorkoutAdjustment {
      original_workout: None,
      adjusted_workout: adjusted,
      changes: vec!["No workout scheduled".to_string()],
      reason: "Rest day already planned".to_string(),
      goal_alignment,
    };
  };

  let mut adjusted = original.clone();
  let mut changes = Vec::new();

  let reason = apply_readiness_scaling(ctx, &mut adjusted, &mut changes);
  apply_muscle_conflicts(ctx, &mut adjusted, &mut changes);
  apply_comeback_detuning(ctx, &mut adjusted, &mut changes);

  let goal_alignment =
    assess_goal_alignment(&ctx.goals.primary_goal, Some(original), &adjusted);

  WorkoutAdjustment {
    original_workout: Some(original.clone()),
    adjusted_workout: adjusted,
    changes,
    reason,
    goal_alignment,
  }
}

/// Readiness-band scaling; returns the headline reason for the adjustment
fn apply_readiness_scaling(
  ctx: &ContextSnapshot,
  workout: &mut Workout,
  changes: &mut Vec<String>,
) -> String {
  let score = ctx.health.readiness.overall_score;
  let on_track = ctx.goals.primary_goal.on_track;

  if score < FULL_REST_THRESHOLD {
    workout.exercises.clear();
    workout.duration_minutes = 30;
    workout.intensity = IntensityLevel::Low;
    workout.intensity_percentage = None;
    changes.push("Converted to full rest day".to_string());
    return format!("Readiness score {} is too low to train", score);
  }

  if score < RECOVERY_THRESHOLD {
    workout.duration_minutes = scale_rounded(workout.duration_minutes, 0.7);
    for exercise in &mut workout.exercises {
      exercise.sets = scale_rounded(exercise.sets, 0.7).max(MIN_SETS);
    }
    workout.intensity_percentage = Some(60);
    changes.push("Reduced duration and sets for recovery".to_string());
    return format!("Readiness score {} calls for a recovery session", score);
  }

  if score < MODIFIED_THRESHOLD {
    workout.intensity_percentage = Some(75);
    for exercise in &mut workout.exercises {
      exercise.rest_seconds =
        Some(exercise.rest_seconds.unwrap_or(DEFAULT_REST_SECONDS) + EXTRA_REST_SECONDS);
    }
    changes.push("Trimmed intensity and extended rest periods".to_string());
    return format!("Readiness score {} supports a modified session", score);
  }

  if score > INTENSIFY_THRESHOLD && !on_track {
    for exercise in &mut workout.exercises {
      exercise.sets += 1;
    }
    workout.intensity_percentage = Some(85);
    changes.push("Added one set per exercise".to_string());
    return format!(
      "Readiness score {} leaves room to push toward the goal",
      score
    );
  }

  format!("Readiness score {} requires no changes", score)
}

/// Remove exercises whose targets have not recovered
fn apply_muscle_conflicts(
  ctx: &ContextSnapshot,
  workout: &mut Workout,
  changes: &mut Vec<String>,
) {
  let conflicting: Vec<String> = workout
    .muscle_groups
    .iter()
    .filter(|group| {
      ctx
        .workout
        .muscle_group_recovery
        .get(group.as_str())
        .is_some_and(|status| status.needs_rest())
    })
    .cloned()
    .collect();

  for group in conflicting {
    workout
      .exercises
      .retain(|e| !e.muscle_groups.contains(&group));
    workout.muscle_groups.retain(|g| g != &group);
    changes.push(format!(
      "Removed {} exercises due to insufficient recovery",
      group
    ));
  }
}

/// Lapsed-but-not-new users get a deliberately easy return session
fn apply_comeback_detuning(
  ctx: &ContextSnapshot,
  workout: &mut Workout,
  changes: &mut Vec<String>,
) {
  let history = &ctx.user.history;
  if history.current_streak != 0 || history.total_workouts == 0 {
    return;
  }

  workout.duration_minutes = workout.duration_minutes.min(COMEBACK_MAX_MINUTES);
  for exercise in &mut workout.exercises {
    exercise.sets = (exercise.sets - 1).max(MIN_SETS);
  }
  workout.intensity_percentage = Some(70);
  changes.push("Scaled back for a comeback workout".to_string());
}

fn scale_rounded(value: i64, factor: f64) -> i64 {
  (value as f64 * factor).round() as i64
}

/// ---------------------------------------------------------------------------
/// Goal alignment
/// ---------------------------------------------------------------------------

/// Textual assessment of whether the adjusted workout still serves the goal.
/// Matches loosely on the goal-type string and never fails; unrecognized
/// categories fall back to a generic recovery statement.
pub fn assess_goal_alignment(
  goal: &Goal,
  original: Option<&Workout>,
  adjusted: &Workout,
) -> String {
  let goal_type = goal.goal_type.to_lowercase();

  if goal_type.contains("strength") {
    let original_count = original.map_or(0, |w| w.exercises.len());
    // Preserved enough volume: at least 70% of the planned exercise count
    if original_count == 0 || adjusted.exercises.len() * 10 >= original_count * 7 {
      return "Maintains enough working volume to keep building strength".to_string();
    }
    return "Volume is reduced today; strength work resumes once recovered".to_string();
  }

  if goal_type.contains("endurance") {
    if adjusted.duration_minutes >= 30 {
      return "Session length still supports your endurance base".to_string();
    }
    return "Shortened today; endurance volume picks back up next session".to_string();
  }

  if goal_type.contains("weight") {
    // Consistency of expenditure matters more than any single session's load
    return "Staying active keeps energy expenditure consistent with your weight goal"
      .to_string();
  }

  "Today's adjustment prioritizes recovery so training can continue sustainably"
    .to_string()
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

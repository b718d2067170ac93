//! Rule evaluators and decision prioritizer
//!
//! Each evaluator is a pure function recognizing one situation. Evaluators
//! share no state and may fire simultaneously; the prioritizer collapses the
//! candidate list to exactly one decision per snapshot.

use crate::models::context::{ContextSnapshot, StressLevel};
use crate::models::decision::{Decision, DecisionType, Priority};

/// Readiness below this calls for rest or recovery work
const REST_THRESHOLD: i64 = 60;
/// Readiness below this calls for reduced intensity
const MODERATE_THRESHOLD: i64 = 80;
/// Sleep quality below this reinforces a rest recommendation
const POOR_SLEEP_THRESHOLD: i64 = 50;

/// ---------------------------------------------------------------------------
/// Evaluators
/// ---------------------------------------------------------------------------

/// Low readiness with a workout scheduled: recommend rest
pub fn evaluate_rest_recovery(ctx: &ContextSnapshot) -> Option<Decision> {
  let score = ctx.health.readiness.overall_score;
  if score >= REST_THRESHOLD || ctx.workout.todays_workout.is_none() {
    return None;
  }

  let mut reasoning = vec![format!(
    "Readiness score {} is below the recovery threshold of {}",
    score, REST_THRESHOLD
  )];
  if ctx.health.sleep.quality_score < POOR_SLEEP_THRESHOLD {
    reasoning.push(format!(
      "Sleep quality {} is compounding low recovery",
      ctx.health.sleep.quality_score
    ));
  }

  Some(Decision {
    decision_type: DecisionType::RestRecommendation,
    priority: Priority::High,
    action: "Take a rest day or light recovery session".to_string(),
    reasoning,
    impact_on_goals: "Resting today protects the consistency your goal depends on"
      .to_string(),
    alternatives: vec![
      "20 minute easy walk".to_string(),
      "Gentle stretching or mobility work".to_string(),
    ],
    confidence: 0.95,
    requires_user_approval: true,
  })
}

/// Middling readiness with a workout scheduled: train, but dial it back
pub fn evaluate_moderate_intensity(ctx: &ContextSnapshot) -> Option<Decision> {
  let score = ctx.health.readiness.overall_score;
  if score < REST_THRESHOLD || score >= MODERATE_THRESHOLD {
    return None;
  }
  ctx.workout.todays_workout.as_ref()?;

  Some(Decision {
    decision_type: DecisionType::IntensityChange,
    priority: Priority::Medium,
    action: "Complete today's workout at reduced intensity".to_string(),
    reasoning: vec![format!(
      "Readiness score {} suggests training below full intensity",
      score
    )],
    impact_on_goals: "Keeps training stimulus coming without digging into recovery"
      .to_string(),
    alternatives: vec!["Shorten the session instead of reducing load".to_string()],
    confidence: 0.85,
    requires_user_approval: false,
  })
}

/// Goal behind schedule while the body can absorb more: push harder
pub fn evaluate_intensity_boost(ctx: &ContextSnapshot) -> Option<Decision> {
  let goal = &ctx.goals.primary_goal;
  let score = ctx.health.readiness.overall_score;
  if goal.on_track || score < MODERATE_THRESHOLD {
    return None;
  }

  Some(Decision {
    decision_type: DecisionType::IntensityChange,
    priority: Priority::Medium,
    action: format!(
      "Increase today's intensity to close the gap on your {} goal",
      goal.goal_type
    ),
    reasoning: vec![
      format!("Goal '{}' is currently behind schedule", goal.goal_type),
      format!("Readiness score {} supports a harder session", score),
    ],
    impact_on_goals: format!(
      "A higher-quality session moves the {} projection back toward {}",
      goal.goal_type, goal.projected_completion
    ),
    alternatives: vec!["Add one extra working set per exercise".to_string()],
    confidence: 0.80,
    requires_user_approval: true,
  })
}

/// One or more targeted muscle groups still need recovery: swap them out
pub fn evaluate_muscle_recovery(
  ctx: &ContextSnapshot,
  fatigued: &[String],
) -> Option<Decision> {
  if fatigued.is_empty() {
    return None;
  }
  ctx.workout.todays_workout.as_ref()?;

  let list = fatigued.join(", ");
  Some(Decision {
    decision_type: DecisionType::ExerciseSwap,
    priority: Priority::High,
    action: format!("Swap exercises targeting: {}", list),
    reasoning: vec![format!(
      "{} muscle group(s) have not recovered: {}",
      fatigued.len(),
      list
    )],
    impact_on_goals: "Working recovered muscles keeps total volume on plan"
      .to_string(),
    alternatives: vec![format!("Rest instead of substituting {}", list)],
    confidence: 0.90,
    requires_user_approval: false,
  })
}

/// High stress: steer today toward a calmer format
pub fn evaluate_stress(ctx: &ContextSnapshot) -> Option<Decision> {
  if ctx.health.stress.level != StressLevel::High {
    return None;
  }

  Some(Decision {
    decision_type: DecisionType::WorkoutAdjustment,
    priority: Priority::Medium,
    action: "Shift today's session to a lower-stress format".to_string(),
    reasoning: vec!["Stress level is high".to_string()],
    impact_on_goals: "Managing stress now prevents skipped sessions later"
      .to_string(),
    alternatives: vec![
      "Yoga or breathwork session".to_string(),
      "Easy zone 1 aerobic work".to_string(),
    ],
    confidence: 0.75,
    requires_user_approval: false,
  })
}

/// ---------------------------------------------------------------------------
/// Prioritizer
/// ---------------------------------------------------------------------------

/// Run every evaluator and collect the firing decisions
pub fn collect_candidates(ctx: &ContextSnapshot) -> Vec<Decision> {
  let fatigued = ctx.workout.fatigued_muscle_groups();

  [
    evaluate_rest_recovery(ctx),
    evaluate_moderate_intensity(ctx),
    evaluate_intensity_boost(ctx),
    evaluate_muscle_recovery(ctx, &fatigued),
    evaluate_stress(ctx),
  ]
  .into_iter()
  .flatten()
  .collect()
}

/// Collapse candidates to a single decision.
///
/// Sort is descending by priority, ties broken by confidence. An empty
/// candidate list yields the "proceed as planned" default, so callers always
/// get exactly one decision back.
pub fn prioritize(mut candidates: Vec<Decision>, ctx: &ContextSnapshot) -> Decision {
  if candidates.is_empty() {
    return default_decision();
  }

  candidates.sort_by(|a, b| {
    b.priority.cmp(&a.priority).then(
      b.confidence
        .partial_cmp(&a.confidence)
        .unwrap_or(std::cmp::Ordering::Equal),
    )
  });
  let mut top = candidates.swap_remove(0);

  // Mandatory post-step: annotate goal linkage when the goal is slipping
  let goal = &ctx.goals.primary_goal;
  if !goal.on_track {
    top
      .reasoning
      .push("Adjusted to align with goal timeline".to_string());
    top.impact_on_goals = format!(
      "Keeps the {} goal attainable by {}",
      goal.goal_type, goal.projected_completion
    );
  }

  top
}

/// The low-priority fallback when no rule fires
fn default_decision() -> Decision {
  Decision {
    decision_type: DecisionType::WorkoutAdjustment,
    priority: Priority::Low,
    action: "Proceed with planned workout".to_string(),
    reasoning: vec!["All readiness signals are within normal ranges".to_string()],
    impact_on_goals: "Executing the plan as written keeps the goal on schedule"
      .to_string(),
    alternatives: Vec::new(),
    confidence: 1.0,
    requires_user_approval: false,
  }
}

/// Evaluate the snapshot end to end: candidates, then prioritization
pub fn choose(ctx: &ContextSnapshot) -> Decision {
  prioritize(collect_candidates(ctx), ctx)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{mock_context, mock_context_with_readiness};

  #[test]
  fn test_default_fallback_when_no_rule_fires() {
    // Arrange: readiness 85, goal on track, no fatigue, low stress
    let ctx = mock_context();

    // Act
    let decision = choose(&ctx);

    // Assert: the synthesized default
    assert_eq!(decision.priority, Priority::Low);
    assert_eq!(decision.action, "Proceed with planned workout");
    assert_eq!(decision.confidence, 1.0);
    assert!(!decision.requires_user_approval);
    assert!(!decision.reasoning.is_empty());
  }

  #[test]
  fn test_totality_across_readiness_range() {
    // Every readiness score must still yield exactly one well-formed decision
    for score in [0, 25, 40, 59, 60, 79, 80, 90, 100] {
      let ctx = mock_context_with_readiness(score);
      let decision = choose(&ctx);
      assert!(
        !decision.reasoning.is_empty(),
        "readiness {} produced empty reasoning",
        score
      );
      assert!(
        (0.0..=1.0).contains(&decision.confidence),
        "readiness {} produced confidence {}",
        score,
        decision.confidence
      );
    }
  }

  #[test]
  fn test_rest_recovery_fires_below_threshold() {
    let ctx = mock_context_with_readiness(55);
    let decision = evaluate_rest_recovery(&ctx).expect("should fire at 55");
    assert_eq!(decision.decision_type, DecisionType::RestRecommendation);
    assert_eq!(decision.priority, Priority::High);
  }

  #[test]
  fn test_rest_recovery_skips_scheduled_rest_day() {
    let mut ctx = mock_context_with_readiness(55);
    ctx.workout.todays_workout = None;
    assert!(evaluate_rest_recovery(&ctx).is_none());
  }

  #[test]
  fn test_rest_recovery_cites_poor_sleep() {
    let mut ctx = mock_context_with_readiness(45);
    ctx.health.sleep.quality_score = 30;
    let decision = evaluate_rest_recovery(&ctx).unwrap();
    assert_eq!(decision.reasoning.len(), 2);
    assert!(decision.reasoning[1].contains("Sleep quality"));
  }

  #[test]
  fn test_moderate_intensity_band() {
    assert!(evaluate_moderate_intensity(&mock_context_with_readiness(59)).is_none());
    assert!(evaluate_moderate_intensity(&mock_context_with_readiness(60)).is_some());
    assert!(evaluate_moderate_intensity(&mock_context_with_readiness(79)).is_some());
    assert!(evaluate_moderate_intensity(&mock_context_with_readiness(80)).is_none());
  }

  #[test]
  fn test_intensity_boost_requires_off_track_goal() {
    let mut ctx = mock_context_with_readiness(85);
    assert!(evaluate_intensity_boost(&ctx).is_none());

    ctx.goals.primary_goal.on_track = false;
    let decision = evaluate_intensity_boost(&ctx).expect("should fire off-track");
    assert_eq!(decision.decision_type, DecisionType::IntensityChange);
    assert_eq!(decision.confidence, 0.80);
  }

  #[test]
  fn test_muscle_recovery_needs_fatigued_groups() {
    let ctx = mock_context();
    assert!(evaluate_muscle_recovery(&ctx, &[]).is_none());

    let fatigued = vec!["chest".to_string()];
    let decision = evaluate_muscle_recovery(&ctx, &fatigued).unwrap();
    assert_eq!(decision.decision_type, DecisionType::ExerciseSwap);
    assert!(decision.action.contains("chest"));
  }

  #[test]
  fn test_stress_fires_only_on_high() {
    let mut ctx = mock_context();
    assert!(evaluate_stress(&ctx).is_none());

    ctx.health.stress.level = StressLevel::High;
    let decision = evaluate_stress(&ctx).unwrap();
    assert_eq!(decision.confidence, 0.75);
  }

  #[test]
  fn test_higher_priority_wins() {
    // Arrange: readiness 55 fires rest (high), stress high fires (medium)
    let mut ctx = mock_context_with_readiness(55);
    ctx.health.stress.level = StressLevel::High;

    // Act
    let decision = choose(&ctx);

    // Assert: the high-priority rest decision wins
    assert_eq!(decision.decision_type, DecisionType::RestRecommendation);
    assert_eq!(decision.priority, Priority::High);
  }

  #[test]
  fn test_tie_broken_by_confidence() {
    // Arrange: two medium-priority candidates differing only in confidence
    let ctx = mock_context();
    let mut low = default_decision();
    low.priority = Priority::Medium;
    low.confidence = 0.70;
    low.action = "lower".to_string();
    let mut high = default_decision();
    high.priority = Priority::Medium;
    high.confidence = 0.90;
    high.action = "higher".to_string();

    // Act
    let winner = prioritize(vec![low, high], &ctx);

    // Assert
    assert_eq!(winner.action, "higher");
  }

  #[test]
  fn test_off_track_goal_appends_reasoning() {
    // Arrange: readiness 55 fires rest; goal off track
    let mut ctx = mock_context_with_readiness(55);
    ctx.goals.primary_goal.on_track = false;

    // Act
    let decision = choose(&ctx);

    // Assert: one extra reasoning line and a goal-specific impact
    assert!(decision
      .reasoning
      .iter()
      .any(|r| r == "Adjusted to align with goal timeline"));
    assert!(decision
      .impact_on_goals
      .contains(&ctx.goals.primary_goal.goal_type));
  }
}

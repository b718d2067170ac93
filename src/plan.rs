//! Plan modification advisor
//!
//! Lower-frequency analysis over adherence and trend data, proposing at most
//! one structural change to the training plan per call.
//!
//! Key principles:
//! - Checks are independent and non-exclusive; selection happens afterwards
//! - Ranking is fixed and recovery-biased: a deload always wins
//! - No plan in the snapshot means only the HRV check can fire

use crate::models::context::{ContextSnapshot, HrvTrend};
use crate::models::decision::{PlanModification, PlanModificationType};

/// Adherence below this suggests the plan asks for too much
const LOW_ADHERENCE_PCT: f64 = 70.0;
/// Adherence above this (with a slipping goal) supports harder training
const HIGH_ADHERENCE_PCT: f64 = 85.0;

/// Evaluate the snapshot for a structural plan change.
///
/// Returns `None` when no modification is warranted, which is the common
/// case. Pure: persistence happens at the engine boundary.
pub fn compute_plan_modification(ctx: &ContextSnapshot) -> Option<PlanModification> {
    let mut candidates = Vec::new();

    if let Some(plan) = &ctx.workout.current_plan {
        if plan.adherence_rate < LOW_ADHERENCE_PCT {
            candidates.push(PlanModification {
                modification_type: PlanModificationType::ReduceFrequency,
                reason: format!(
                    "Adherence is {:.0}% (below {:.0}%)",
                    plan.adherence_rate, LOW_ADHERENCE_PCT
                ),
                suggestion: "Reduce weekly training frequency by one day".to_string(),
                impact: "A lighter schedule is easier to complete consistently"
                    .to_string(),
            });
        }

        if !ctx.goals.primary_goal.on_track && plan.adherence_rate > HIGH_ADHERENCE_PCT {
            candidates.push(PlanModification {
                modification_type: PlanModificationType::IncreaseIntensity,
                reason: format!(
                    "Goal '{}' is behind schedule despite {:.0}% adherence",
                    ctx.goals.primary_goal.goal_type, plan.adherence_rate
                ),
                suggestion: "Increase session intensity or volume".to_string(),
                impact: "Harder sessions close the gap to the goal timeline"
                    .to_string(),
            });
        }
    }

    if ctx.health.readiness.hrv_trend == HrvTrend::Declining {
        candidates.push(PlanModification {
            modification_type: PlanModificationType::AddDeloadWeek,
            reason: "HRV trend has been declining".to_string(),
            suggestion: "Insert a deload week at 50% of normal volume".to_string(),
            impact: "Planned recovery restores capacity before fatigue compounds"
                .to_string(),
        });
    }

    // Shared priority ordering; deload outranks everything else
    candidates.into_iter().max_by_key(|m| m.modification_type.priority())
}

// ---------------------------------------------------------------------------
/// Tests
// ---------------------------------------------------------------------------

//! Audit log for engine outputs
//!
//! Every decision, adjustment, and plan modification is persisted for
//! traceability. The sink is write-only and best-effort: the engine never
//! reads this data back, and a failed write never affects the returned value.

use serde::Serialize;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::models::decision::{Decision, PlanModification, WorkoutAdjustment};

/// ---------------------------------------------------------------------------
/// Error Types
/// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum AuditError {
  #[error("Failed to serialize audit payload: {0}")]
  Serialize(#[from] serde_json::Error),

  #[error("Failed to write audit record: {0}")]
  Write(#[from] sqlx::Error),
}

/// ---------------------------------------------------------------------------
/// Audit Record
/// ---------------------------------------------------------------------------

/// One row in the decision log, shared by all three entry points
#[derive(Debug, Clone, Serialize)]
pub struct AuditRecord {
  pub user_id: String,
  /// Decision type or plan modification type
  pub record_type: String,
  /// Snapshot of the input being adjusted, where one exists
  pub original_json: Option<String>,
  /// The action taken or the adjusted output
  pub action_json: String,
  pub reason: String,
  pub confidence_or_impact: String,
  /// True when the output may be auto-applied
  pub applied: bool,
}

impl AuditRecord {
  pub fn from_decision(user_id: &str, decision: &Decision) -> Result<Self, AuditError> {
    Ok(Self {
      user_id: user_id.to_string(),
      record_type: decision.decision_type.as_str().to_string(),
      original_json: None,
      action_json: serde_json::to_string(decision)?,
      reason: decision.reasoning.join("; "),
      confidence_or_impact: format!("{:.2}", decision.confidence),
      applied: !decision.requires_user_approval,
    })
  }

  pub fn from_adjustment(
    user_id: &str,
    adjustment: &WorkoutAdjustment,
  ) -> Result<Self, AuditError> {
    Ok(Self {
      user_id: user_id.to_string(),
      record_type: "workout_adjustment".to_string(),
      original_json: adjustment
        .original_workout
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?,
      action_json: serde_json::to_string(&adjustment.adjusted_workout)?,
      reason: adjustment.reason.clone(),
      confidence_or_impact: adjustment.goal_alignment.clone(),
      applied: true,
    })
  }

  pub fn from_plan_modification(
    user_id: &str,
    modification: &PlanModification,
  ) -> Result<Self, AuditError> {
    Ok(Self {
      user_id: user_id.to_string(),
      record_type: modification.modification_type.as_str().to_string(),
      original_json: None,
      action_json: serde_json::to_string(modification)?,
      reason: modification.reason.clone(),
      confidence_or_impact: modification.impact.clone(),
      applied: false,
    })
  }
}

/// ---------------------------------------------------------------------------
/// Sink
/// ---------------------------------------------------------------------------

/// Insert one record into the decision log
pub async fn record(pool: &SqlitePool, rec: &AuditRecord) -> Result<(), AuditError> {
  sqlx::query(
    r#"
    INSERT INTO decision_log
      (user_id, record_type, original_json, action_json, reason,
       confidence_or_impact, applied)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    "#,
  )
  .bind(&rec.user_id)
  .bind(&rec.record_type)
  .bind(&rec.original_json)
  .bind(&rec.action_json)
  .bind(&rec.reason)
  .bind(&rec.confidence_or_impact)
  .bind(rec.applied)
  .execute(pool)
  .await?;

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

//! Public entry points
//!
//! The engine wraps the pure pipelines (decision, adjustment, plan) with the
//! fire-and-forget audit write. Computation is synchronous over the snapshot;
//! the only async boundary is persistence, and a failed write is logged and
//! swallowed so the computed value always reaches the caller.

use sqlx::SqlitePool;

use crate::adjustment;
use crate::audit::{self, AuditError, AuditRecord};
use crate::decision;
use crate::models::context::ContextSnapshot;
use crate::models::decision::{Decision, PlanModification, WorkoutAdjustment};
use crate::plan;

/// Adaptive workout decision engine.
///
/// Holds no per-user state; concurrent calls with different snapshots are
/// independent.
pub struct DecisionEngine {
  pool: Option<SqlitePool>,
}

impl DecisionEngine {
  /// Engine with an audit sink
  pub fn new(pool: SqlitePool) -> Self {
    Self { pool: Some(pool) }
  }

  /// Engine without persistence (pure computation only)
  pub fn detached() -> Self {
    Self { pool: None }
  }

  /// Turn the snapshot into exactly one actionable decision
  pub async fn make_decision(&self, ctx: &ContextSnapshot) -> Decision {
    let decision = decision::choose(ctx);
    self
      .persist(AuditRecord::from_decision(&ctx.user.id, &decision))
      .await;
    decision
  }

  /// Produce today's adjusted workout as a structured diff
  pub async fn adjust_todays_workout(&self, ctx: &ContextSnapshot) -> WorkoutAdjustment {
    let adjustment = adjustment::compute_adjustment(ctx);
    self
      .persist(AuditRecord::from_adjustment(&ctx.user.id, &adjustment))
      .await;
    adjustment
  }

  /// Propose at most one structural plan change
  pub async fn suggest_plan_modification(
    &self,
    ctx: &ContextSnapshot,
  ) -> Option<PlanModification> {
    let modification = plan::compute_plan_modification(ctx)?;
    self
      .persist(AuditRecord::from_plan_modification(&ctx.user.id, &modification))
      .await;
    Some(modification)
  }

  /// Best-effort audit write; failures are logged and swallowed
  async fn persist(&self, record: Result<AuditRecord, AuditError>) {
    let Some(pool) = &self.pool else {
      return;
    };
    match record {
      Ok(rec) => {
        if let Err(e) = audit::record(pool, &rec).await {
          eprintln!("Audit write failed: {}", e);
        }
      }
      Err(e) => eprintln!("Failed to build audit record: {}", e),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------

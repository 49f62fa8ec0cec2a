//! Commit Use Case
//!
//! Orchestrates the single external flow in the engine:
//! 1. Re-run the estimator on the current inputs
//! 2. Build the project payload (deadline, rationale, scores)
//! 3. Validate (blank title, non-positive budget) before any external call
//! 4. Hand the payload to the project repository, exactly once
//!
//! The use case also enforces the at-most-one-outstanding-commit invariant:
//! while a commit is in flight, further submits fail with `CommitInFlight`
//! instead of reaching the repository. A failed commit leaves no side effect
//! and no retry happens here.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::ProjectPayload;
use crate::domain::ports::ProjectRepository;
use crate::domain::services::{estimate_pro, estimate_quick};
use crate::error::{EstimaError, EstimaResult};

use super::options::{ProCommitOptions, QuickCommitOptions};
use super::result::CommitReceipt;

/// Weeks assumed when the pro schedule resolves to zero
///
/// Unreachable with sanitized inputs (hours are at least 48), kept for
/// parity with the dashboard's historical behavior.
const FALLBACK_WEEKS: u32 = 4;

/// Build the repository payload for a quick estimate
///
/// Pure except for the injected `now`; exposed so the deadline math is
/// testable without a repository.
pub fn build_quick_payload(
    options: &QuickCommitOptions,
    now: DateTime<Utc>,
) -> EstimaResult<ProjectPayload> {
    if options.meta.title_is_blank() {
        return Err(EstimaError::MissingTitle);
    }

    let estimate = estimate_quick(&options.dials);
    let budget = estimate.price as f64;
    if budget <= 0.0 {
        return Err(EstimaError::InvalidBudget { resolved: budget });
    }

    let dials = &options.dials;
    Ok(ProjectPayload {
        title: options.meta.title.clone(),
        description: format!(
            "[Quick Plan] Q:{}% U:{}% S:{}%",
            dials.quality.value(),
            dials.urgency.value(),
            dials.scope.value()
        ),
        budget_estimated: budget,
        deadline: now + Duration::days(i64::from(estimate.effort_days)),
        quality_score: dials.quality.value(),
        time_score: dials.urgency.value(),
        scope_score: dials.scope.value(),
    })
}

/// Build the repository payload for a pro estimate
///
/// The budget resolves to the client's offer when one is present and
/// non-zero, otherwise to the suggested price. The three scores are the
/// pro path's fixed mapping onto the shared schema: quality 80, time 50,
/// scope `min(100, points * 10)` - complexity tracking, not the triad.
pub fn build_pro_payload(
    options: &ProCommitOptions,
    now: DateTime<Utc>,
) -> EstimaResult<ProjectPayload> {
    if options.meta.title_is_blank() {
        return Err(EstimaError::MissingTitle);
    }

    let estimate = estimate_pro(&options.selection, &options.commercial);

    let budget = options
        .commercial
        .client_offer
        .filter(|offer| *offer > 0.0)
        .unwrap_or(estimate.suggested_price);
    if budget <= 0.0 {
        return Err(EstimaError::InvalidBudget { resolved: budget });
    }

    let weeks = if estimate.estimated_weeks > 0 {
        estimate.estimated_weeks
    } else {
        FALLBACK_WEEKS
    };

    let client = options.meta.client.as_deref().unwrap_or("Não informado");
    let scope_text = options.meta.description.as_deref().unwrap_or("Sem descrição");
    let description = format!(
        "CLIENTE: {client}\nDESCRIÇÃO: {scope_text}\n---\nMÉTRICAS TÉCNICAS:\n- Complexidade: {} ({} pts)\n- Equipe: {} devs\n- Taxa Hora: R$ {}",
        estimate.score.level,
        estimate.score.total_points,
        options.commercial.developer_count,
        options.commercial.hourly_rate,
    );

    Ok(ProjectPayload {
        title: options.meta.title.clone(),
        description,
        budget_estimated: budget,
        deadline: now + Duration::days(i64::from(weeks) * 7),
        quality_score: 80,
        time_score: 50,
        scope_score: (u32::from(estimate.score.total_points) * 10).min(100) as u8,
    })
}

/// Commit use case - validates, builds and submits one payload per call
///
/// Parameterized by the repository port for testability.
pub struct CommitUseCase<R: ProjectRepository> {
    repository: R,
    in_flight: AtomicBool,
}

impl<R: ProjectRepository> CommitUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Commit a quick estimate, with the deadline anchored at the current time
    pub fn commit_quick(&self, options: &QuickCommitOptions) -> EstimaResult<CommitReceipt> {
        self.commit_quick_at(options, Utc::now())
    }

    /// Commit a quick estimate with an explicit clock
    pub fn commit_quick_at(
        &self,
        options: &QuickCommitOptions,
        now: DateTime<Utc>,
    ) -> EstimaResult<CommitReceipt> {
        let _guard = self.acquire()?;
        let payload = build_quick_payload(options, now)?;
        self.submit(payload)
    }

    /// Commit a pro estimate, with the deadline anchored at the current time
    pub fn commit_pro(&self, options: &ProCommitOptions) -> EstimaResult<CommitReceipt> {
        self.commit_pro_at(options, Utc::now())
    }

    /// Commit a pro estimate with an explicit clock
    pub fn commit_pro_at(
        &self,
        options: &ProCommitOptions,
        now: DateTime<Utc>,
    ) -> EstimaResult<CommitReceipt> {
        let _guard = self.acquire()?;
        let payload = build_pro_payload(options, now)?;
        self.submit(payload)
    }

    /// True while a commit is outstanding (UI disables re-submission)
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    fn acquire(&self) -> EstimaResult<InFlightGuard<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(EstimaError::CommitInFlight);
        }
        Ok(InFlightGuard(&self.in_flight))
    }

    fn submit(&self, payload: ProjectPayload) -> EstimaResult<CommitReceipt> {
        let project_id = self
            .repository
            .create_project(&payload)
            .map_err(EstimaError::Repository)?;
        Ok(CommitReceipt {
            project_id,
            budget_committed: payload.budget_estimated,
            deadline: payload.deadline,
        })
    }
}

/// Clears the in-flight flag when the commit attempt ends, success or not
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

//! Issue listing, detail, status transitions and dashboard counters.

use std::sync::Arc;

use tracing::{debug, info};

use unidesk_core::config::IssuesConfig;
use unidesk_core::{AppError, AppResult};
use unidesk_database::repositories::IssueRepository;
use unidesk_entity::issue::{
    IssueDetail, IssueFilter, IssueStats, IssueStatus, IssueSummary, TransitionOutcome,
    TransitionPolicy,
};

use crate::context::RequestContext;

use super::backlog::plan_backlog;

/// Drives the classroom issue workflow.
#[derive(Debug, Clone)]
pub struct IssueService {
    issue_repo: Arc<IssueRepository>,
    config: IssuesConfig,
}

impl IssueService {
    /// Creates a new issue service.
    pub fn new(issue_repo: Arc<IssueRepository>, config: IssuesConfig) -> Self {
        Self { issue_repo, config }
    }

    fn policy(&self) -> TransitionPolicy {
        TransitionPolicy::from_flag(self.config.enforce_forward_transitions)
    }

    /// Top up every class leader to `issues.min_backlog` complaints.
    ///
    /// Returns the number of complaints generated. Safe to run concurrently.
    pub async fn ensure_backlog(&self) -> AppResult<u64> {
        let templates = self.issue_repo.template_ids().await?;
        let leaders = self.issue_repo.leader_backlogs().await?;

        let plan = plan_backlog(&templates, &leaders, self.config.min_backlog);
        if plan.is_empty() {
            debug!(leaders = leaders.len(), "Issue backlog already sufficient");
            return Ok(0);
        }

        let inserted = self.issue_repo.insert_backlog(&plan).await?;
        info!(
            planned = plan.len(),
            inserted,
            "Generated classroom issues for class leaders"
        );
        Ok(inserted)
    }

    async fn backlog_on_read(&self) -> AppResult<()> {
        if self.config.backlog_on_read {
            self.ensure_backlog().await?;
        }
        Ok(())
    }

    /// All complaints matching `filter`, by class then newest first.
    pub async fn list(&self, filter: IssueFilter) -> AppResult<Vec<IssueSummary>> {
        self.backlog_on_read().await?;
        self.issue_repo.list(filter).await
    }

    /// One complaint with its status history.
    pub async fn detail(&self, id: i64) -> AppResult<IssueDetail> {
        let issue = self
            .issue_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Issue not found"))?;
        let history = self.issue_repo.history(id).await?;
        Ok(IssueDetail { issue, history })
    }

    /// Move a complaint to `new_status` on behalf of the authenticated user.
    ///
    /// `claimed_user_id`, when sent, must name the authenticated user. The
    /// acting user is always taken from `ctx`.
    pub async fn transition(
        &self,
        ctx: &RequestContext,
        id: i64,
        new_status: IssueStatus,
        note: Option<&str>,
        claimed_user_id: Option<i64>,
    ) -> AppResult<TransitionOutcome> {
        if claimed_user_id.is_some_and(|claimed| claimed != ctx.user_id) {
            return Err(AppError::forbidden(
                "user_id does not match the authenticated user",
            ));
        }

        let note = crate::optional(note);
        let outcome = self
            .issue_repo
            .transition(id, new_status, ctx.user_id, note.as_deref(), self.policy())
            .await
            .map_err(|e| e.into_internal("Failed to update status"))?;

        info!(
            user_id = ctx.user_id,
            issue_id = id,
            old_status = %outcome.old_status,
            new_status = %outcome.new_status,
            notified = outcome.notification_id.is_some(),
            "Issue status updated"
        );
        Ok(outcome)
    }

    /// Per-status counters for the dashboard.
    pub async fn stats(&self) -> AppResult<IssueStats> {
        self.backlog_on_read().await?;
        self.issue_repo.stats().await
    }
}

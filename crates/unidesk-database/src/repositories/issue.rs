//! Classroom issue repository: complaints, assignments and status history.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use unidesk_core::error::{AppError, ErrorKind};
use unidesk_core::result::AppResult;
use unidesk_entity::issue::{
    BacklogSlot, IssueFilter, IssueStats, IssueStatus, IssueStatusEvent, IssueSummary,
    LeaderBacklog, TransitionOutcome, TransitionPolicy,
};
use unidesk_entity::issue::backlog::SEEDED_DESCRIPTION;
use unidesk_entity::notification::NotificationDraft;

use super::notification::insert_notification;

const SUMMARY_SELECT: &str = "\
    SELECT c.id, c.template_id, t.name AS issue_name, t.category_id, \
           cat.name AS category_name, l.class_id, cls.name AS class_name, \
           s.id AS leader_student_id, s.name AS leader_name, c.description, \
           a.assigned_status, c.created_at, c.updated_at \
    FROM issue_complaints c \
    JOIN issue_templates t ON t.id = c.template_id \
    JOIN issue_categories cat ON cat.id = t.category_id \
    LEFT JOIN class_leaders l ON l.id = c.leader_id \
    LEFT JOIN classes cls ON cls.id = l.class_id \
    LEFT JOIN students s ON s.id = l.student_id \
    LEFT JOIN issue_assignments a ON a.complaint_id = c.id";

#[derive(Debug, FromRow)]
struct IssueRow {
    id: i64,
    template_id: i64,
    issue_name: String,
    category_id: i64,
    category_name: String,
    class_id: Option<i64>,
    class_name: Option<String>,
    leader_student_id: Option<i64>,
    leader_name: Option<String>,
    description: Option<String>,
    assigned_status: Option<IssueStatus>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<IssueRow> for IssueSummary {
    fn from(row: IssueRow) -> Self {
        Self {
            id: row.id,
            template_id: row.template_id,
            issue_name: row.issue_name,
            category_id: row.category_id,
            category_name: row.category_name,
            class_id: row.class_id,
            class_name: row.class_name,
            leader_student_id: row.leader_student_id,
            leader_name: row.leader_name,
            description: row.description,
            status: row.assigned_status.unwrap_or_default(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for the classroom issue workflow.
#[derive(Debug, Clone)]
pub struct IssueRepository {
    pool: PgPool,
}

impl IssueRepository {
    /// Create a new issue repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Ids of every issue template, ascending.
    pub async fn template_ids(&self) -> AppResult<Vec<i64>> {
        sqlx::query_scalar("SELECT id FROM issue_templates ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list issue templates", e))
    }

    /// Every class leader with the templates of the complaints filed under them.
    pub async fn leader_backlogs(&self) -> AppResult<Vec<LeaderBacklog>> {
        let rows: Vec<(i64, Vec<i64>)> = sqlx::query_as(
            "SELECT l.id, \
                    COALESCE(ARRAY_AGG(c.template_id ORDER BY c.template_id) \
                             FILTER (WHERE c.id IS NOT NULL), '{}'::BIGINT[]) \
             FROM class_leaders l \
             LEFT JOIN issue_complaints c ON c.leader_id = l.id \
             GROUP BY l.id \
             ORDER BY l.id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read leader backlogs", e))?;

        Ok(rows
            .into_iter()
            .map(|(leader_id, template_ids)| LeaderBacklog {
                leader_id,
                template_ids,
            })
            .collect())
    }

    /// Insert generated complaints in one statement.
    ///
    /// Slots that already have a generated complaint are skipped, so concurrent
    /// callers never duplicate a (leader, template) pair. Returns the number of
    /// rows actually inserted.
    pub async fn insert_backlog(&self, slots: &[BacklogSlot]) -> AppResult<u64> {
        if slots.is_empty() {
            return Ok(0);
        }

        let (leader_ids, template_ids): (Vec<i64>, Vec<i64>) = slots
            .iter()
            .map(|slot| (slot.leader_id, slot.template_id))
            .unzip();

        let result = sqlx::query(
            "INSERT INTO issue_complaints (template_id, leader_id, description, origin) \
             SELECT s.template_id, s.leader_id, $3, 'seeded' \
             FROM UNNEST($1::BIGINT[], $2::BIGINT[]) AS s(leader_id, template_id) \
             ON CONFLICT DO NOTHING",
        )
        .bind(&leader_ids)
        .bind(&template_ids)
        .bind(SEEDED_DESCRIPTION)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to generate issues", e))?;

        Ok(result.rows_affected())
    }

    /// List complaints, grouped by class with leaderless complaints last and
    /// newest first within a class.
    pub async fn list(&self, filter: IssueFilter) -> AppResult<Vec<IssueSummary>> {
        let sql = format!(
            "{SUMMARY_SELECT} \
             WHERE ($1::issue_status IS NULL OR COALESCE(a.assigned_status, 'Pending') = $1) \
               AND ($2::BIGINT IS NULL OR l.class_id = $2) \
             ORDER BY l.class_id ASC NULLS LAST, c.created_at DESC, c.id DESC"
        );

        let rows = sqlx::query_as::<_, IssueRow>(&sql)
            .bind(filter.status)
            .bind(filter.class_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list issues", e))?;

        Ok(rows.into_iter().map(IssueSummary::from).collect())
    }

    /// Find one complaint by id.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<IssueSummary>> {
        let sql = format!("{SUMMARY_SELECT} WHERE c.id = $1");

        let row = sqlx::query_as::<_, IssueRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find issue", e))?;

        Ok(row.map(IssueSummary::from))
    }

    /// Status history of a complaint, oldest first.
    pub async fn history(&self, complaint_id: i64) -> AppResult<Vec<IssueStatusEvent>> {
        sqlx::query_as::<_, IssueStatusEvent>(
            "SELECT e.id, e.complaint_id, e.old_status, e.new_status, e.changed_by_user_id, \
                    COALESCE(u.full_name, u.username) AS changed_by_name, e.note, e.changed_at \
             FROM issue_status_events e \
             JOIN users u ON u.id = e.changed_by_user_id \
             WHERE e.complaint_id = $1 \
             ORDER BY e.changed_at ASC, e.id ASC",
        )
        .bind(complaint_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load issue history", e))
    }

    /// Apply a status change as one unit.
    ///
    /// Locks the complaint, upserts its assignment, appends a history event and
    /// notifies the reporting leader when they have a user account. Nothing is
    /// written unless every step succeeds.
    pub async fn transition(
        &self,
        id: i64,
        new_status: IssueStatus,
        actor_user_id: i64,
        note: Option<&str>,
        policy: TransitionPolicy,
    ) -> AppResult<TransitionOutcome> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let locked: Option<i64> =
            sqlx::query_scalar("SELECT id FROM issue_complaints WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock issue", e))?;
        if locked.is_none() {
            return Err(AppError::not_found("Issue not found"));
        }

        let current: Option<IssueStatus> = sqlx::query_scalar(
            "SELECT assigned_status FROM issue_assignments WHERE complaint_id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to read issue status", e))?;
        let old_status = current.unwrap_or_default();

        policy.check(old_status, new_status)?;

        sqlx::query(
            "INSERT INTO issue_assignments (complaint_id, assigned_to_user_id, assigned_status) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (complaint_id) \
             DO UPDATE SET assigned_status = EXCLUDED.assigned_status, updated_at = NOW()",
        )
        .bind(id)
        .bind(actor_user_id)
        .bind(new_status)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update assignment", e))?;

        let event_id: i64 = sqlx::query_scalar(
            "INSERT INTO issue_status_events \
                 (complaint_id, old_status, new_status, changed_by_user_id, note) \
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(id)
        .bind(old_status)
        .bind(new_status)
        .bind(actor_user_id)
        .bind(note)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to record status event", e))?;

        let reporter: Option<i64> = sqlx::query_scalar::<_, Option<i64>>(
            "SELECT s.user_id FROM issue_complaints c \
             JOIN class_leaders l ON l.id = c.leader_id \
             JOIN students s ON s.id = l.student_id \
             WHERE c.id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to resolve reporter", e))?
        .flatten();

        let notification_id = match reporter {
            Some(user_id) => {
                let draft = NotificationDraft::issue_status_changed(id, new_status);
                Some(insert_notification(&mut *tx, user_id, &draft).await?)
            }
            None => None,
        };

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit status change", e)
        })?;

        Ok(TransitionOutcome {
            issue_id: id,
            old_status,
            new_status,
            event_id,
            notification_id,
        })
    }

    /// Per-status counters read from a single snapshot.
    pub async fn stats(&self) -> AppResult<IssueStats> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set isolation", e))?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM issue_complaints")
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count issues", e))?;

        let assigned: Vec<(IssueStatus, i64)> = sqlx::query_as(
            "SELECT assigned_status, COUNT(*) FROM issue_assignments GROUP BY assigned_status",
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count statuses", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to finish stats snapshot", e)
        })?;

        Ok(IssueStats::from_counts(total, &assigned))
    }
}

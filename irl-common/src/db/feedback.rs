//! Feedback store operations
//!
//! The single shared mutable resource across all concurrent sessions. Each
//! operation is one atomic SQLite statement; there are no multi-record
//! transactions. Deletes are last-writer-wins with respect to existence.
//!
//! Authorization model: a record can be deleted only by the session whose
//! token it was created under. Token equality is the whole rule; names and
//! roles play no part.

use crate::db::models::FeedbackRecord;
use crate::wizard::WizardStep;
use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::debug;

/// Column list shared by all reads. Missing or blank display names are
/// substituted with "Anonymous" at read time, independent of what happens
/// to be stored.
const SELECT_COLUMNS: &str = "id, user_id, \
     COALESCE(NULLIF(display_name, ''), 'Anonymous') AS display_name, \
     step, section, body, created_at";

/// Append one feedback record.
///
/// The body is trimmed before storage; an empty or whitespace-only body is
/// rejected before any write. Duplicate submissions are allowed and create
/// distinct records. Returns the record as persisted, including its
/// store-assigned id and timestamp.
pub async fn add_feedback(
    pool: &SqlitePool,
    user_id: &str,
    display_name: &str,
    step: WizardStep,
    section: &str,
    body: &str,
) -> Result<FeedbackRecord> {
    let body = body.trim();
    if body.is_empty() {
        return Err(Error::InvalidInput(
            "feedback body must not be empty".to_string(),
        ));
    }

    let result = sqlx::query(
        "INSERT INTO feedback (user_id, display_name, step, section, body) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user_id)
    .bind(display_name)
    .bind(step.as_str())
    .bind(section)
    .bind(body)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    debug!("Recorded feedback {} on {}/{}", id, step, section);

    let record = sqlx::query_as::<_, FeedbackRecord>(&format!(
        "SELECT {SELECT_COLUMNS} FROM feedback WHERE id = ?"
    ))
    .bind(id)
    .fetch_one(pool)
    .await?;

    Ok(record)
}

/// List feedback for a step, optionally narrowed to one section.
///
/// `section` of `None` means "all sections under this step". Records come
/// back in chronological order; the id breaks ties within the store's
/// one-second timestamp resolution.
pub async fn list_feedback(
    pool: &SqlitePool,
    step: WizardStep,
    section: Option<&str>,
) -> Result<Vec<FeedbackRecord>> {
    let records = match section {
        Some(section) => {
            sqlx::query_as::<_, FeedbackRecord>(&format!(
                "SELECT {SELECT_COLUMNS} FROM feedback \
                 WHERE step = ? AND section = ? \
                 ORDER BY created_at ASC, id ASC"
            ))
            .bind(step.as_str())
            .bind(section)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, FeedbackRecord>(&format!(
                "SELECT {SELECT_COLUMNS} FROM feedback \
                 WHERE step = ? \
                 ORDER BY created_at ASC, id ASC"
            ))
            .bind(step.as_str())
            .fetch_all(pool)
            .await?
        }
    };

    Ok(records)
}

/// Delete a record iff both the id and the stored author token match.
///
/// Returns whether a deletion occurred. A non-matching pair (wrong id,
/// someone else's record, already deleted) is a well-defined no-op reported
/// as `false`, never an error.
pub async fn delete_feedback(pool: &SqlitePool, id: i64, user_id: &str) -> Result<bool> {
    let result = sqlx::query("DELETE FROM feedback WHERE id = ? AND user_id = ?")
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        debug!("Deleted feedback {}", id);
    }
    Ok(deleted)
}

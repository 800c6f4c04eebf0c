//! Database models

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One persisted feedback entry.
///
/// Immutable once created except for deletion. `user_id` is an ownership
/// reference to the authoring session token; the identity itself is not
/// persisted anywhere else. `display_name` is a snapshot taken at submission
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FeedbackRecord {
    /// Store-assigned, monotonically increasing.
    pub id: i64,
    pub user_id: String,
    pub display_name: String,
    pub step: String,
    pub section: String,
    pub body: String,
    /// Assigned by the store at insert time.
    pub created_at: NaiveDateTime,
}

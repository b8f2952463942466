//! Post-rental comment entity.

use chrono::{DateTime, Utc};

/// Comment left on an item by a former renter.
///
/// Immutable once created; the author must have held an APPROVED booking of
/// the item that ended in the past at creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub text: String,
    pub author_id: i64,
    pub author_name: String,
    pub item_id: i64,
    pub created: DateTime<Utc>,
}

/// New comment payload, prior to identity assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub author_id: i64,
    pub item_id: i64,
    pub created: DateTime<Utc>,
}

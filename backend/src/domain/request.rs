//! Item request entity: a public ask for an item not currently listed.

use chrono::{DateTime, Utc};

/// Request for an item, fulfillable by other users' listings.
///
/// Never mutated after creation; fulfilling items are resolved on read by
/// querying the catalog for items whose `request_id` points here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    pub id: i64,
    pub description: String,
    pub requester_id: i64,
    pub created: DateTime<Utc>,
}

/// New item-request payload, prior to identity assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItemRequest {
    pub description: String,
    pub requester_id: i64,
    pub created: DateTime<Utc>,
}

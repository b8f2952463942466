//! Driving ports for the item catalog and the comment ledger.

use async_trait::async_trait;
use pagination::PageBounds;

use crate::domain::item::ItemPatch;
use crate::domain::views::{CommentView, ItemView};
use crate::domain::Error;

/// New item payload as accepted from the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub available: bool,
    /// Item request this listing fulfills, if any.
    pub request_id: Option<i64>,
}

/// Item mutations, owner-gated, plus post-rental comment creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemCommand: Send + Sync {
    async fn create_item(&self, owner_id: i64, draft: ItemDraft) -> Result<ItemView, Error>;

    /// Partial update; blank or absent fields are no-ops.
    async fn update_item(
        &self,
        user_id: i64,
        item_id: i64,
        patch: ItemPatch,
    ) -> Result<ItemView, Error>;

    async fn remove_item(&self, user_id: i64, item_id: i64) -> Result<(), Error>;

    /// Record a comment by a past renter of the item.
    async fn create_comment(
        &self,
        user_id: i64,
        item_id: i64,
        text: String,
    ) -> Result<CommentView, Error>;
}

/// Item reads: single view, per-owner listing, and text search.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemQuery: Send + Sync {
    /// Item view; booking projections included only for the owner.
    async fn get_item(&self, user_id: i64, item_id: i64) -> Result<ItemView, Error>;

    /// The owner's items with booking projections, id ascending.
    async fn list_owner_items(
        &self,
        owner_id: i64,
        page: PageBounds,
    ) -> Result<Vec<ItemView>, Error>;

    /// Available items matching `text`; blank text yields an empty list.
    async fn search(&self, text: String, page: PageBounds) -> Result<Vec<ItemView>, Error>;
}

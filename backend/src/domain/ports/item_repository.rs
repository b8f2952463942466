//! Port abstraction for item catalog persistence adapters.

use async_trait::async_trait;
use pagination::PageBounds;

use super::RepoError;
use crate::domain::item::{Item, NewItem};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item and return it with its assigned identity.
    async fn save(&self, item: NewItem) -> Result<Item, RepoError>;

    /// Persist the full state of an existing item.
    async fn update(&self, item: Item) -> Result<Item, RepoError>;

    async fn find_by_id(&self, item_id: i64) -> Result<Option<Item>, RepoError>;

    async fn delete_by_id(&self, item_id: i64) -> Result<(), RepoError>;

    /// Items owned by `owner_id`, sorted ascending by id, paged.
    async fn find_all_by_owner_id(
        &self,
        owner_id: i64,
        page: PageBounds,
    ) -> Result<Vec<Item>, RepoError>;

    /// Case-insensitive substring match on name or description, restricted
    /// to available items, paged. Blank text is the caller's concern.
    async fn search(&self, text: &str, page: PageBounds) -> Result<Vec<Item>, RepoError>;

    /// Items fulfilling the given item request.
    async fn find_all_by_request_id(&self, request_id: i64) -> Result<Vec<Item>, RepoError>;
}

//! Port abstraction for item-request persistence adapters.

use async_trait::async_trait;
use pagination::PageBounds;

use super::RepoError;
use crate::domain::request::{ItemRequest, NewItemRequest};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRequestRepository: Send + Sync {
    /// Persist a new item request and return it with its assigned identity.
    async fn save(&self, request: NewItemRequest) -> Result<ItemRequest, RepoError>;

    async fn find_by_id(&self, request_id: i64) -> Result<Option<ItemRequest>, RepoError>;

    /// Requests made by `requester_id`, newest first, paged.
    async fn find_all_by_requester_id(
        &self,
        requester_id: i64,
        page: PageBounds,
    ) -> Result<Vec<ItemRequest>, RepoError>;

    /// Requests made by anyone except `requester_id`, newest first, paged.
    async fn find_all_by_requester_id_not(
        &self,
        requester_id: i64,
        page: PageBounds,
    ) -> Result<Vec<ItemRequest>, RepoError>;
}

//! Driving ports for the item-request workflow.

use async_trait::async_trait;
use pagination::PageBounds;

use crate::domain::views::ItemRequestView;
use crate::domain::Error;

/// Item-request mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRequestCommand: Send + Sync {
    /// Record a new request; the returned view has no fulfilling items yet.
    async fn add_request(&self, user_id: i64, description: String)
        -> Result<ItemRequestView, Error>;
}

/// Item-request reads, each resolved with fulfilling items.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRequestQuery: Send + Sync {
    /// Requests made by the caller, newest first.
    async fn list_own(&self, user_id: i64, page: PageBounds)
        -> Result<Vec<ItemRequestView>, Error>;

    /// Requests made by everyone except the caller, newest first.
    async fn list_others(
        &self,
        user_id: i64,
        page: PageBounds,
    ) -> Result<Vec<ItemRequestView>, Error>;

    /// Any existing user may view any request.
    async fn get_request(&self, user_id: i64, request_id: i64) -> Result<ItemRequestView, Error>;
}

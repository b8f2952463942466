//! Port abstraction for booking persistence adapters.
//!
//! Each listing state filter maps to its own query method so the adapter can
//! push the predicate into SQL; every listing is sorted descending by
//! `start` and paged with the shared [`PageBounds`] convention.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::PageBounds;

use super::RepoError;
use crate::domain::booking::{Booking, BookingStatus, NewBooking};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking and return it with its assigned identity.
    async fn save(&self, booking: NewBooking) -> Result<Booking, RepoError>;

    /// Conditionally transition a booking's status.
    ///
    /// The update is guarded by the previously observed status so two
    /// concurrent confirmations cannot both win; returns the number of rows
    /// affected (zero when the guard no longer holds).
    async fn update_status(
        &self,
        booking_id: i64,
        expected: BookingStatus,
        next: BookingStatus,
    ) -> Result<u64, RepoError>;

    /// Fetch a booking with its item reference.
    async fn find_by_id(&self, booking_id: i64) -> Result<Option<Booking>, RepoError>;

    /// All bookings of an item, used for view projections and comment gating.
    async fn find_all_by_item_id(&self, item_id: i64) -> Result<Vec<Booking>, RepoError>;

    async fn find_all_by_booker_id(
        &self,
        booker_id: i64,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;

    async fn find_all_by_booker_id_and_status(
        &self,
        booker_id: i64,
        status: BookingStatus,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;

    async fn find_all_by_booker_id_and_end_before(
        &self,
        booker_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;

    async fn find_all_by_booker_id_and_start_after(
        &self,
        booker_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;

    /// Bookings whose window contains `moment` (`start < moment < end`).
    async fn find_all_by_booker_id_current(
        &self,
        booker_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;

    async fn find_all_by_owner_id(
        &self,
        owner_id: i64,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;

    async fn find_all_by_owner_id_and_status(
        &self,
        owner_id: i64,
        status: BookingStatus,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;

    async fn find_all_by_owner_id_and_end_before(
        &self,
        owner_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;

    async fn find_all_by_owner_id_and_start_after(
        &self,
        owner_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;

    /// Bookings on the owner's items whose window contains `moment`.
    async fn find_all_by_owner_id_current(
        &self,
        owner_id: i64,
        moment: DateTime<Utc>,
        page: PageBounds,
    ) -> Result<Vec<Booking>, RepoError>;
}

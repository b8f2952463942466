//! Driving ports for the booking workflow.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::PageBounds;

use crate::domain::booking::StateFilter;
use crate::domain::views::BookingView;
use crate::domain::Error;

/// Booking mutations: creation and the owner's approve/reject decision.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingCommand: Send + Sync {
    /// Create a WAITING booking of `item_id` for the calling user.
    async fn create_booking(
        &self,
        user_id: i64,
        item_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<BookingView, Error>;

    /// Approve or reject a WAITING booking as the item's owner.
    async fn confirm_booking(
        &self,
        user_id: i64,
        booking_id: i64,
        approved: bool,
    ) -> Result<BookingView, Error>;
}

/// Booking reads: single lookup and state-filtered listings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingQuery: Send + Sync {
    /// Fetch a booking visible to its booker or the item's owner.
    async fn get_booking(&self, user_id: i64, booking_id: i64) -> Result<BookingView, Error>;

    /// Bookings made by `booker_id`, filtered by `state`, newest start first.
    async fn list_for_booker(
        &self,
        state: StateFilter,
        booker_id: i64,
        page: PageBounds,
    ) -> Result<Vec<BookingView>, Error>;

    /// Bookings on items owned by `owner_id`, filtered by `state`.
    async fn list_for_owner(
        &self,
        state: StateFilter,
        owner_id: i64,
        page: PageBounds,
    ) -> Result<Vec<BookingView>, Error>;
}

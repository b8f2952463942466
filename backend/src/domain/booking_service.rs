//! Booking workflow service.
//!
//! Implements the driving booking ports over the booking, user, and item
//! repositories. Authorization failures on bookings are reported as
//! NotFound so callers cannot probe for the existence of other users'
//! bookings.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pagination::PageBounds;
use tracing::info;

use crate::domain::booking::{Booking, BookingStatus, NewBooking, StateFilter};
use crate::domain::ports::{
    BookingCommand, BookingQuery, BookingRepository, ItemRepository, UserRepository,
};
use crate::domain::views::{booking_view, BookingView};
use crate::domain::Error;

/// Booking state machine over repository ports.
#[derive(Clone)]
pub struct BookingService<B, U, I> {
    bookings: Arc<B>,
    users: Arc<U>,
    items: Arc<I>,
}

impl<B, U, I> BookingService<B, U, I> {
    /// Create a new service with the given repositories.
    pub fn new(bookings: Arc<B>, users: Arc<U>, items: Arc<I>) -> Self {
        Self {
            bookings,
            users,
            items,
        }
    }
}

impl<B, U, I> BookingService<B, U, I>
where
    B: BookingRepository,
    U: UserRepository,
    I: ItemRepository,
{
    async fn require_user(&self, user_id: i64) -> Result<(), Error> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("user with id {user_id} not found")))
    }

    async fn require_booking(&self, booking_id: i64) -> Result<Booking, Error> {
        self.bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| Error::not_found("booking not found"))
    }
}

#[async_trait]
impl<B, U, I> BookingCommand for BookingService<B, U, I>
where
    B: BookingRepository,
    U: UserRepository,
    I: ItemRepository,
{
    async fn create_booking(
        &self,
        user_id: i64,
        item_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<BookingView, Error> {
        self.require_user(user_id).await?;

        let item = self
            .items
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("item with id {item_id} not found")))?;

        if item.owner_id == user_id {
            return Err(Error::not_found("owner cannot book own item"));
        }
        if end <= start {
            return Err(Error::invalid_request("booking must end after it starts"));
        }
        if !item.available {
            return Err(Error::invalid_request("item is not available for booking"));
        }

        let booking = self
            .bookings
            .save(NewBooking {
                start,
                end,
                status: BookingStatus::Waiting,
                booker_id: user_id,
                item_id,
            })
            .await?;
        info!(booking_id = booking.id, item_id, booker_id = user_id, "booking created");
        Ok(booking_view(booking))
    }

    async fn confirm_booking(
        &self,
        user_id: i64,
        booking_id: i64,
        approved: bool,
    ) -> Result<BookingView, Error> {
        self.require_user(user_id).await?;
        let booking = self.require_booking(booking_id).await?;

        if booking.item.owner_id != user_id {
            return Err(Error::not_found("booking not found"));
        }
        if booking.status == BookingStatus::Approved {
            return Err(Error::invalid_request("booking not available"));
        }

        let next = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };

        // Guarded by the observed status: a concurrent confirm that commits
        // first leaves zero rows for the loser to update.
        let affected = self
            .bookings
            .update_status(booking_id, booking.status, next)
            .await?;
        if affected == 0 {
            return Err(Error::invalid_request("booking not available"));
        }

        info!(booking_id, owner_id = user_id, status = next.as_str(), "booking confirmed");
        let updated = self.require_booking(booking_id).await?;
        Ok(booking_view(updated))
    }
}

#[async_trait]
impl<B, U, I> BookingQuery for BookingService<B, U, I>
where
    B: BookingRepository,
    U: UserRepository,
    I: ItemRepository,
{
    async fn get_booking(&self, user_id: i64, booking_id: i64) -> Result<BookingView, Error> {
        self.require_user(user_id).await?;
        let booking = self.require_booking(booking_id).await?;

        if booking.booker_id != user_id && booking.item.owner_id != user_id {
            return Err(Error::not_found("booking not found"));
        }
        Ok(booking_view(booking))
    }

    async fn list_for_booker(
        &self,
        state: StateFilter,
        booker_id: i64,
        page: PageBounds,
    ) -> Result<Vec<BookingView>, Error> {
        self.require_user(booker_id).await?;
        let now = Utc::now();
        let bookings = match state {
            StateFilter::All => self.bookings.find_all_by_booker_id(booker_id, page).await?,
            StateFilter::Waiting => {
                self.bookings
                    .find_all_by_booker_id_and_status(booker_id, BookingStatus::Waiting, page)
                    .await?
            }
            StateFilter::Rejected => {
                self.bookings
                    .find_all_by_booker_id_and_status(booker_id, BookingStatus::Rejected, page)
                    .await?
            }
            StateFilter::Past => {
                self.bookings
                    .find_all_by_booker_id_and_end_before(booker_id, now, page)
                    .await?
            }
            StateFilter::Future => {
                self.bookings
                    .find_all_by_booker_id_and_start_after(booker_id, now, page)
                    .await?
            }
            StateFilter::Current => {
                self.bookings
                    .find_all_by_booker_id_current(booker_id, now, page)
                    .await?
            }
        };
        Ok(bookings.into_iter().map(booking_view).collect())
    }

    async fn list_for_owner(
        &self,
        state: StateFilter,
        owner_id: i64,
        page: PageBounds,
    ) -> Result<Vec<BookingView>, Error> {
        self.require_user(owner_id).await?;
        let now = Utc::now();
        let bookings = match state {
            StateFilter::All => self.bookings.find_all_by_owner_id(owner_id, page).await?,
            StateFilter::Waiting => {
                self.bookings
                    .find_all_by_owner_id_and_status(owner_id, BookingStatus::Waiting, page)
                    .await?
            }
            StateFilter::Rejected => {
                self.bookings
                    .find_all_by_owner_id_and_status(owner_id, BookingStatus::Rejected, page)
                    .await?
            }
            StateFilter::Past => {
                self.bookings
                    .find_all_by_owner_id_and_end_before(owner_id, now, page)
                    .await?
            }
            StateFilter::Future => {
                self.bookings
                    .find_all_by_owner_id_and_start_after(owner_id, now, page)
                    .await?
            }
            StateFilter::Current => {
                self.bookings
                    .find_all_by_owner_id_current(owner_id, now, page)
                    .await?
            }
        };
        Ok(bookings.into_iter().map(booking_view).collect())
    }
}

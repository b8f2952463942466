//! Booking entity, status lifecycle, and listing state filters.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Lifecycle status of a booking.
///
/// A booking is created `Waiting` and transitions exactly once to
/// `Approved` or `Rejected` by the item's owner. `Canceled` is reserved for
/// booker-initiated cancellation and never set by the core today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
    Canceled,
}

impl BookingStatus {
    /// Stable storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Parse the storage representation.
    ///
    /// # Errors
    /// Returns an internal error for values not produced by [`Self::as_str`].
    pub fn parse(value: &str) -> Result<Self, Error> {
        match value {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(Error::internal(format!("unknown booking status: {other}"))),
        }
    }
}

/// Named predicate narrowing a booking listing, evaluated against "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateFilter {
    /// No filter.
    All,
    /// `start < now < end`.
    Current,
    /// `end < now`.
    Past,
    /// `start > now`.
    Future,
    /// `status == WAITING`.
    Waiting,
    /// `status == REJECTED`.
    Rejected,
}

impl StateFilter {
    /// Parse a state filter from its query-parameter form.
    ///
    /// Input is case-insensitive; a missing or blank value means [`Self::All`].
    ///
    /// # Errors
    /// Unknown values are rejected with [`ErrorCode::InvalidRequest`] before
    /// they can reach any repository query.
    pub fn parse(value: Option<&str>) -> Result<Self, Error> {
        let Some(text) = value else {
            return Ok(Self::All);
        };
        match text.trim().to_uppercase().as_str() {
            "" | "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(Error::new(
                ErrorCode::InvalidRequest,
                "Unknown state: UNSUPPORTED_STATUS",
            )),
        }
    }
}

/// Item fields a booking carries for views and ownership checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedItem {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
}

/// Booking of an item for a time window.
///
/// Invariants enforced at creation: `end > start`, the booker is not the
/// item's owner, and the item was available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub booker_id: i64,
    pub item: BookedItem,
}

/// New booking payload, prior to identity assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub booker_id: i64,
    pub item_id: i64,
}

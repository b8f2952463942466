//! Externally visible representations assembled from items, bookings, and
//! comments.
//!
//! Services return these views so inbound adapters serialize them directly;
//! the assembly rules (comment ordering, last/next booking projection) live
//! here rather than in each handler.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::booking::{Booking, BookingStatus};
use crate::domain::comment::Comment;
use crate::domain::item::Item;
use crate::domain::request::ItemRequest;

/// Comment as shown on an item view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: i64,
    pub text: String,
    pub author_name: String,
    pub created: DateTime<Utc>,
}

/// Booking reduced to the fields an item owner sees on their listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRef {
    pub id: i64,
    pub booker_id: i64,
}

/// Item representation returned by catalog reads and search.
///
/// `last_booking`/`next_booking` are populated only for the owner's view;
/// absence of a qualifying booking yields `null`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub last_booking: Option<BookingRef>,
    pub next_booking: Option<BookingRef>,
    pub comments: Vec<CommentView>,
}

/// Item fields embedded in a booking view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingItemView {
    pub id: i64,
    pub name: String,
}

/// Booker reference embedded in a booking view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookerView {
    pub id: i64,
}

/// Booking representation returned by the booking endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub status: BookingStatus,
    pub booker: BookerView,
    pub item: BookingItemView,
}

/// Item request with its fulfilling items resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequestView {
    pub id: i64,
    pub description: String,
    pub created: DateTime<Utc>,
    pub items: Vec<ItemView>,
}

/// Sort comments newest first; equal timestamps keep their input order.
#[must_use]
pub fn comment_views(comments: Vec<Comment>) -> Vec<CommentView> {
    let mut views: Vec<CommentView> = comments
        .into_iter()
        .map(|comment| CommentView {
            id: comment.id,
            text: comment.text,
            author_name: comment.author_name,
            created: comment.created,
        })
        .collect();
    views.sort_by(|a, b| b.created.cmp(&a.created));
    views
}

/// Plain item view without booking projections.
#[must_use]
pub fn item_view(item: Item, comments: Vec<Comment>) -> ItemView {
    ItemView {
        id: item.id,
        name: item.name,
        description: item.description,
        available: item.available,
        last_booking: None,
        next_booking: None,
        comments: comment_views(comments),
    }
}

/// Owner's item view with last/next APPROVED booking projections.
///
/// "Last" is the most recent approved booking started before `now`; "next"
/// is the earliest approved booking starting after `now`.
#[must_use]
pub fn item_view_with_bookings(
    item: Item,
    comments: Vec<Comment>,
    bookings: &[Booking],
    now: DateTime<Utc>,
) -> ItemView {
    let approved = |booking: &&Booking| booking.status == BookingStatus::Approved;

    let last_booking = bookings
        .iter()
        .filter(approved)
        .filter(|booking| booking.start < now)
        .max_by_key(|booking| booking.start)
        .map(to_booking_ref);

    let next_booking = bookings
        .iter()
        .filter(approved)
        .filter(|booking| booking.start > now)
        .min_by_key(|booking| booking.start)
        .map(to_booking_ref);

    ItemView {
        last_booking,
        next_booking,
        ..item_view(item, comments)
    }
}

fn to_booking_ref(booking: &Booking) -> BookingRef {
    BookingRef {
        id: booking.id,
        booker_id: booking.booker_id,
    }
}

/// Full booking view for the booking endpoints.
#[must_use]
pub fn booking_view(booking: Booking) -> BookingView {
    BookingView {
        id: booking.id,
        start: booking.start,
        end: booking.end,
        status: booking.status,
        booker: BookerView {
            id: booking.booker_id,
        },
        item: BookingItemView {
            id: booking.item.id,
            name: booking.item.name,
        },
    }
}

/// Comment view for the comment-creation endpoint.
#[must_use]
pub fn comment_view(comment: Comment) -> CommentView {
    CommentView {
        id: comment.id,
        text: comment.text,
        author_name: comment.author_name,
        created: comment.created,
    }
}

/// Item request view with resolved fulfilling items.
#[must_use]
pub fn request_view(request: ItemRequest, items: Vec<ItemView>) -> ItemRequestView {
    ItemRequestView {
        id: request.id,
        description: request.description,
        created: request.created,
        items,
    }
}

//! Booking workflow HTTP handlers.
//!
//! ```text
//! POST  /bookings
//! PATCH /bookings/{booking_id}?approved={true|false}
//! GET   /bookings/{booking_id}
//! GET   /bookings?state=&from=&size=
//! GET   /bookings/owner?state=&from=&size=
//! ```

use actix_web::{get, patch, post, web};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::domain::booking::StateFilter;
use crate::domain::views::BookingView;
use crate::domain::Error;
use crate::inbound::http::identity::UserIdentity;
use crate::inbound::http::query::PageQuery;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_timestamp;
use crate::inbound::http::ApiResult;

const DEFAULT_PAGE_SIZE: i64 = 20;

/// Request payload for creating a booking.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingBody {
    pub item_id: Option<i64>,
    #[schema(format = "date-time")]
    pub start: Option<String>,
    #[schema(format = "date-time")]
    pub end: Option<String>,
}

/// Query parameter for the owner's approve/reject decision.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ApprovedQuery {
    pub approved: Option<bool>,
}

/// Query parameters for state-filtered booking listings.
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookingListQuery {
    pub state: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

impl BookingListQuery {
    fn parse(self) -> Result<(StateFilter, pagination::PageBounds), Error> {
        let filter = StateFilter::parse(self.state.as_deref())?;
        let page = PageQuery {
            from: self.from,
            size: self.size,
        }
        .bounds(DEFAULT_PAGE_SIZE)?;
        Ok((filter, page))
    }
}

/// Book an item for a time window; the booking starts WAITING.
#[utoipa::path(
    post,
    path = "/bookings",
    request_body = CreateBookingBody,
    responses(
        (status = 200, description = "Booking created", body = BookingView),
        (status = 400, description = "Invalid window or unavailable item", body = ErrorSchema),
        (status = 404, description = "User or item not found", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "createBooking"
)]
#[post("/bookings")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    user: UserIdentity,
    payload: web::Json<CreateBookingBody>,
) -> ApiResult<web::Json<BookingView>> {
    let body = payload.into_inner();
    let item_id = body
        .item_id
        .ok_or_else(|| Error::invalid_request("itemId is required"))?;
    let start = body
        .start
        .ok_or_else(|| Error::invalid_request("start is required"))?;
    let end = body
        .end
        .ok_or_else(|| Error::invalid_request("end is required"))?;

    let start = parse_timestamp(&start, "start")?;
    let end = parse_timestamp(&end, "end")?;

    let view = state
        .bookings
        .create_booking(user.id(), item_id, start, end)
        .await?;
    Ok(web::Json(view))
}

/// Approve or reject a waiting booking as the item's owner.
#[utoipa::path(
    patch,
    path = "/bookings/{booking_id}",
    params(ApprovedQuery),
    responses(
        (status = 200, description = "Decision recorded", body = BookingView),
        (status = 400, description = "Booking already decided", body = ErrorSchema),
        (status = 404, description = "Booking not visible to the caller", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "confirmBooking"
)]
#[patch("/bookings/{booking_id}")]
pub async fn confirm_booking(
    state: web::Data<HttpState>,
    user: UserIdentity,
    path: web::Path<i64>,
    query: web::Query<ApprovedQuery>,
) -> ApiResult<web::Json<BookingView>> {
    let approved = query
        .into_inner()
        .approved
        .ok_or_else(|| Error::invalid_request("approved parameter is required"))?;

    let view = state
        .bookings
        .confirm_booking(user.id(), path.into_inner(), approved)
        .await?;
    Ok(web::Json(view))
}

/// Fetch a booking visible to its booker or the item's owner.
#[utoipa::path(
    get,
    path = "/bookings/{booking_id}",
    responses(
        (status = 200, description = "Booking found", body = BookingView),
        (status = 404, description = "Booking not visible to the caller", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "getBooking"
)]
#[get("/bookings/{booking_id}")]
pub async fn get_booking(
    state: web::Data<HttpState>,
    user: UserIdentity,
    path: web::Path<i64>,
) -> ApiResult<web::Json<BookingView>> {
    let view = state
        .bookings_query
        .get_booking(user.id(), path.into_inner())
        .await?;
    Ok(web::Json(view))
}

/// List the caller's bookings, filtered by state, newest start first.
#[utoipa::path(
    get,
    path = "/bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Caller's bookings", body = [BookingView]),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "listBookings"
)]
#[get("/bookings")]
pub async fn list_bookings(
    state: web::Data<HttpState>,
    user: UserIdentity,
    query: web::Query<BookingListQuery>,
) -> ApiResult<web::Json<Vec<BookingView>>> {
    let (filter, page) = query.into_inner().parse()?;
    let views = state
        .bookings_query
        .list_for_booker(filter, user.id(), page)
        .await?;
    Ok(web::Json(views))
}

/// List bookings on the caller's items, filtered by state.
#[utoipa::path(
    get,
    path = "/bookings/owner",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Bookings on the caller's items", body = [BookingView]),
        (status = 400, description = "Unknown state or invalid pagination", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["bookings"],
    operation_id = "listOwnerBookings"
)]
#[get("/bookings/owner")]
pub async fn list_owner_bookings(
    state: web::Data<HttpState>,
    user: UserIdentity,
    query: web::Query<BookingListQuery>,
) -> ApiResult<web::Json<Vec<BookingView>>> {
    let (filter, page) = query.into_inner().parse()?;
    let views = state
        .bookings_query
        .list_for_owner(filter, user.id(), page)
        .await?;
    Ok(web::Json(views))
}

#[cfg(test)]
#[path = "bookings_tests.rs"]
mod tests;

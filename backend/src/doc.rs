//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification covering every REST
//! endpoint of the inbound layer. The document is served as JSON by the
//! server and consumed by external tooling.

use utoipa::OpenApi;

use crate::domain::booking::BookingStatus;
use crate::domain::user::User;
use crate::domain::views::{
    BookerView, BookingItemView, BookingRef, BookingView, CommentView, ItemRequestView, ItemView,
};
use crate::inbound::http::bookings::CreateBookingBody;
use crate::inbound::http::items::{CommentBody, CreateItemBody, UpdateItemBody};
use crate::inbound::http::requests::CreateRequestBody;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::users::{CreateUserBody, UpdateUserBody};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item sharing backend API",
        description = "HTTP interface for listing, requesting, and booking shared items. \
                       Callers are identified by the X-Sharer-User-Id header."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::list_owner_items,
        crate::inbound::http::items::search_items,
        crate::inbound::http::items::create_comment,
        crate::inbound::http::items::delete_item,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::confirm_booking,
        crate::inbound::http::bookings::get_booking,
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::bookings::list_owner_bookings,
        crate::inbound::http::requests::create_request,
        crate::inbound::http::requests::list_own_requests,
        crate::inbound::http::requests::list_other_requests,
        crate::inbound::http::requests::get_request,
    ),
    components(schemas(
        User,
        ItemView,
        BookingView,
        BookingRef,
        BookerView,
        BookingItemView,
        BookingStatus,
        CommentView,
        ItemRequestView,
        CreateUserBody,
        UpdateUserBody,
        CreateItemBody,
        UpdateItemBody,
        CommentBody,
        CreateBookingBody,
        CreateRequestBody,
        ErrorSchema,
    )),
    tags(
        (name = "users", description = "User directory"),
        (name = "items", description = "Item catalog and comments"),
        (name = "bookings", description = "Booking workflow"),
        (name = "requests", description = "Item requests")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn document_lists_every_endpoint_path() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/users",
            "/users/{user_id}",
            "/items",
            "/items/{item_id}",
            "/items/search",
            "/items/{item_id}/comment",
            "/bookings",
            "/bookings/{booking_id}",
            "/bookings/owner",
            "/requests",
            "/requests/all",
            "/requests/{request_id}",
        ] {
            assert!(paths.contains_key(path), "missing path {path}");
        }
    }

    #[rstest]
    fn error_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components present");
        assert!(components.schemas.contains_key("ErrorSchema"));
    }
}

//! Server construction and wiring of adapters to domain services.

mod config;

pub use config::{AppConfig, ConfigError};

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{get, web, App, HttpServer};
use utoipa::OpenApi;

use crate::doc::ApiDoc;
use crate::domain::{BookingService, ItemRequestService, ItemService, UserService};
use crate::inbound::http::bookings::{
    confirm_booking, create_booking, get_booking, list_bookings, list_owner_bookings,
};
use crate::inbound::http::items::{
    create_comment, create_item, delete_item, get_item, list_owner_items, search_items, update_item,
};
use crate::inbound::http::requests::{
    create_request, get_request, list_other_requests, list_own_requests,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::outbound::persistence::{
    DbPool, DieselBookingRepository, DieselCommentRepository, DieselItemRepository,
    DieselItemRequestRepository, DieselUserRepository,
};

/// Serve the generated OpenAPI document.
#[get("/api-docs/openapi.json")]
async fn openapi_spec() -> web::Json<utoipa::openapi::OpenApi> {
    web::Json(ApiDoc::openapi())
}

/// Wire the Diesel repositories and domain services into handler state.
#[must_use]
pub fn build_http_state(pool: &DbPool) -> HttpState {
    let users = Arc::new(DieselUserRepository::new(pool.clone()));
    let items = Arc::new(DieselItemRepository::new(pool.clone()));
    let bookings = Arc::new(DieselBookingRepository::new(pool.clone()));
    let comments = Arc::new(DieselCommentRepository::new(pool.clone()));
    let requests = Arc::new(DieselItemRequestRepository::new(pool.clone()));

    let user_service = Arc::new(UserService::new(users.clone()));
    let item_service = Arc::new(ItemService::new(
        items.clone(),
        users.clone(),
        bookings.clone(),
        comments,
        requests.clone(),
    ));
    let booking_service = Arc::new(BookingService::new(bookings, users.clone(), items.clone()));
    let request_service = Arc::new(ItemRequestService::new(requests, users, items));

    HttpState::new(HttpStatePorts {
        users: user_service.clone(),
        users_query: user_service,
        items: item_service.clone(),
        items_query: item_service,
        bookings: booking_service.clone(),
        bookings_query: booking_service,
        requests: request_service.clone(),
        requests_query: request_service,
    })
}

/// Construct an Actix HTTP server serving the REST API and OpenAPI document.
///
/// Literal routes are registered ahead of their parameterised siblings so
/// `/items/search`, `/bookings/owner`, and `/requests/all` match first.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(state: HttpState, bind_addr: SocketAddr) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(create_user)
            .service(list_users)
            .service(get_user)
            .service(update_user)
            .service(delete_user)
            .service(search_items)
            .service(create_item)
            .service(list_owner_items)
            .service(get_item)
            .service(update_item)
            .service(create_comment)
            .service(delete_item)
            .service(list_owner_bookings)
            .service(create_booking)
            .service(list_bookings)
            .service(get_booking)
            .service(confirm_booking)
            .service(list_other_requests)
            .service(create_request)
            .service(list_own_requests)
            .service(get_request)
            .service(openapi_spec)
    })
    .bind(bind_addr)?
    .run();

    Ok(server)
}

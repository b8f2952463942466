//! Shared HTTP adapter state.
//!
//! Handlers receive this state through `actix_web::web::Data` and depend
//! only on domain ports, so they stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    BookingCommand, BookingQuery, ItemCommand, ItemQuery, ItemRequestCommand, ItemRequestQuery,
    UserCommand, UserQuery,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
    pub items: Arc<dyn ItemCommand>,
    pub items_query: Arc<dyn ItemQuery>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub requests: Arc<dyn ItemRequestCommand>,
    pub requests_query: Arc<dyn ItemRequestQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UserQuery>,
    pub items: Arc<dyn ItemCommand>,
    pub items_query: Arc<dyn ItemQuery>,
    pub bookings: Arc<dyn BookingCommand>,
    pub bookings_query: Arc<dyn BookingQuery>,
    pub requests: Arc<dyn ItemRequestCommand>,
    pub requests_query: Arc<dyn ItemRequestQuery>,
}

impl HttpState {
    /// Construct state from a ports bundle.
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            users,
            users_query,
            items,
            items_query,
            bookings,
            bookings_query,
            requests,
            requests_query,
        } = ports;
        Self {
            users,
            users_query,
            items,
            items_query,
            bookings,
            bookings_query,
            requests,
            requests_query,
        }
    }
}

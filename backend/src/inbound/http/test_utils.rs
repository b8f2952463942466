//! Shared fixtures for HTTP handler tests.

use std::sync::Arc;

use crate::domain::ports::{
    MockBookingCommand, MockBookingQuery, MockItemCommand, MockItemQuery, MockItemRequestCommand,
    MockItemRequestQuery, MockUserCommand, MockUserQuery,
};
use crate::inbound::http::state::{HttpState, HttpStatePorts};

/// Mock port bundle; tests set expectations on the ports they exercise and
/// leave the rest untouched.
#[derive(Default)]
pub(crate) struct TestPorts {
    pub users: MockUserCommand,
    pub users_query: MockUserQuery,
    pub items: MockItemCommand,
    pub items_query: MockItemQuery,
    pub bookings: MockBookingCommand,
    pub bookings_query: MockBookingQuery,
    pub requests: MockItemRequestCommand,
    pub requests_query: MockItemRequestQuery,
}

impl TestPorts {
    pub(crate) fn into_state(self) -> HttpState {
        HttpState::new(HttpStatePorts {
            users: Arc::new(self.users),
            users_query: Arc::new(self.users_query),
            items: Arc::new(self.items),
            items_query: Arc::new(self.items_query),
            bookings: Arc::new(self.bookings),
            bookings_query: Arc::new(self.bookings_query),
            requests: Arc::new(self.requests),
            requests_query: Arc::new(self.requests_query),
        })
    }
}

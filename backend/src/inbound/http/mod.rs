//! HTTP inbound adapter exposing REST endpoints.

pub mod bookings;
pub mod error;
pub mod identity;
pub mod items;
pub mod query;
pub mod requests;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

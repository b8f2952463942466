//! Domain layer: entities, views, ports, and the services behind the
//! driving ports.

pub mod booking;
mod booking_service;
pub mod comment;
mod error;
pub mod item;
mod item_service;
pub mod ports;
pub mod request;
mod request_service;
pub mod user;
mod user_service;
pub mod views;

pub use booking_service::BookingService;
pub use error::{Error, ErrorCode};
pub use item_service::ItemService;
pub use request_service::ItemRequestService;
pub use user_service::UserService;

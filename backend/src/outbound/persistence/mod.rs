//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by
//! PostgreSQL through `diesel-async` with `bb8` connection pooling.
//!
//! The adapters stay thin: they translate between Diesel row structs
//! (`models.rs`) and domain entities, and map every database failure into
//! the shared repository error categories. Schema definitions and row
//! structs are internal and never reach the domain layer.

mod diesel_booking_repository;
mod diesel_comment_repository;
mod diesel_error_mapping;
mod diesel_item_repository;
mod diesel_request_repository;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_booking_repository::DieselBookingRepository;
pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_item_repository::DieselItemRepository;
pub use diesel_request_repository::DieselItemRequestRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};

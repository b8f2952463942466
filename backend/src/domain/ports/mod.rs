//! Domain ports for the hexagonal boundary.
//!
//! Driven ports (repositories) are implemented by the persistence adapters;
//! driving ports (commands/queries) are implemented by the domain services
//! and consumed by inbound adapters.

mod booking_repository;
mod booking_service;
mod comment_repository;
mod item_repository;
mod item_service;
mod request_repository;
mod request_service;
mod user_repository;
mod user_service;

#[cfg(test)]
pub use booking_repository::MockBookingRepository;
pub use booking_repository::BookingRepository;
#[cfg(test)]
pub use booking_service::{MockBookingCommand, MockBookingQuery};
pub use booking_service::{BookingCommand, BookingQuery};
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::CommentRepository;
#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::ItemRepository;
#[cfg(test)]
pub use item_service::{MockItemCommand, MockItemQuery};
pub use item_service::{ItemCommand, ItemDraft, ItemQuery};
#[cfg(test)]
pub use request_repository::MockItemRequestRepository;
pub use request_repository::ItemRequestRepository;
#[cfg(test)]
pub use request_service::{MockItemRequestCommand, MockItemRequestQuery};
pub use request_service::{ItemRequestCommand, ItemRequestQuery};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::UserRepository;
#[cfg(test)]
pub use user_service::{MockUserCommand, MockUserQuery};
pub use user_service::{UserCommand, UserQuery};

use crate::domain::Error;

/// Persistence failures raised by repository adapters.
///
/// Repositories stay transport and domain agnostic; the conversion into
/// [`Error`] below fixes how each category surfaces to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    /// A connection could not be checked out or was lost.
    #[error("repository connection failed: {message}")]
    Connection { message: String },
    /// A query or mutation failed during execution.
    #[error("repository query failed: {message}")]
    Query { message: String },
    /// A uniqueness constraint was violated.
    #[error("{message}")]
    Conflict { message: String },
}

impl RepoError {
    /// Connection-category error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Query-category error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Uniqueness-violation error with the given message.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

impl From<RepoError> for Error {
    fn from(error: RepoError) -> Self {
        match error {
            RepoError::Connection { message } => {
                Self::service_unavailable(format!("repository unavailable: {message}"))
            }
            RepoError::Query { message } => Self::internal(format!("repository error: {message}")),
            RepoError::Conflict { message } => Self::conflict(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(RepoError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case(RepoError::query("bad sql"), ErrorCode::InternalError)]
    #[case(RepoError::conflict("email taken"), ErrorCode::Conflict)]
    fn repo_errors_map_to_domain_codes(#[case] error: RepoError, #[case] code: ErrorCode) {
        assert_eq!(Error::from(error).code(), code);
    }

    #[rstest]
    fn conflict_message_passes_through_unchanged() {
        let error = Error::from(RepoError::conflict("user with ada@example.org already exists"));
        assert_eq!(error.message(), "user with ada@example.org already exists");
    }
}

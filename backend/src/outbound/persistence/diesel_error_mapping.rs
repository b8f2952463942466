//! Shared mapping from pool and Diesel failures to repository errors.

use tracing::debug;

use crate::domain::ports::RepoError;

use super::pool::PoolError;

/// Map pool errors to the connection category.
pub(super) fn map_pool_error(error: PoolError) -> RepoError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    RepoError::connection(message)
}

/// Map Diesel errors to repository error categories.
///
/// Unique violations carry the constraint message through as a conflict;
/// closed connections map to the connection category; everything else is a
/// query failure with a generic message.
pub(super) fn map_diesel_error(error: diesel::result::Error) -> RepoError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            RepoError::conflict(info.message().to_owned())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepoError::connection("database connection error")
        }
        DieselError::NotFound => RepoError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepoError::query("database query error"),
        _ => RepoError::query("database error"),
    }
}

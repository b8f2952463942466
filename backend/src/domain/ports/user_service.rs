//! Driving ports for the user directory.

use async_trait::async_trait;

use crate::domain::user::{NewUser, User, UserPatch};
use crate::domain::Error;

/// User directory mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Register a user; duplicate emails surface as a conflict.
    async fn create_user(&self, user: NewUser) -> Result<User, Error>;

    /// Partial update; blank or absent fields are no-ops.
    async fn update_user(&self, user_id: i64, patch: UserPatch) -> Result<User, Error>;

    async fn delete_user(&self, user_id: i64) -> Result<(), Error>;
}

/// User directory reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn get_user(&self, user_id: i64) -> Result<User, Error>;

    async fn list_users(&self) -> Result<Vec<User>, Error>;
}

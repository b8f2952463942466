//! Port abstraction for user persistence adapters.

use async_trait::async_trait;

use super::RepoError;
use crate::domain::user::{NewUser, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    ///
    /// A duplicate email surfaces as [`RepoError::Conflict`].
    async fn save(&self, user: NewUser) -> Result<User, RepoError>;

    /// Persist the full state of an existing user; email collisions surface
    /// as [`RepoError::Conflict`].
    async fn update(&self, user: User) -> Result<User, RepoError>;

    async fn find_by_id(&self, user_id: i64) -> Result<Option<User>, RepoError>;

    async fn find_all(&self) -> Result<Vec<User>, RepoError>;

    async fn delete_by_id(&self, user_id: i64) -> Result<(), RepoError>;
}

//! User directory service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{UserCommand, UserQuery, UserRepository};
use crate::domain::user::{NewUser, User, UserPatch};
use crate::domain::Error;

/// User directory over the user repository port.
#[derive(Clone)]
pub struct UserService<U> {
    users: Arc<U>,
}

impl<U> UserService<U> {
    /// Create a new service with the given repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

impl<U> UserService<U>
where
    U: UserRepository,
{
    async fn require_user(&self, user_id: i64) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("user with id {user_id} not found")))
    }
}

#[async_trait]
impl<U> UserCommand for UserService<U>
where
    U: UserRepository,
{
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        if user.name.trim().is_empty() {
            return Err(Error::invalid_request("user name must not be blank"));
        }
        if !is_plausible_email(&user.email) {
            return Err(Error::invalid_request("email address is not valid"));
        }

        let created = self.users.save(user).await?;
        info!(user_id = created.id, "user created");
        Ok(created)
    }

    async fn update_user(&self, user_id: i64, patch: UserPatch) -> Result<User, Error> {
        if let Some(email) = patch.email.as_deref() {
            if !email.trim().is_empty() && !is_plausible_email(email) {
                return Err(Error::invalid_request("email address is not valid"));
            }
        }

        let user = self.require_user(user_id).await?;
        self.users.update(patch.apply(user)).await.map_err(Error::from)
    }

    async fn delete_user(&self, user_id: i64) -> Result<(), Error> {
        self.require_user(user_id).await?;
        self.users.delete_by_id(user_id).await?;
        info!(user_id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl<U> UserQuery for UserService<U>
where
    U: UserRepository,
{
    async fn get_user(&self, user_id: i64) -> Result<User, Error> {
        self.require_user(user_id).await
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.users.find_all().await.map_err(Error::from)
    }
}

/// Minimal shape check: one `@` with a non-empty local part and a domain
/// containing a dot.
fn is_plausible_email(email: &str) -> bool {
    let trimmed = email.trim();
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !domain.contains('@')
        && !trimmed.contains(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockUserRepository, RepoError};
    use crate::domain::ErrorCode;
    use rstest::rstest;

    fn ada() -> User {
        User {
            id: 1,
            name: "Ada".to_owned(),
            email: "ada@example.org".to_owned(),
        }
    }

    #[rstest]
    #[case("ada@example.org", true)]
    #[case("ada.lovelace@mail.example.org", true)]
    #[case("ada", false)]
    #[case("@example.org", false)]
    #[case("ada@example", false)]
    #[case("ada@.org", false)]
    #[case("ada lovelace@example.org", false)]
    fn email_shape_check(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_plausible_email(email), expected);
    }

    #[tokio::test]
    async fn create_user_persists_valid_payload() {
        let mut users = MockUserRepository::new();
        users.expect_save().times(1).return_once(|new| {
            Ok(User {
                id: 1,
                name: new.name,
                email: new.email,
            })
        });

        let service = UserService::new(Arc::new(users));
        let user = service
            .create_user(NewUser {
                name: "Ada".to_owned(),
                email: "ada@example.org".to_owned(),
            })
            .await
            .expect("user created");
        assert_eq!(user, ada());
    }

    #[tokio::test]
    async fn create_user_rejects_malformed_email() {
        let service = UserService::new(Arc::new(MockUserRepository::new()));
        let error = service
            .create_user(NewUser {
                name: "Ada".to_owned(),
                email: "not-an-email".to_owned(),
            })
            .await
            .expect_err("bad email");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn create_user_surfaces_duplicate_email_as_conflict() {
        let mut users = MockUserRepository::new();
        users
            .expect_save()
            .return_once(|_| Err(RepoError::conflict("email already registered")));

        let service = UserService::new(Arc::new(users));
        let error = service
            .create_user(NewUser {
                name: "Ada".to_owned(),
                email: "ada@example.org".to_owned(),
            })
            .await
            .expect_err("duplicate email");
        assert_eq!(error.code(), ErrorCode::Conflict);
    }

    #[tokio::test]
    async fn update_user_applies_patch() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().return_once(|_| Ok(Some(ada())));
        users.expect_update().times(1).return_once(|user| {
            assert_eq!(user.name, "Ada Lovelace");
            assert_eq!(user.email, "ada@example.org");
            Ok(user)
        });

        let service = UserService::new(Arc::new(users));
        let patch = UserPatch {
            name: Some("Ada Lovelace".to_owned()),
            email: None,
        };
        let updated = service.update_user(1, patch).await.expect("patched");
        assert_eq!(updated.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn update_user_rejects_malformed_email_before_lookup() {
        let service = UserService::new(Arc::new(MockUserRepository::new()));
        let patch = UserPatch {
            name: None,
            email: Some("nope".to_owned()),
        };
        let error = service.update_user(1, patch).await.expect_err("bad email");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn delete_user_requires_existing_user() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().return_once(|_| Ok(None));

        let service = UserService::new(Arc::new(users));
        let error = service.delete_user(9).await.expect_err("unknown user");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn connection_failure_maps_to_service_unavailable() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_all()
            .return_once(|| Err(RepoError::connection("pool exhausted")));

        let service = UserService::new(Arc::new(users));
        let error = service.list_users().await.expect_err("pool down");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }
}

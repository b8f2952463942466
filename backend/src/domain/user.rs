//! User entity and partial-update payloads.

use serde::Serialize;
use utoipa::ToSchema;

/// Registered user of the sharing service.
///
/// Identity is immutable once created; `email` is unique across the store
/// and a collision surfaces as a conflict at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    #[schema(example = "ada@example.org")]
    pub email: String,
}

/// New user payload, prior to identity assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Partial update for a user.
///
/// Absent or blank fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserPatch {
    /// Apply non-blank fields onto an existing user.
    #[must_use]
    pub fn apply(&self, mut user: User) -> User {
        if let Some(name) = non_blank(self.name.as_deref()) {
            user.name = name;
        }
        if let Some(email) = non_blank(self.email.as_deref()) {
            user.email = email;
        }
        user
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|text| !text.trim().is_empty())
        .map(str::to_owned)
}

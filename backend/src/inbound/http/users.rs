//! User directory HTTP handlers.
//!
//! ```text
//! POST   /users
//! GET    /users
//! GET    /users/{user_id}
//! PATCH  /users/{user_id}
//! DELETE /users/{user_id}
//! ```

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::user::{NewUser, User, UserPatch};
use crate::domain::Error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

/// Request payload for registering a user.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    pub name: Option<String>,
    #[schema(example = "ada@example.org")]
    pub email: Option<String>,
}

/// Request payload for partially updating a user.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserBody {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserBody,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserBody>,
) -> ApiResult<web::Json<User>> {
    let body = payload.into_inner();
    let name = body
        .name
        .ok_or_else(|| Error::invalid_request("user name is required"))?;
    let email = body
        .email
        .ok_or_else(|| Error::invalid_request("user email is required"))?;

    let user = state.users.create_user(NewUser { name, email }).await?;
    Ok(web::Json(user))
}

/// Partially update a user; absent or blank fields are no-ops.
#[utoipa::path(
    patch,
    path = "/users/{user_id}",
    request_body = UpdateUserBody,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 404, description = "User not found", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[patch("/users/{user_id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateUserBody>,
) -> ApiResult<web::Json<User>> {
    let body = payload.into_inner();
    let patch = UserPatch {
        name: body.name,
        email: body.email,
    };

    let user = state.users.update_user(path.into_inner(), patch).await?;
    Ok(web::Json(user))
}

/// Fetch a single user.
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{user_id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let user = state.users_query.get_user(path.into_inner()).await?;
    Ok(web::Json(user))
}

/// List all users, id ascending.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{user_id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.users.delete_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;

//! Item-request HTTP handlers.
//!
//! ```text
//! POST /requests
//! GET  /requests
//! GET  /requests/all
//! GET  /requests/{request_id}
//! ```

use actix_web::{get, post, web};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::views::ItemRequestView;
use crate::domain::Error;
use crate::inbound::http::identity::UserIdentity;
use crate::inbound::http::query::PageQuery;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

const DEFAULT_PAGE_SIZE: i64 = 10;

/// Request payload for creating an item request.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequestBody {
    pub description: Option<String>,
}

/// Ask for an item nobody currently lists.
#[utoipa::path(
    post,
    path = "/requests",
    request_body = CreateRequestBody,
    responses(
        (status = 200, description = "Request created", body = ItemRequestView),
        (status = 400, description = "Blank description", body = ErrorSchema),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "createRequest"
)]
#[post("/requests")]
pub async fn create_request(
    state: web::Data<HttpState>,
    user: UserIdentity,
    payload: web::Json<CreateRequestBody>,
) -> ApiResult<web::Json<ItemRequestView>> {
    let description = payload
        .into_inner()
        .description
        .ok_or_else(|| Error::invalid_request("request description is required"))?;

    let view = state.requests.add_request(user.id(), description).await?;
    Ok(web::Json(view))
}

/// List the caller's own requests, newest first.
#[utoipa::path(
    get,
    path = "/requests",
    params(PageQuery),
    responses(
        (status = 200, description = "Caller's requests", body = [ItemRequestView]),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "listOwnRequests"
)]
#[get("/requests")]
pub async fn list_own_requests(
    state: web::Data<HttpState>,
    user: UserIdentity,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Vec<ItemRequestView>>> {
    let page = query.into_inner().bounds(DEFAULT_PAGE_SIZE)?;
    let views = state.requests_query.list_own(user.id(), page).await?;
    Ok(web::Json(views))
}

/// List other users' requests, newest first.
#[utoipa::path(
    get,
    path = "/requests/all",
    params(PageQuery),
    responses(
        (status = 200, description = "Other users' requests", body = [ItemRequestView]),
        (status = 404, description = "User not found", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "listOtherRequests"
)]
#[get("/requests/all")]
pub async fn list_other_requests(
    state: web::Data<HttpState>,
    user: UserIdentity,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Vec<ItemRequestView>>> {
    let page = query.into_inner().bounds(DEFAULT_PAGE_SIZE)?;
    let views = state.requests_query.list_others(user.id(), page).await?;
    Ok(web::Json(views))
}

/// Fetch a single request with its fulfilling items.
#[utoipa::path(
    get,
    path = "/requests/{request_id}",
    responses(
        (status = 200, description = "Request found", body = ItemRequestView),
        (status = 404, description = "Request or user not found", body = ErrorSchema)
    ),
    tags = ["requests"],
    operation_id = "getRequest"
)]
#[get("/requests/{request_id}")]
pub async fn get_request(
    state: web::Data<HttpState>,
    user: UserIdentity,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ItemRequestView>> {
    let view = state
        .requests_query
        .get_request(user.id(), path.into_inner())
        .await?;
    Ok(web::Json(view))
}

#[cfg(test)]
#[path = "requests_tests.rs"]
mod tests;

//! Item catalog HTTP handlers.
//!
//! ```text
//! POST   /items
//! PATCH  /items/{item_id}
//! GET    /items/{item_id}
//! GET    /items
//! GET    /items/search
//! POST   /items/{item_id}/comment
//! DELETE /items/{item_id}
//! ```
//!
//! Every operation except search requires the caller's identity header.

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::domain::item::ItemPatch;
use crate::domain::ports::ItemDraft;
use crate::domain::views::{CommentView, ItemView};
use crate::domain::Error;
use crate::inbound::http::identity::UserIdentity;
use crate::inbound::http::query::PageQuery;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::ApiResult;

const DEFAULT_PAGE_SIZE: i64 = 10;

/// Request payload for listing an item.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
    /// Item request this listing fulfills, if any.
    pub request_id: Option<i64>,
}

/// Request payload for partially updating an item.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemBody {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}

/// Request payload for commenting on an item.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentBody {
    pub text: Option<String>,
}

/// Query parameters for item search.
#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub from: Option<i64>,
    pub size: Option<i64>,
}

/// List a new item owned by the caller.
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemBody,
    responses(
        (status = 200, description = "Item created", body = ItemView),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "User or request not found", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createItem"
)]
#[post("/items")]
pub async fn create_item(
    state: web::Data<HttpState>,
    user: UserIdentity,
    payload: web::Json<CreateItemBody>,
) -> ApiResult<web::Json<ItemView>> {
    let body = payload.into_inner();
    let available = body
        .available
        .ok_or_else(|| Error::invalid_request("item availability is required"))?;

    let draft = ItemDraft {
        name: body.name.unwrap_or_default(),
        description: body.description.unwrap_or_default(),
        available,
        request_id: body.request_id,
    };
    let view = state.items.create_item(user.id(), draft).await?;
    Ok(web::Json(view))
}

/// Partially update an item as its owner.
#[utoipa::path(
    patch,
    path = "/items/{item_id}",
    request_body = UpdateItemBody,
    responses(
        (status = 200, description = "Item updated", body = ItemView),
        (status = 404, description = "Item not visible to the caller", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "updateItem"
)]
#[patch("/items/{item_id}")]
pub async fn update_item(
    state: web::Data<HttpState>,
    user: UserIdentity,
    path: web::Path<i64>,
    payload: web::Json<UpdateItemBody>,
) -> ApiResult<web::Json<ItemView>> {
    let body = payload.into_inner();
    let patch = ItemPatch {
        name: body.name,
        description: body.description,
        available: body.available,
    };

    let view = state
        .items
        .update_item(user.id(), path.into_inner(), patch)
        .await?;
    Ok(web::Json(view))
}

/// Fetch an item; booking projections appear only for the owner.
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    responses(
        (status = 200, description = "Item found", body = ItemView),
        (status = 404, description = "Item not found", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "getItem"
)]
#[get("/items/{item_id}")]
pub async fn get_item(
    state: web::Data<HttpState>,
    user: UserIdentity,
    path: web::Path<i64>,
) -> ApiResult<web::Json<ItemView>> {
    let view = state
        .items_query
        .get_item(user.id(), path.into_inner())
        .await?;
    Ok(web::Json(view))
}

/// List the caller's items with booking projections.
#[utoipa::path(
    get,
    path = "/items",
    params(PageQuery),
    responses(
        (status = 200, description = "Owner's items", body = [ItemView]),
        (status = 400, description = "Invalid pagination", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "listOwnerItems"
)]
#[get("/items")]
pub async fn list_owner_items(
    state: web::Data<HttpState>,
    user: UserIdentity,
    query: web::Query<PageQuery>,
) -> ApiResult<web::Json<Vec<ItemView>>> {
    let page = query.into_inner().bounds(DEFAULT_PAGE_SIZE)?;
    let views = state.items_query.list_owner_items(user.id(), page).await?;
    Ok(web::Json(views))
}

/// Search available items by name or description substring.
#[utoipa::path(
    get,
    path = "/items/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching available items", body = [ItemView]),
        (status = 400, description = "Invalid pagination", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "searchItems"
)]
#[get("/items/search")]
pub async fn search_items(
    state: web::Data<HttpState>,
    query: web::Query<SearchQuery>,
) -> ApiResult<web::Json<Vec<ItemView>>> {
    let SearchQuery { text, from, size } = query.into_inner();
    let page = PageQuery { from, size }.bounds(DEFAULT_PAGE_SIZE)?;
    let views = state
        .items_query
        .search(text.unwrap_or_default(), page)
        .await?;
    Ok(web::Json(views))
}

/// Comment on an item the caller has rented in the past.
#[utoipa::path(
    post,
    path = "/items/{item_id}/comment",
    request_body = CommentBody,
    responses(
        (status = 200, description = "Comment recorded", body = CommentView),
        (status = 400, description = "Caller never completed a rental", body = ErrorSchema),
        (status = 404, description = "Item or user not found", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "createComment"
)]
#[post("/items/{item_id}/comment")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    user: UserIdentity,
    path: web::Path<i64>,
    payload: web::Json<CommentBody>,
) -> ApiResult<web::Json<CommentView>> {
    let text = payload
        .into_inner()
        .text
        .ok_or_else(|| Error::invalid_request("comment text is required"))?;

    let view = state
        .items
        .create_comment(user.id(), path.into_inner(), text)
        .await?;
    Ok(web::Json(view))
}

/// Delete an item as its owner.
#[utoipa::path(
    delete,
    path = "/items/{item_id}",
    responses(
        (status = 200, description = "Item deleted"),
        (status = 404, description = "Item not visible to the caller", body = ErrorSchema)
    ),
    tags = ["items"],
    operation_id = "deleteItem"
)]
#[delete("/items/{item_id}")]
pub async fn delete_item(
    state: web::Data<HttpState>,
    user: UserIdentity,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state.items.remove_item(user.id(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().finish())
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;

//! PostgreSQL-backed `ItemRequestRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageBounds;

use crate::domain::ports::{ItemRequestRepository, RepoError};
use crate::domain::request::{ItemRequest, NewItemRequest};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewRequestRow, RequestRow};
use super::pool::DbPool;
use super::schema::requests;

/// Diesel-backed implementation of the item-request repository port.
#[derive(Clone)]
pub struct DieselItemRequestRepository {
    pool: DbPool,
}

impl DieselItemRequestRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_request(row: RequestRow) -> ItemRequest {
    ItemRequest {
        id: row.id,
        description: row.description,
        requester_id: row.requester_id,
        created: row.created,
    }
}

#[async_trait]
impl ItemRequestRepository for DieselItemRequestRepository {
    async fn save(&self, request: NewItemRequest) -> Result<ItemRequest, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(requests::table)
            .values(&NewRequestRow {
                description: &request.description,
                requester_id: request.requester_id,
                created: request.created,
            })
            .get_result::<RequestRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_request(row))
    }

    async fn find_by_id(&self, request_id: i64) -> Result<Option<ItemRequest>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = requests::table
            .find(request_id)
            .select(RequestRow::as_select())
            .first::<RequestRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_request))
    }

    async fn find_all_by_requester_id(
        &self,
        requester_id: i64,
        page: PageBounds,
    ) -> Result<Vec<ItemRequest>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = requests::table
            .filter(requests::requester_id.eq(requester_id))
            .order(requests::created.desc())
            .offset(page.offset())
            .limit(page.limit())
            .select(RequestRow::as_select())
            .load::<RequestRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_request).collect())
    }

    async fn find_all_by_requester_id_not(
        &self,
        requester_id: i64,
        page: PageBounds,
    ) -> Result<Vec<ItemRequest>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = requests::table
            .filter(requests::requester_id.ne(requester_id))
            .order(requests::created.desc())
            .offset(page.offset())
            .limit(page.limit())
            .select(RequestRow::as_select())
            .load::<RequestRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_request).collect())
    }
}

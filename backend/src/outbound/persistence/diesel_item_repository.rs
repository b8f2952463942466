//! PostgreSQL-backed `ItemRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use pagination::PageBounds;

use crate::domain::item::{Item, NewItem};
use crate::domain::ports::{ItemRepository, RepoError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ItemRow, ItemUpdate, NewItemRow};
use super::pool::DbPool;
use super::schema::items;

/// Diesel-backed implementation of the item repository port.
#[derive(Clone)]
pub struct DieselItemRepository {
    pool: DbPool,
}

impl DieselItemRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_item(row: ItemRow) -> Item {
    Item {
        id: row.id,
        name: row.name,
        description: row.description,
        available: row.is_available,
        owner_id: row.owner_id,
        request_id: row.request_id,
    }
}

#[async_trait]
impl ItemRepository for DieselItemRepository {
    async fn save(&self, item: NewItem) -> Result<Item, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(items::table)
            .values(&NewItemRow {
                name: &item.name,
                description: &item.description,
                is_available: item.available,
                owner_id: item.owner_id,
                request_id: item.request_id,
            })
            .get_result::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_item(row))
    }

    async fn update(&self, item: Item) -> Result<Item, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::update(items::table.find(item.id))
            .set(&ItemUpdate {
                name: &item.name,
                description: &item.description,
                is_available: item.available,
            })
            .get_result::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_item(row))
    }

    async fn find_by_id(&self, item_id: i64) -> Result<Option<Item>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = items::table
            .find(item_id)
            .select(ItemRow::as_select())
            .first::<ItemRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_item))
    }

    async fn delete_by_id(&self, item_id: i64) -> Result<(), RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(items::table.find(item_id))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_all_by_owner_id(
        &self,
        owner_id: i64,
        page: PageBounds,
    ) -> Result<Vec<Item>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = items::table
            .filter(items::owner_id.eq(owner_id))
            .order(items::id.asc())
            .offset(page.offset())
            .limit(page.limit())
            .select(ItemRow::as_select())
            .load::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_item).collect())
    }

    async fn search(&self, text: &str, page: PageBounds) -> Result<Vec<Item>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let pattern = format!("%{text}%");

        let rows = items::table
            .filter(
                items::is_available.eq(true).and(
                    items::name
                        .ilike(pattern.clone())
                        .or(items::description.ilike(pattern)),
                ),
            )
            .order(items::id.asc())
            .offset(page.offset())
            .limit(page.limit())
            .select(ItemRow::as_select())
            .load::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_item).collect())
    }

    async fn find_all_by_request_id(&self, request_id: i64) -> Result<Vec<Item>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = items::table
            .filter(items::request_id.eq(request_id))
            .order(items::id.asc())
            .select(ItemRow::as_select())
            .load::<ItemRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_item).collect())
    }
}

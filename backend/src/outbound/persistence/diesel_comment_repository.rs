//! PostgreSQL-backed `CommentRepository` implementation using Diesel ORM.
//!
//! Comments are read back with the author's display name joined in so the
//! domain never issues a second lookup for it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::ports::{CommentRepository, RepoError};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow};
use super::pool::DbPool;
use super::schema::{comments, users};

/// Diesel-backed implementation of the comment repository port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_comment(row: CommentRow, author_name: String) -> Comment {
    Comment {
        id: row.id,
        text: row.text,
        author_id: row.author_id,
        author_name,
        item_id: row.item_id,
        created: row.created,
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn save(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(comments::table)
            .values(&NewCommentRow {
                text: &comment.text,
                item_id: comment.item_id,
                author_id: comment.author_id,
                created: comment.created,
            })
            .get_result::<CommentRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let author_name = users::table
            .find(row.author_id)
            .select(users::name)
            .first::<String>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_comment(row, author_name))
    }

    async fn find_all_by_item_id(&self, item_id: i64) -> Result<Vec<Comment>, RepoError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows = comments::table
            .inner_join(users::table)
            .filter(comments::item_id.eq(item_id))
            .select((CommentRow::as_select(), users::name))
            .load::<(CommentRow, String)>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(row, author_name)| row_to_comment(row, author_name))
            .collect())
    }
}

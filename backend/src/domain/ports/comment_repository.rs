//! Port abstraction for comment persistence adapters.

use async_trait::async_trait;

use super::RepoError;
use crate::domain::comment::{Comment, NewComment};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Persist a new comment and return it with its identity and the
    /// author's display name resolved.
    async fn save(&self, comment: NewComment) -> Result<Comment, RepoError>;

    /// All comments on an item, unordered; views sort them.
    async fn find_all_by_item_id(&self, item_id: i64) -> Result<Vec<Comment>, RepoError>;
}

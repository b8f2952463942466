//! Item catalog service.
//!
//! Covers listing management, text search, owner-only booking projections,
//! and the post-rental comment gate.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use pagination::PageBounds;
use tracing::info;

use crate::domain::booking::BookingStatus;
use crate::domain::comment::NewComment;
use crate::domain::item::{Item, ItemPatch, NewItem};
use crate::domain::ports::{
    BookingRepository, CommentRepository, ItemCommand, ItemDraft, ItemQuery, ItemRepository,
    ItemRequestRepository, UserRepository,
};
use crate::domain::views::{comment_view, item_view, item_view_with_bookings, CommentView, ItemView};
use crate::domain::Error;

/// Item catalog over repository ports.
#[derive(Clone)]
pub struct ItemService<I, U, B, C, R> {
    items: Arc<I>,
    users: Arc<U>,
    bookings: Arc<B>,
    comments: Arc<C>,
    requests: Arc<R>,
}

impl<I, U, B, C, R> ItemService<I, U, B, C, R> {
    /// Create a new service with the given repositories.
    pub fn new(
        items: Arc<I>,
        users: Arc<U>,
        bookings: Arc<B>,
        comments: Arc<C>,
        requests: Arc<R>,
    ) -> Self {
        Self {
            items,
            users,
            bookings,
            comments,
            requests,
        }
    }
}

impl<I, U, B, C, R> ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    async fn require_user(&self, user_id: i64) -> Result<(), Error> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("user with id {user_id} not found")))
    }

    async fn require_item(&self, item_id: i64) -> Result<Item, Error> {
        self.items
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("item with id {item_id} not found")))
    }

    /// Owner check that does not reveal whether the item exists.
    async fn require_owned_item(&self, user_id: i64, item_id: i64) -> Result<Item, Error> {
        let item = self.require_item(item_id).await?;
        if item.owner_id != user_id {
            return Err(Error::not_found(format!("item with id {item_id} not found")));
        }
        Ok(item)
    }

    async fn owner_view(&self, item: Item) -> Result<ItemView, Error> {
        let comments = self.comments.find_all_by_item_id(item.id).await?;
        let bookings = self.bookings.find_all_by_item_id(item.id).await?;
        Ok(item_view_with_bookings(item, comments, &bookings, Utc::now()))
    }
}

#[async_trait]
impl<I, U, B, C, R> ItemCommand for ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    async fn create_item(&self, owner_id: i64, draft: ItemDraft) -> Result<ItemView, Error> {
        self.require_user(owner_id).await?;

        if draft.name.trim().is_empty() {
            return Err(Error::invalid_request("item name must not be blank"));
        }
        if draft.description.trim().is_empty() {
            return Err(Error::invalid_request("item description must not be blank"));
        }
        if let Some(request_id) = draft.request_id {
            self.requests
                .find_by_id(request_id)
                .await?
                .ok_or_else(|| {
                    Error::not_found(format!("item request with id {request_id} not found"))
                })?;
        }

        let item = self
            .items
            .save(NewItem {
                name: draft.name,
                description: draft.description,
                available: draft.available,
                owner_id,
                request_id: draft.request_id,
            })
            .await?;
        info!(item_id = item.id, owner_id, "item created");
        Ok(item_view(item, Vec::new()))
    }

    async fn update_item(
        &self,
        user_id: i64,
        item_id: i64,
        patch: ItemPatch,
    ) -> Result<ItemView, Error> {
        self.require_user(user_id).await?;
        let item = self.require_owned_item(user_id, item_id).await?;

        let updated = self.items.update(patch.apply(item)).await?;
        let comments = self.comments.find_all_by_item_id(item_id).await?;
        Ok(item_view(updated, comments))
    }

    async fn remove_item(&self, user_id: i64, item_id: i64) -> Result<(), Error> {
        self.require_user(user_id).await?;
        self.require_owned_item(user_id, item_id).await?;
        self.items.delete_by_id(item_id).await?;
        info!(item_id, owner_id = user_id, "item removed");
        Ok(())
    }

    async fn create_comment(
        &self,
        user_id: i64,
        item_id: i64,
        text: String,
    ) -> Result<CommentView, Error> {
        self.require_user(user_id).await?;
        self.require_item(item_id).await?;

        if text.trim().is_empty() {
            return Err(Error::invalid_request("comment text must not be blank"));
        }

        let now = Utc::now();
        let bookings = self.bookings.find_all_by_item_id(item_id).await?;
        let rented = bookings.iter().any(|booking| {
            booking.booker_id == user_id
                && booking.status == BookingStatus::Approved
                && booking.end < now
        });
        if !rented {
            return Err(Error::invalid_request(format!(
                "user with id {user_id} has no completed booking for item with id {item_id}"
            )));
        }

        let comment = self
            .comments
            .save(NewComment {
                text,
                author_id: user_id,
                item_id,
                created: now,
            })
            .await?;
        info!(comment_id = comment.id, item_id, author_id = user_id, "comment created");
        Ok(comment_view(comment))
    }
}

#[async_trait]
impl<I, U, B, C, R> ItemQuery for ItemService<I, U, B, C, R>
where
    I: ItemRepository,
    U: UserRepository,
    B: BookingRepository,
    C: CommentRepository,
    R: ItemRequestRepository,
{
    async fn get_item(&self, user_id: i64, item_id: i64) -> Result<ItemView, Error> {
        self.require_user(user_id).await?;
        let item = self.require_item(item_id).await?;

        if item.owner_id == user_id {
            self.owner_view(item).await
        } else {
            let comments = self.comments.find_all_by_item_id(item_id).await?;
            Ok(item_view(item, comments))
        }
    }

    async fn list_owner_items(
        &self,
        owner_id: i64,
        page: PageBounds,
    ) -> Result<Vec<ItemView>, Error> {
        self.require_user(owner_id).await?;
        let items = self.items.find_all_by_owner_id(owner_id, page).await?;

        let mut views = Vec::with_capacity(items.len());
        for item in items {
            views.push(self.owner_view(item).await?);
        }
        Ok(views)
    }

    async fn search(&self, text: String, page: PageBounds) -> Result<Vec<ItemView>, Error> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items = self.items.search(&text, page).await?;
        let mut views = Vec::with_capacity(items.len());
        for item in items {
            let comments = self.comments.find_all_by_item_id(item.id).await?;
            views.push(item_view(item, comments));
        }
        Ok(views)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{BookedItem, Booking};
    use crate::domain::ports::{
        MockBookingRepository, MockCommentRepository, MockItemRepository,
        MockItemRequestRepository, MockUserRepository,
    };
    use crate::domain::user::User;
    use crate::domain::ErrorCode;
    use chrono::{DateTime, Duration, Utc};

    type Service = ItemService<
        MockItemRepository,
        MockUserRepository,
        MockBookingRepository,
        MockCommentRepository,
        MockItemRequestRepository,
    >;

    struct Mocks {
        items: MockItemRepository,
        users: MockUserRepository,
        bookings: MockBookingRepository,
        comments: MockCommentRepository,
        requests: MockItemRequestRepository,
    }

    impl Mocks {
        fn with_users(found: Vec<i64>) -> Self {
            let mut users = MockUserRepository::new();
            users.expect_find_by_id().returning(move |id| {
                Ok(found.contains(&id).then(|| User {
                    id,
                    name: format!("user-{id}"),
                    email: format!("user-{id}@example.org"),
                }))
            });
            Self {
                items: MockItemRepository::new(),
                users,
                bookings: MockBookingRepository::new(),
                comments: MockCommentRepository::new(),
                requests: MockItemRequestRepository::new(),
            }
        }

        fn build(self) -> Service {
            ItemService::new(
                Arc::new(self.items),
                Arc::new(self.users),
                Arc::new(self.bookings),
                Arc::new(self.comments),
                Arc::new(self.requests),
            )
        }
    }

    fn drill(owner_id: i64) -> Item {
        Item {
            id: 3,
            name: "Drill".to_owned(),
            description: "Cordless drill".to_owned(),
            available: true,
            owner_id,
            request_id: None,
        }
    }

    fn booking(
        id: i64,
        booker_id: i64,
        status: BookingStatus,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Booking {
        Booking {
            id,
            start,
            end,
            status,
            booker_id,
            item: BookedItem {
                id: 3,
                name: "Drill".to_owned(),
                owner_id: 1,
            },
        }
    }

    #[tokio::test]
    async fn create_item_persists_draft() {
        let mut mocks = Mocks::with_users(vec![1]);
        mocks.items.expect_save().times(1).return_once(|new| {
            assert_eq!(new.owner_id, 1);
            assert!(new.available);
            Ok(Item {
                id: 3,
                name: new.name,
                description: new.description,
                available: new.available,
                owner_id: new.owner_id,
                request_id: new.request_id,
            })
        });

        let view = mocks
            .build()
            .create_item(
                1,
                ItemDraft {
                    name: "Drill".to_owned(),
                    description: "Cordless drill".to_owned(),
                    available: true,
                    request_id: None,
                },
            )
            .await
            .expect("item created");
        assert_eq!(view.id, 3);
        assert!(view.comments.is_empty());
    }

    #[tokio::test]
    async fn create_item_rejects_blank_name() {
        let mocks = Mocks::with_users(vec![1]);
        let error = mocks
            .build()
            .create_item(
                1,
                ItemDraft {
                    name: "  ".to_owned(),
                    description: "Cordless drill".to_owned(),
                    available: true,
                    request_id: None,
                },
            )
            .await
            .expect_err("blank name");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn create_item_requires_existing_request() {
        let mut mocks = Mocks::with_users(vec![1]);
        mocks.requests.expect_find_by_id().return_once(|_| Ok(None));

        let error = mocks
            .build()
            .create_item(
                1,
                ItemDraft {
                    name: "Drill".to_owned(),
                    description: "Cordless drill".to_owned(),
                    available: true,
                    request_id: Some(99),
                },
            )
            .await
            .expect_err("missing request");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_item_hides_existence_from_non_owner() {
        let mut mocks = Mocks::with_users(vec![2]);
        mocks
            .items
            .expect_find_by_id()
            .return_once(|_| Ok(Some(drill(1))));

        let error = mocks
            .build()
            .update_item(2, 3, ItemPatch::default())
            .await
            .expect_err("not the owner");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_item_applies_patch_for_owner() {
        let mut mocks = Mocks::with_users(vec![1]);
        mocks
            .items
            .expect_find_by_id()
            .return_once(|_| Ok(Some(drill(1))));
        mocks.items.expect_update().times(1).return_once(|item| {
            assert!(!item.available);
            assert_eq!(item.name, "Drill");
            Ok(item)
        });
        mocks
            .comments
            .expect_find_all_by_item_id()
            .return_once(|_| Ok(Vec::new()));

        let patch = ItemPatch {
            name: None,
            description: None,
            available: Some(false),
        };
        let view = mocks
            .build()
            .update_item(1, 3, patch)
            .await
            .expect("patched");
        assert!(!view.available);
    }

    #[tokio::test]
    async fn create_comment_requires_past_approved_booking() {
        let now = Utc::now();
        let mut mocks = Mocks::with_users(vec![2]);
        mocks
            .items
            .expect_find_by_id()
            .returning(|_| Ok(Some(drill(1))));
        // Approved but still in the future: not a completed rental.
        mocks.bookings.expect_find_all_by_item_id().return_once(move |_| {
            Ok(vec![booking(
                7,
                2,
                BookingStatus::Approved,
                now + Duration::days(1),
                now + Duration::days(2),
            )])
        });

        let error = mocks
            .build()
            .create_comment(2, 3, "great drill".to_owned())
            .await
            .expect_err("no completed rental");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert!(error.message().contains("user with id 2"));
        assert!(error.message().contains("item with id 3"));
    }

    #[tokio::test]
    async fn create_comment_accepts_past_renter() {
        let now = Utc::now();
        let mut mocks = Mocks::with_users(vec![2]);
        mocks
            .items
            .expect_find_by_id()
            .returning(|_| Ok(Some(drill(1))));
        mocks.bookings.expect_find_all_by_item_id().return_once(move |_| {
            Ok(vec![booking(
                7,
                2,
                BookingStatus::Approved,
                now - Duration::days(3),
                now - Duration::days(2),
            )])
        });
        mocks.comments.expect_save().times(1).return_once(|new| {
            Ok(crate::domain::comment::Comment {
                id: 11,
                text: new.text,
                author_id: new.author_id,
                author_name: "user-2".to_owned(),
                item_id: new.item_id,
                created: new.created,
            })
        });

        let view = mocks
            .build()
            .create_comment(2, 3, "great drill".to_owned())
            .await
            .expect("comment accepted");
        assert_eq!(view.id, 11);
        assert_eq!(view.author_name, "user-2");
    }

    #[tokio::test]
    async fn create_comment_rejects_blank_text() {
        let mut mocks = Mocks::with_users(vec![2]);
        mocks
            .items
            .expect_find_by_id()
            .returning(|_| Ok(Some(drill(1))));

        let error = mocks
            .build()
            .create_comment(2, 3, "   ".to_owned())
            .await
            .expect_err("blank text");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn get_item_includes_projections_for_owner_only() {
        let now = Utc::now();
        let past = booking(
            7,
            2,
            BookingStatus::Approved,
            now - Duration::days(2),
            now - Duration::days(1),
        );

        let mut owner_mocks = Mocks::with_users(vec![1]);
        owner_mocks
            .items
            .expect_find_by_id()
            .returning(|_| Ok(Some(drill(1))));
        owner_mocks
            .comments
            .expect_find_all_by_item_id()
            .returning(|_| Ok(Vec::new()));
        owner_mocks
            .bookings
            .expect_find_all_by_item_id()
            .return_once(move |_| Ok(vec![past]));

        let owner_view = owner_mocks.build().get_item(1, 3).await.expect("owner view");
        assert_eq!(owner_view.last_booking.map(|b| b.id), Some(7));

        let mut other_mocks = Mocks::with_users(vec![2]);
        other_mocks
            .items
            .expect_find_by_id()
            .returning(|_| Ok(Some(drill(1))));
        other_mocks
            .comments
            .expect_find_all_by_item_id()
            .returning(|_| Ok(Vec::new()));

        let other_view = other_mocks.build().get_item(2, 3).await.expect("plain view");
        assert!(other_view.last_booking.is_none());
        assert!(other_view.next_booking.is_none());
    }

    #[tokio::test]
    async fn search_short_circuits_blank_text() {
        let mocks = Mocks::with_users(Vec::new());
        let page = PageBounds::new(0, 10).expect("valid page");
        let views = mocks
            .build()
            .search("   ".to_owned(), page)
            .await
            .expect("blank search");
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn search_returns_matching_items() {
        let mut mocks = Mocks::with_users(Vec::new());
        mocks
            .items
            .expect_search()
            .withf(|text, _| text == "drill")
            .return_once(|_, _| Ok(vec![drill(1)]));
        mocks
            .comments
            .expect_find_all_by_item_id()
            .return_once(|_| Ok(Vec::new()));

        let page = PageBounds::new(0, 10).expect("valid page");
        let views = mocks
            .build()
            .search("drill".to_owned(), page)
            .await
            .expect("search succeeds");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].name, "Drill");
    }
}

//! Item-request service.
//!
//! Requests are append-only; every read resolves the catalog items that
//! point back at the request via their `request_id`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use pagination::PageBounds;
use tracing::info;

use crate::domain::ports::{
    ItemRepository, ItemRequestCommand, ItemRequestQuery, ItemRequestRepository, UserRepository,
};
use crate::domain::request::{ItemRequest, NewItemRequest};
use crate::domain::views::{item_view, request_view, ItemRequestView};
use crate::domain::Error;

/// Item-request workflow over repository ports.
#[derive(Clone)]
pub struct ItemRequestService<R, U, I> {
    requests: Arc<R>,
    users: Arc<U>,
    items: Arc<I>,
}

impl<R, U, I> ItemRequestService<R, U, I> {
    /// Create a new service with the given repositories.
    pub fn new(requests: Arc<R>, users: Arc<U>, items: Arc<I>) -> Self {
        Self {
            requests,
            users,
            items,
        }
    }
}

impl<R, U, I> ItemRequestService<R, U, I>
where
    R: ItemRequestRepository,
    U: UserRepository,
    I: ItemRepository,
{
    async fn require_user(&self, user_id: i64) -> Result<(), Error> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| Error::not_found(format!("user with id {user_id} not found")))
    }

    async fn resolve(&self, request: ItemRequest) -> Result<ItemRequestView, Error> {
        let items = self
            .items
            .find_all_by_request_id(request.id)
            .await?
            .into_iter()
            .map(|item| item_view(item, Vec::new()))
            .collect();
        Ok(request_view(request, items))
    }

    async fn resolve_all(
        &self,
        requests: Vec<ItemRequest>,
    ) -> Result<Vec<ItemRequestView>, Error> {
        let mut views = Vec::with_capacity(requests.len());
        for request in requests {
            views.push(self.resolve(request).await?);
        }
        Ok(views)
    }
}

#[async_trait]
impl<R, U, I> ItemRequestCommand for ItemRequestService<R, U, I>
where
    R: ItemRequestRepository,
    U: UserRepository,
    I: ItemRepository,
{
    async fn add_request(
        &self,
        user_id: i64,
        description: String,
    ) -> Result<ItemRequestView, Error> {
        self.require_user(user_id).await?;
        if description.trim().is_empty() {
            return Err(Error::invalid_request(
                "request description must not be blank",
            ));
        }

        let request = self
            .requests
            .save(NewItemRequest {
                description,
                requester_id: user_id,
                created: Utc::now(),
            })
            .await?;
        info!(request_id = request.id, requester_id = user_id, "item request created");
        Ok(request_view(request, Vec::new()))
    }
}

#[async_trait]
impl<R, U, I> ItemRequestQuery for ItemRequestService<R, U, I>
where
    R: ItemRequestRepository,
    U: UserRepository,
    I: ItemRepository,
{
    async fn list_own(
        &self,
        user_id: i64,
        page: PageBounds,
    ) -> Result<Vec<ItemRequestView>, Error> {
        self.require_user(user_id).await?;
        let requests = self.requests.find_all_by_requester_id(user_id, page).await?;
        self.resolve_all(requests).await
    }

    async fn list_others(
        &self,
        user_id: i64,
        page: PageBounds,
    ) -> Result<Vec<ItemRequestView>, Error> {
        self.require_user(user_id).await?;
        let requests = self
            .requests
            .find_all_by_requester_id_not(user_id, page)
            .await?;
        self.resolve_all(requests).await
    }

    async fn get_request(&self, user_id: i64, request_id: i64) -> Result<ItemRequestView, Error> {
        self.require_user(user_id).await?;
        let request = self
            .requests
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| {
                Error::not_found(format!("item request with id {request_id} not found"))
            })?;
        self.resolve(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::Item;
    use crate::domain::ports::{
        MockItemRepository, MockItemRequestRepository, MockUserRepository,
    };
    use crate::domain::user::User;
    use crate::domain::ErrorCode;

    type Service =
        ItemRequestService<MockItemRequestRepository, MockUserRepository, MockItemRepository>;

    fn users_with(found: Vec<i64>) -> MockUserRepository {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(move |id| {
            Ok(found.contains(&id).then(|| User {
                id,
                name: format!("user-{id}"),
                email: format!("user-{id}@example.org"),
            }))
        });
        users
    }

    fn service(
        requests: MockItemRequestRepository,
        users: MockUserRepository,
        items: MockItemRepository,
    ) -> Service {
        ItemRequestService::new(Arc::new(requests), Arc::new(users), Arc::new(items))
    }

    fn request(id: i64, requester_id: i64) -> ItemRequest {
        ItemRequest {
            id,
            description: "need a drill".to_owned(),
            requester_id,
            created: Utc::now(),
        }
    }

    #[tokio::test]
    async fn add_request_persists_and_returns_empty_items() {
        let mut requests = MockItemRequestRepository::new();
        requests.expect_save().times(1).return_once(|new| {
            assert_eq!(new.requester_id, 2);
            Ok(ItemRequest {
                id: 5,
                description: new.description,
                requester_id: new.requester_id,
                created: new.created,
            })
        });

        let service = service(requests, users_with(vec![2]), MockItemRepository::new());
        let view = service
            .add_request(2, "need a drill".to_owned())
            .await
            .expect("request created");
        assert_eq!(view.id, 5);
        assert!(view.items.is_empty());
    }

    #[tokio::test]
    async fn add_request_rejects_blank_description() {
        let service = service(
            MockItemRequestRepository::new(),
            users_with(vec![2]),
            MockItemRepository::new(),
        );
        let error = service
            .add_request(2, "  ".to_owned())
            .await
            .expect_err("blank description");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn get_request_resolves_fulfilling_items() {
        let mut requests = MockItemRequestRepository::new();
        requests
            .expect_find_by_id()
            .return_once(|_| Ok(Some(request(5, 2))));
        let mut items = MockItemRepository::new();
        items.expect_find_all_by_request_id().return_once(|_| {
            Ok(vec![Item {
                id: 3,
                name: "Drill".to_owned(),
                description: "Cordless drill".to_owned(),
                available: true,
                owner_id: 1,
                request_id: Some(5),
            }])
        });

        let service = service(requests, users_with(vec![9]), items);
        let view = service.get_request(9, 5).await.expect("any user may read");
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].id, 3);
    }

    #[tokio::test]
    async fn get_request_requires_existing_request() {
        let mut requests = MockItemRequestRepository::new();
        requests.expect_find_by_id().return_once(|_| Ok(None));

        let service = service(requests, users_with(vec![9]), MockItemRepository::new());
        let error = service.get_request(9, 5).await.expect_err("missing request");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn list_others_excludes_caller() {
        let mut requests = MockItemRequestRepository::new();
        requests
            .expect_find_all_by_requester_id_not()
            .withf(|requester_id, _| *requester_id == 2)
            .times(1)
            .return_once(|_, _| Ok(vec![request(6, 7)]));
        let mut items = MockItemRepository::new();
        items
            .expect_find_all_by_request_id()
            .return_once(|_| Ok(Vec::new()));

        let service = service(requests, users_with(vec![2]), items);
        let page = PageBounds::new(0, 10).expect("valid page");
        let views = service.list_others(2, page).await.expect("listing succeeds");
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].id, 6);
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        let service = service(
            MockItemRequestRepository::new(),
            users_with(Vec::new()),
            MockItemRepository::new(),
        );
        let page = PageBounds::new(0, 10).expect("valid page");
        let error = service.list_own(42, page).await.expect_err("unknown user");
        assert_eq!(error.code(), ErrorCode::NotFound);
    }
}

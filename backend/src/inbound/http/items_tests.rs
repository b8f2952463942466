//! Tests for item catalog HTTP handlers.

use super::*;
use crate::inbound::http::identity::USER_ID_HEADER;
use crate::inbound::http::test_utils::TestPorts;
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, App};
use chrono::Utc;
use serde_json::{json, Value};

fn drill_view() -> ItemView {
    ItemView {
        id: 3,
        name: "Drill".to_owned(),
        description: "Cordless drill".to_owned(),
        available: true,
        last_booking: None,
        next_booking: None,
        comments: Vec::new(),
    }
}

macro_rules! item_app {
    ($ports:expr) => {
        actix_test::init_service(
            App::new()
                .app_data(actix_web::web::Data::new($ports.into_state()))
                .service(create_item)
                .service(search_items)
                .service(list_owner_items)
                .service(update_item)
                .service(get_item)
                .service(create_comment)
                .service(delete_item),
        )
        .await
    };
}

#[actix_web::test]
async fn create_item_requires_identity_header() {
    let ports = TestPorts::default();
    let app = item_app!(ports);

    let request = actix_test::TestRequest::post()
        .uri("/items")
        .set_json(json!({ "name": "Drill", "description": "d", "available": true }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("X-Sharer-User-Id header is required")
    );
}

#[actix_web::test]
async fn create_item_passes_draft_to_service() {
    let mut ports = TestPorts::default();
    ports
        .items
        .expect_create_item()
        .withf(|owner_id, draft| {
            *owner_id == 1 && draft.name == "Drill" && draft.available && draft.request_id == Some(5)
        })
        .times(1)
        .return_once(|_, _| Ok(drill_view()));
    let app = item_app!(ports);

    let request = actix_test::TestRequest::post()
        .uri("/items")
        .insert_header((USER_ID_HEADER, "1"))
        .set_json(json!({
            "name": "Drill",
            "description": "Cordless drill",
            "available": true,
            "requestId": 5
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("id").and_then(Value::as_i64), Some(3));
}

#[actix_web::test]
async fn create_item_without_availability_is_rejected() {
    let ports = TestPorts::default();
    let app = item_app!(ports);

    let request = actix_test::TestRequest::post()
        .uri("/items")
        .insert_header((USER_ID_HEADER, "1"))
        .set_json(json!({ "name": "Drill", "description": "Cordless drill" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("item availability is required")
    );
}

#[actix_web::test]
async fn update_item_hides_foreign_items() {
    let mut ports = TestPorts::default();
    ports
        .items
        .expect_update_item()
        .return_once(|_, _, _| Err(crate::domain::Error::not_found("item with id 3 not found")));
    let app = item_app!(ports);

    let request = actix_test::TestRequest::patch()
        .uri("/items/3")
        .insert_header((USER_ID_HEADER, "2"))
        .set_json(json!({ "available": false }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn owner_item_listing_uses_default_page() {
    let mut ports = TestPorts::default();
    ports
        .items_query
        .expect_list_owner_items()
        .withf(|owner_id, page| *owner_id == 1 && page.offset() == 0 && page.limit() == 10)
        .times(1)
        .return_once(|_, _| Ok(vec![drill_view()]));
    let app = item_app!(ports);

    let request = actix_test::TestRequest::get()
        .uri("/items")
        .insert_header((USER_ID_HEADER, "1"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
}

#[actix_web::test]
async fn search_does_not_require_identity() {
    let mut ports = TestPorts::default();
    ports
        .items_query
        .expect_search()
        .withf(|text, page| text == "drill" && page.limit() == 2)
        .times(1)
        .return_once(|_, _| Ok(vec![drill_view()]));
    let app = item_app!(ports);

    let request = actix_test::TestRequest::get()
        .uri("/items/search?text=drill&size=2")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn negative_pagination_is_rejected() {
    let ports = TestPorts::default();
    let app = item_app!(ports);

    let request = actix_test::TestRequest::get()
        .uri("/items?from=-1")
        .insert_header((USER_ID_HEADER, "1"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn create_comment_returns_view() {
    let mut ports = TestPorts::default();
    ports
        .items
        .expect_create_comment()
        .withf(|user_id, item_id, text| *user_id == 2 && *item_id == 3 && text == "great drill")
        .times(1)
        .return_once(|_, _, _| {
            Ok(CommentView {
                id: 11,
                text: "great drill".to_owned(),
                author_name: "Grace".to_owned(),
                created: Utc::now(),
            })
        });
    let app = item_app!(ports);

    let request = actix_test::TestRequest::post()
        .uri("/items/3/comment")
        .insert_header((USER_ID_HEADER, "2"))
        .set_json(json!({ "text": "great drill" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("authorName").and_then(Value::as_str), Some("Grace"));
}

#[actix_web::test]
async fn comment_without_completed_rental_is_rejected() {
    let mut ports = TestPorts::default();
    ports.items.expect_create_comment().return_once(|_, _, _| {
        Err(crate::domain::Error::invalid_request(
            "user with id 2 has no completed booking for item with id 3",
        ))
    });
    let app = item_app!(ports);

    let request = actix_test::TestRequest::post()
        .uri("/items/3/comment")
        .insert_header((USER_ID_HEADER, "2"))
        .set_json(json!({ "text": "never rented" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_item_returns_ok() {
    let mut ports = TestPorts::default();
    ports
        .items
        .expect_remove_item()
        .withf(|user_id, item_id| *user_id == 1 && *item_id == 3)
        .times(1)
        .return_once(|_, _| Ok(()));
    let app = item_app!(ports);

    let request = actix_test::TestRequest::delete()
        .uri("/items/3")
        .insert_header((USER_ID_HEADER, "1"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

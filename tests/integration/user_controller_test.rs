// Integration tests for the user controller
//
// Each request goes through the real routes, extractors and error mapping
// with a mock service underneath.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::{Arc, Mutex};

use actix_web::{http::StatusCode, test::TestRequest};
use serde_json::{json, Value};
use user_management::core::AppError;
use user_management::users::{User, UserService};

use helpers::*;

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response body should be JSON")
}

// GET /users/{id}

#[actix_web::test]
async fn test_get_user_by_id_empty_id() {
    let mock = Arc::new(MockUserService::new());
    let service: Arc<dyn UserService> = mock.clone();

    let (status, body) = call_users_api(service, TestRequest::get().uri("/users/")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "'id' is required");
    assert_eq!(mock.call_count(), 0, "service must not be called");
}

#[actix_web::test]
async fn test_get_user_by_id_whitespace_id() {
    let service: Arc<dyn UserService> = Arc::new(MockUserService::new());

    let (status, body) = call_users_api(service, TestRequest::get().uri("/users/%20%20")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "'id' is required");
}

#[actix_web::test]
async fn test_get_user_by_id_invalid_id() {
    let service: Arc<dyn UserService> = Arc::new(
        MockUserService::new().with_get_user_by_id(|_| Err(AppError::invalid_identifier())),
    );

    let (status, body) = call_users_api(service, TestRequest::get().uri("/users/123")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "invalid 'id' provided");
}

#[actix_web::test]
async fn test_get_user_by_id_valid() {
    let service: Arc<dyn UserService> = Arc::new(
        MockUserService::new().with_get_user_by_id(|id| Ok(TestDataFactory::user_with_id(id))),
    );

    let (status, body) = call_users_api(service, TestRequest::get().uri("/users/123")).await;

    assert_eq!(status, StatusCode::OK);
    let user = body_json(&body);
    assert_canonical_user(&user);
    assert_eq!(user["id"], "123");
}

// GET /users

#[actix_web::test]
async fn test_get_users_service_error() {
    let service: Arc<dyn UserService> = Arc::new(
        MockUserService::new().with_get_users(|| Err(AppError::persistence("dberror"))),
    );

    let (status, body) = call_users_api(service, TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "dberror");
}

#[actix_web::test]
async fn test_get_users_empty() {
    let service: Arc<dyn UserService> =
        Arc::new(MockUserService::new().with_get_users(|| Ok(Vec::new())));

    let (status, body) = call_users_api(service, TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body_json(&body), json!({"total": 0, "users": []}));
}

#[actix_web::test]
async fn test_get_users_valid() {
    let service: Arc<dyn UserService> = Arc::new(
        MockUserService::new().with_get_users(|| Ok(vec![TestDataFactory::user()])),
    );

    let (status, body) = call_users_api(service, TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    let response = body_json(&body);
    assert_eq!(response["total"], 1);
    let users = response["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert_canonical_user(&users[0]);
}

// POST /users

#[actix_web::test]
async fn test_create_user_empty_payload() {
    let mock = Arc::new(MockUserService::new());
    let service: Arc<dyn UserService> = mock.clone();

    let (status, body) = call_users_api(service, TestRequest::post().uri("/users")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "invalid request payload");
    assert_eq!(mock.call_count(), 0);
}

#[actix_web::test]
async fn test_create_user_invalid_payload() {
    let service: Arc<dyn UserService> = Arc::new(MockUserService::new());

    let (status, body) = call_users_api(
        service,
        TestRequest::post().uri("/users").set_payload("test"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "invalid request payload");
}

#[actix_web::test]
async fn test_create_user_empty_name() {
    let service: Arc<dyn UserService> =
        Arc::new(MockUserService::new().with_create_user(|_| Ok("test-id".to_string())));

    let payload = TestDataFactory::payload_with("name", json!(""));
    let (status, body) = call_users_api(
        service,
        TestRequest::post().uri("/users").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "'name' is required");
}

#[actix_web::test]
async fn test_create_user_name_checked_before_email() {
    let service: Arc<dyn UserService> = Arc::new(MockUserService::new());

    let payload = json!({"name": "   ", "email": ""});
    let (status, body) = call_users_api(
        service,
        TestRequest::post().uri("/users").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "'name' is required");
}

#[actix_web::test]
async fn test_create_user_empty_email() {
    let service: Arc<dyn UserService> =
        Arc::new(MockUserService::new().with_create_user(|_| Ok("test-id".to_string())));

    let payload = TestDataFactory::payload_with("email", json!(""));
    let (status, body) = call_users_api(
        service,
        TestRequest::post().uri("/users").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "'email' is required");
}

#[actix_web::test]
async fn test_create_user_dberror() {
    let service: Arc<dyn UserService> = Arc::new(
        MockUserService::new().with_create_user(|_| Err(AppError::persistence("dberror"))),
    );

    let (status, body) = call_users_api(
        service,
        TestRequest::post()
            .uri("/users")
            .set_json(TestDataFactory::create_user_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "dberror");
}

#[actix_web::test]
async fn test_create_user_valid() {
    let received: Arc<Mutex<Option<User>>> = Arc::new(Mutex::new(None));
    let sink = received.clone();
    let service: Arc<dyn UserService> = Arc::new(MockUserService::new().with_create_user(
        move |user| {
            *sink.lock().unwrap() = Some(user);
            Ok("test-id".to_string())
        },
    ));

    let (status, body) = call_users_api(
        service,
        TestRequest::post()
            .uri("/users")
            .set_json(TestDataFactory::create_user_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body_json(&body), json!({"id": "test-id"}));
    assert_eq!(
        received.lock().unwrap().clone(),
        Some(TestDataFactory::user())
    );
}

// PUT/POST /users/{id}

#[actix_web::test]
async fn test_update_user_empty_id_checked_before_payload() {
    let mock = Arc::new(MockUserService::new());
    let service: Arc<dyn UserService> = mock.clone();

    let (status, body) = call_users_api(
        service,
        TestRequest::put().uri("/users/").set_payload("test"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "'id' is required");
    assert_eq!(mock.call_count(), 0);
}

#[actix_web::test]
async fn test_update_user_invalid_payload() {
    let service: Arc<dyn UserService> = Arc::new(MockUserService::new());

    let (status, body) = call_users_api(
        service,
        TestRequest::put().uri("/users/123").set_payload("test"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "invalid request payload");
}

#[actix_web::test]
async fn test_update_user_empty_email() {
    let service: Arc<dyn UserService> = Arc::new(MockUserService::new());

    let payload = TestDataFactory::payload_with("email", json!(" "));
    let (status, body) = call_users_api(
        service,
        TestRequest::put().uri("/users/123").set_json(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "'email' is required");
}

#[actix_web::test]
async fn test_update_user_service_error() {
    let service: Arc<dyn UserService> = Arc::new(
        MockUserService::new().with_update_user(|_, _| Err(AppError::invalid_identifier())),
    );

    let (status, body) = call_users_api(
        service,
        TestRequest::put()
            .uri("/users/123")
            .set_json(TestDataFactory::create_user_payload()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "invalid 'id' provided");
}

#[actix_web::test]
async fn test_update_user_valid_put_and_post() {
    for request in [TestRequest::put(), TestRequest::post()] {
        let seen_id: Arc<Mutex<String>> = Arc::new(Mutex::new(String::new()));
        let sink = seen_id.clone();
        let service: Arc<dyn UserService> =
            Arc::new(MockUserService::new().with_update_user(move |user, id| {
                assert_eq!(user.name, "John");
                *sink.lock().unwrap() = id.to_string();
                Ok(())
            }));

        let (status, body) = call_users_api(
            service,
            request
                .uri("/users/abc")
                .set_json(TestDataFactory::create_user_payload()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
        assert_eq!(*seen_id.lock().unwrap(), "abc");
    }
}

// DELETE /users/{id}

#[actix_web::test]
async fn test_delete_user_by_id_empty_id() {
    let mock = Arc::new(MockUserService::new());
    let service: Arc<dyn UserService> = mock.clone();

    let (status, body) = call_users_api(service, TestRequest::delete().uri("/users/")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "'id' is required");
    assert_eq!(mock.call_count(), 0);
}

#[actix_web::test]
async fn test_delete_user_by_id_invalid_id() {
    let service: Arc<dyn UserService> = Arc::new(
        MockUserService::new().with_delete_user_by_id(|_| Err(AppError::invalid_identifier())),
    );

    let (status, body) = call_users_api(service, TestRequest::delete().uri("/users/123")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(&body_json(&body), "invalid 'id' provided");
}

#[actix_web::test]
async fn test_delete_user_by_id_valid() {
    let service: Arc<dyn UserService> =
        Arc::new(MockUserService::new().with_delete_user_by_id(|_| Ok(())));

    let (status, body) = call_users_api(service, TestRequest::delete().uri("/users/123")).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
}

use super::*;
use axum::{
    body::{self, Body},
    http::{header, Request},
    response::Response,
};
use tower::ServiceExt;

async fn test_app() -> (Router, Storage) {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    let app = build_router(Arc::new(AppState {
        api: ApiContext {
            storage: storage.clone(),
        },
    }));
    (app, storage)
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

#[tokio::test]
async fn healthz_reports_ok_when_storage_is_ready() {
    let (app, _storage) = test_app().await;
    let request = Request::get("/healthz").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let body = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(body.as_ref(), b"ok");
}

#[tokio::test]
async fn create_then_list_returns_record_with_uppercase_id() {
    let (app, _storage) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            serde_json::json!({"name": "Ann", "surname": "Lee", "age": 30}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let created: serde_json::Value = json_body(response).await;
    assert_eq!(created["ID"], 1);
    assert_eq!(created["name"], "Ann");
    assert!(created.get("CreatedAt").is_some());

    let response = app
        .oneshot(Request::get("/users").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let users: Vec<UserRecord> = json_body(response).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].surname, "Lee");
    assert_eq!(users[0].age, 30);
}

#[tokio::test]
async fn empty_collection_is_an_empty_array() {
    let (app, _storage) = test_app().await;
    let response = app
        .oneshot(Request::get("/users").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    let users: serde_json::Value = json_body(response).await;
    assert_eq!(users, serde_json::json!([]));
}

#[tokio::test]
async fn update_and_single_lookup_round_trip() {
    let (app, storage) = test_app().await;
    let created = storage
        .create_user(&NewUser {
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            age: 30,
        })
        .await
        .expect("seed");

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/users/{}", created.id),
            serde_json::json!({"id": created.id.0, "name": "Anna", "surname": "Lee", "age": 31}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let updated: UserRecord = json_body(response).await;
    assert_eq!(updated.name, "Anna");

    let response = app
        .oneshot(
            Request::get(format!("/user/{}", created.id))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: UserRecord = json_body(response).await;
    assert_eq!(fetched.age, 31);
}

#[tokio::test]
async fn delete_answers_with_success_message() {
    let (app, storage) = test_app().await;
    let created = storage
        .create_user(&NewUser {
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            age: 30,
        })
        .await
        .expect("seed");

    let response = app
        .oneshot(
            Request::delete(format!("/users/{}", created.id))
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let body: DeleteUserResponse = json_body(response).await;
    assert_eq!(body, DeleteUserResponse::deleted());
    assert!(storage.list_users().await.expect("list").is_empty());
}

#[tokio::test]
async fn non_numeric_id_is_not_found_and_zero_is_bad_request() {
    let (app, _storage) = test_app().await;

    let response = app
        .clone()
        .oneshot(Request::delete("/users/abc").body(Body::empty()).expect("request"))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let err: ApiError = json_body(response).await;
    assert_eq!(err.code, ErrorCode::NotFound);

    let response = app
        .oneshot(json_request(
            "PUT",
            "/users/0",
            serde_json::json!({"id": 0, "name": "X", "surname": "Y", "age": 1}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_body_is_a_validation_error() {
    let (app, _storage) = test_app().await;
    let response = app
        .oneshot(json_request(
            "POST",
            "/users",
            serde_json::json!({"name": "Ann", "surname": "Lee", "age": "thirty"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let err: ApiError = json_body(response).await;
    assert_eq!(err.code, ErrorCode::Validation);
}

#[tokio::test]
async fn cors_allows_cross_origin_callers() {
    let (app, _storage) = test_app().await;
    let request = Request::get("/users")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("cors header"),
        "*"
    );
}

#[tokio::test]
async fn incomplete_user_is_rejected_before_storage() {
    let (app, storage) = test_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users",
            serde_json::json!({"name": "", "surname": "", "age": -5}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let err: ApiError = json_body(response).await;
    assert_eq!(err.code, ErrorCode::Validation);
    assert_eq!(err.message, "user's fields can't be empty");
    assert!(storage.list_users().await.expect("list").is_empty());

    let created = storage
        .create_user(&NewUser {
            name: "Ann".to_string(),
            surname: "Lee".to_string(),
            age: 30,
        })
        .await
        .expect("seed");
    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/users/{}", created.id),
            serde_json::json!({"id": created.id.0, "name": "Ann", "surname": "Lee"}),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        storage.get_user(created.id).await.expect("get").map(|u| u.age),
        Some(30)
    );
}

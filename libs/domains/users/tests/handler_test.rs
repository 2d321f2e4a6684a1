//! Handler tests for Users domain
//!
//! These tests drive the users router with `oneshot` over the in-memory
//! repository:
//! - Request parsing (path ids, lenient JSON bodies)
//! - Response envelopes (`data`, `total`, `message`, `error`)
//! - HTTP status codes

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{ErrorResponse, create_router};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    handlers::router(UserService::new(InMemoryUserRepository::new()))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, name: &str, email: &str) -> User {
    let response = app
        .clone()
        .oneshot(post_json(json!({ "name": name, "email": email })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let envelope: UserEnvelope = json_body(response.into_body()).await;
    envelope.data
}

#[tokio::test]
async fn test_list_empty() {
    let response = app().oneshot(empty("GET", "/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "data": [], "total": 0 }));
}

#[tokio::test]
async fn test_create_returns_201_and_is_listed() {
    let app = app();
    let user = create(&app, "Ana Torres", "ana@mail.com").await;
    assert_eq!(user.name, "Ana Torres");
    assert_eq!(user.email, "ana@mail.com");

    let response = app.oneshot(empty("GET", "/")).await.unwrap();
    let list: UserListResponse = json_body(response.into_body()).await;
    assert_eq!(list.total, 1);
    assert_eq!(list.data, vec![user]);
}

#[tokio::test]
async fn test_create_assigns_fresh_ids() {
    let app = app();
    let first = create(&app, "Juan Perez", "juan@mail.com").await;
    let second = create(&app, "Maria Lopez", "maria@mail.com").await;
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_create_missing_field_returns_400_and_persists_nothing() {
    let app = app();

    for body in [
        json!({ "name": "Ana" }),
        json!({ "email": "ana@mail.com" }),
        json!({ "name": null, "email": "ana@mail.com" }),
        json!({ "name": "   ", "email": "ana@mail.com" }),
        json!({}),
    ] {
        let response = app.clone().oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(error.error, "name y email son requeridos");
    }

    let response = app.oneshot(empty("GET", "/")).await.unwrap();
    let list: UserListResponse = json_body(response.into_body()).await;
    assert_eq!(list.total, 0);
}

#[tokio::test]
async fn test_create_with_empty_body_is_missing_fields() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "name y email son requeridos");
}

#[tokio::test]
async fn test_create_without_content_type_still_parses() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .body(Body::from(r#"{"name":"Luis Ramirez","email":"luis@mail.com"}"#))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_malformed_json_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "Cuerpo de la petición inválido");
}

#[tokio::test]
async fn test_create_invalid_email_returns_400() {
    let response = app()
        .oneshot(post_json(json!({ "name": "Ana", "email": "ana-at-mail" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "email inválido");
}

#[tokio::test]
async fn test_get_missing_user_returns_404() {
    // Non-positive ids are plain lookups on GET.
    for uri in ["/999", "/0", "/-3"] {
        let response = app().oneshot(empty("GET", uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let error: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(error.error, "Usuario no encontrado");
    }
}

#[tokio::test]
async fn test_non_integer_id_returns_400() {
    for (method, uri) in [("GET", "/abc"), ("DELETE", "/abc"), ("GET", "/1.5")] {
        let response = app().oneshot(empty(method, uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(error.error, "ID inválido");
    }
}

#[tokio::test]
async fn test_delete_non_positive_id_returns_400() {
    for uri in ["/0", "/-1"] {
        let response = app().oneshot(empty("DELETE", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = json_body(response.into_body()).await;
        assert_eq!(error.error, "ID inválido");
    }
}

#[tokio::test]
async fn test_delete_twice_returns_200_then_404() {
    let app = app();
    let user = create(&app, "Carlos Gomez", "carlos@mail.com").await;
    let uri = format!("/{}", user.id);

    let response = app.clone().oneshot(empty("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let message: MessageResponse = json_body(response.into_body()).await;
    assert_eq!(message.message, "Usuario eliminado correctamente");

    let response = app.clone().oneshot(empty("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty("GET", "/")).await.unwrap();
    let list: UserListResponse = json_body(response.into_body()).await;
    assert!(list.data.iter().all(|u| u.id != user.id));
}

#[tokio::test]
async fn test_create_get_delete_get_flow() {
    let app = app();
    let user = create(&app, "Ana", "ana@mail.com").await;
    let uri = format!("/{}", user.id);

    let response = app.clone().oneshot(empty("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let envelope: UserEnvelope = json_body(response.into_body()).await;
    assert_eq!(envelope.data, user);

    let response = app.clone().oneshot(empty("DELETE", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(empty("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_collection_path_with_and_without_trailing_slash() {
    let users = handlers::router(UserService::new(InMemoryUserRepository::new()));
    let app = create_router::<ApiDoc>(Router::new().nest("/users", users), Router::new());

    for uri in ["/api/users", "/api/users/"] {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::from(r#"{"name":"Ana","email":"ana@mail.com"}"#))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED, "POST {uri}");
    }

    for uri in ["/api/users", "/api/users/"] {
        let response = app.clone().oneshot(empty("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");

        let list: UserListResponse = json_body(response.into_body()).await;
        assert_eq!(list.total, 2);
    }

    let response = app.oneshot(empty("GET", "/api/users/1/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

//! Real users router on an ephemeral port, backed by the in-memory repository.

use axum::Router;
use axum_helpers::server::create_router;
use domain_users::{ApiDoc, InMemoryUserRepository, UserService, handlers};

/// Starts the API and returns the users resource URL.
pub async fn spawn_api() -> String {
    let users = handlers::router(UserService::new(InMemoryUserRepository::new()));
    let app = create_router::<ApiDoc>(Router::new().nest("/users", users), Router::new());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api/users")
}

/// A URL nothing listens on; any request through it fails.
pub const DEAD_URL: &str = "http://127.0.0.1:1/api/users";

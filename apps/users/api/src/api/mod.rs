use axum::{Json, Router, routing::get};
use axum_helpers::server::health_router;
use serde::{Deserialize, Serialize};

pub mod health;
pub mod users;

pub const BANNER: &str = "API iniciada. Listo para construir 🚀";

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct Banner {
    pub mensaje: String,
}

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new().nest("/users", users::router(state))
}

/// Top-level routes: the banner, `/health` and `/ready`.
///
/// The `/ready` endpoint checks the database connection.
pub fn root_router(state: crate::state::AppState) -> Router {
    let app_info = state.config.app;

    Router::new()
        .route("/", get(banner))
        .merge(health_router(app_info))
        .merge(
            Router::new()
                .route("/ready", get(health::ready_handler))
                .with_state(state),
        )
}

async fn banner() -> Json<Banner> {
    Json(Banner {
        mensaje: BANNER.to_string(),
    })
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::questions::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        .route("/categories", get(handlers::handle_categories))
        .route(
            "/complexity-levels",
            get(handlers::handle_complexity_levels),
        )
        .route("/distribution", post(handlers::handle_distribution))
        .with_state(state)
}

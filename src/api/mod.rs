mod cors;
mod handlers;
mod models;

use std::sync::Arc;

use axum::{middleware, routing::post, Router};

use crate::AppState;

#[allow(unused_imports)]
pub use handlers::{generate, method_not_allowed, not_found, preflight};
#[allow(unused_imports)]
pub use models::{ErrorResponse, GenerateRequest, GenerateResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/generate",
            post(generate).options(preflight).fallback(method_not_allowed),
        )
        .fallback(not_found)
        .layer(middleware::map_response(cors::add_cors))
        .with_state(state)
}

use axum::{routing::post, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::chat;

pub fn build_router() -> Router {
    Router::new()
        .route("/chat", post(chat))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

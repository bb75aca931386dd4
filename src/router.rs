use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, Router},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::entities::flashcard::routes::{self as flashcard, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(flashcard::home_route))
        .route("/generate", post(flashcard::generate_route))
        .nest_service("/public", ServeDir::new("public"))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "404 Not Found")
}

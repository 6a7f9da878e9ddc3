mod handlers;
mod models;

use axum::{routing::post, Router};
use std::sync::Arc;

use crate::AppState;

pub use handlers::{chat, not_found};
pub use models::{ChatRequest, ChatResponse, ErrorResponse};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .fallback(not_found)
        .with_state(state)
}

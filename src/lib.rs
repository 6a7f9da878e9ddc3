pub mod answers;
pub mod api;
pub mod classifier;
pub mod config;

use std::collections::HashMap;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use classifier::Classifier;

pub struct AppState {
    pub classifier: Option<Arc<dyn Classifier>>,
    pub answers: HashMap<String, String>,
}

pub fn build_app(state: Arc<AppState>) -> Router {
    // Wildcards cannot be combined with credentials, so mirror the request
    // to stay fully permissive.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    api::router(state).layer(cors)
}

pub async fn run_server(app: Router, host: &str, port: u16) {
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .expect("bind failed");

    tracing::info!("listening on {host}:{port}");

    axum::serve(listener, app).await.expect("server failed");
}

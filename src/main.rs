use std::collections::HashMap;
use std::sync::Arc;

use tracing::{error, info, warn};

use first_aid_service::classifier::{self, Classifier};
use first_aid_service::config::AppConfig;
use first_aid_service::{answers, build_app, run_server, AppState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();

    let classifier: Option<Arc<dyn Classifier>> = match classifier::load(&config.model_path) {
        Ok(model) => {
            info!("classifier loaded from {}", config.model_path);
            Some(Arc::new(model))
        }
        Err(err) => {
            error!(
                "failed to load classifier from {}: {err}; serving without it",
                config.model_path
            );
            None
        }
    };

    let answers = match answers::load(&config.answers_path) {
        Ok(table) => {
            info!(
                "answer table loaded from {} ({} topics)",
                config.answers_path,
                table.len()
            );
            table
        }
        Err(err) => {
            warn!(
                "failed to load answer table from {}: {err}; all topics will be unknown",
                config.answers_path
            );
            HashMap::new()
        }
    };

    let state = Arc::new(AppState { classifier, answers });
    let app = build_app(state);

    run_server(app, &config.host, config.port).await;
}

use std::env;

pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub model_path: String,
    pub answers_path: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let host = env::var("BIND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(8000);

        let model_path =
            env::var("MODEL_PATH").unwrap_or_else(|_| "first_aid_model.bin".to_string());

        let answers_path = env::var("ANSWERS_PATH").unwrap_or_else(|_| "intents.json".to_string());

        Self {
            host,
            port,
            model_path,
            answers_path,
        }
    }
}

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::AppState;

use super::models::{ChatRequest, ChatResponse, ErrorResponse};

pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let Some(classifier) = &state.classifier else {
        return Json(ChatResponse {
            predicted_topic: None,
            bot_response: "Error: AI Brain is not loaded.".to_string(),
        });
    };

    let label = match classifier.predict(std::slice::from_ref(&payload.message)) {
        Ok(labels) => match labels.into_iter().next() {
            Some(label) => label,
            None => {
                return Json(ChatResponse {
                    predicted_topic: None,
                    bot_response: "Something went wrong: classifier returned no prediction"
                        .to_string(),
                });
            }
        },
        Err(err) => {
            return Json(ChatResponse {
                predicted_topic: None,
                bot_response: format!("Something went wrong: {err}"),
            });
        }
    };

    let bot_response = match state.answers.get(&label) {
        Some(advice) => advice.clone(),
        None => format!(
            "I detected the topic '{label}', but I don't have a prepared response for it yet."
        ),
    };

    Json(ChatResponse {
        predicted_topic: Some(label),
        bot_response,
    })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "route not found".to_string(),
        }),
    )
        .into_response()
}

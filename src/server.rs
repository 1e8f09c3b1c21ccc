//! JSON-over-HTTP hosting layer.
//!
//! A thin adapter over [`Detector`]: handlers validate that text was actually
//! supplied (a client-input error, not an engine concern — the engine itself
//! treats empty text as valid neutral input) and serialize results as JSON.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::batch::{BatchEntry, BatchStatistics};
use crate::detector::Detector;
use crate::emotion::{Emotion, ScoreVector};

// Application state
#[derive(Clone)]
pub struct AppState {
    pub detector: Arc<Detector>,
}

// API types
#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DetectResponse {
    pub emotion: Emotion,
    pub scores: ScoreVector,
}

#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub texts: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub results: Vec<BatchEntry>,
    pub statistics: BatchStatistics,
}

/// Client-input errors surfaced by the hosting layer.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("No text provided")]
    MissingText,
    #[error("No texts provided")]
    MissingTexts,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

/// Builds the application router over a shared detector.
pub fn router(detector: Arc<Detector>) -> Router {
    Router::new()
        .route("/detect_emotion", post(detect_emotion))
        .route("/analyze_batch", post(analyze_batch))
        .with_state(AppState { detector })
}

async fn detect_emotion(
    State(state): State<AppState>,
    Json(request): Json<DetectRequest>,
) -> Result<Json<DetectResponse>, ApiError> {
    let text = match request.text {
        Some(ref text) if !text.is_empty() => text,
        _ => return Err(ApiError::MissingText),
    };

    let result = state.detector.classify(text);
    debug!("classified {} chars as {}", text.len(), result.emotion);

    Ok(Json(DetectResponse {
        emotion: result.emotion,
        scores: result.scores,
    }))
}

async fn analyze_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, ApiError> {
    // An empty list is a valid batch; only an absent field is a client error.
    let texts = request.texts.ok_or(ApiError::MissingTexts)?;

    let results = state.detector.analyze_batch(&texts);
    let statistics = state.detector.aggregate(&texts);
    debug!(
        "analyzed batch of {} texts, dominant {}",
        statistics.total, statistics.dominant
    );

    Ok(Json(BatchResponse {
        results,
        statistics,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState {
            detector: Arc::new(Detector::new()),
        }
    }

    #[tokio::test]
    async fn test_detect_emotion_handler() {
        let response = detect_emotion(
            State(test_state()),
            Json(DetectRequest {
                text: Some("really happy".into()),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.emotion, Emotion::Happy);
        assert_eq!(response.scores[&Emotion::Happy], 1.5);
    }

    #[tokio::test]
    async fn test_missing_text_is_client_error() {
        let err = detect_emotion(State(test_state()), Json(DetectRequest { text: None }))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::MissingText);

        let err = detect_emotion(
            State(test_state()),
            Json(DetectRequest {
                text: Some(String::new()),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err, ApiError::MissingText);
    }

    #[tokio::test]
    async fn test_batch_handler() {
        let response = analyze_batch(
            State(test_state()),
            Json(BatchRequest {
                texts: Some(vec!["so happy".into(), "gloomy".into()]),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.statistics.total, 2);
    }

    #[tokio::test]
    async fn test_empty_batch_is_valid() {
        let response = analyze_batch(
            State(test_state()),
            Json(BatchRequest {
                texts: Some(vec![]),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.statistics.total, 0);
        assert_eq!(response.statistics.dominant, Emotion::Neutral);
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_missing_texts_is_client_error() {
        let err = analyze_batch(State(test_state()), Json(BatchRequest { texts: None }))
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::MissingTexts);
    }

    #[test]
    fn test_error_maps_to_400() {
        let response = ApiError::MissingText.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

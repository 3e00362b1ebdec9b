//! HTTP endpoint layer.
//!
//! Exposes extraction as a single `GET /api/metadata?url=...` route with
//! permissive CORS. Missing input is rejected here, before any fetch; every
//! extraction failure maps to one 500 body carrying the message, the
//! original query value, and (in development mode only) a diagnostic trace.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::{extract_with_options, Options};

/// Shared endpoint configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Transport options handed to every extraction call.
    pub options: Options,

    /// Include a diagnostic trace in 500 bodies.
    pub dev: bool,
}

/// Query parameters of the metadata route.
#[derive(Debug, Deserialize)]
pub struct MetadataQuery {
    /// Raw host/URL string to extract from.
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack: Option<String>,
}

/// Build the application router. Cross-origin requests are permitted from
/// any origin; the form that consumes this endpoint is served elsewhere.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/metadata", get(metadata_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// `GET /api/metadata?url=<raw host or URL>`
pub async fn metadata_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MetadataQuery>,
) -> Response {
    // Endpoint-level validation: an absent or empty url never reaches the
    // extractor.
    let Some(target) = query.url.filter(|u| !u.trim().is_empty()) else {
        let body = ErrorBody {
            error: "URL is required".to_string(),
            url: None,
            stack: None,
        };
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    };

    info!(url = %target, "fetching metadata");

    match extract_with_options(&target, &state.options).await {
        Ok(metadata) => {
            info!(url = %target, images = metadata.images.len(), "metadata extracted");
            (StatusCode::OK, Json(metadata)).into_response()
        }
        Err(err) => {
            warn!(url = %target, error = %err, "extraction failed");
            let body = ErrorBody {
                error: err.to_string(),
                url: Some(target),
                stack: state.dev.then(|| format!("{err:?}")),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            options: Options::default(),
            dev: false,
        })
    }

    #[tokio::test]
    async fn missing_url_is_rejected_before_fetching() {
        let response =
            metadata_handler(State(state()), Query(MetadataQuery { url: None })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_url_is_rejected_before_fetching() {
        let response = metadata_handler(
            State(state()),
            Query(MetadataQuery {
                url: Some("   ".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

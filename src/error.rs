use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub type Result<T> = std::result::Result<T, PriceError>;

/// Errors a price lookup can surface to its caller.
///
/// Upstream content problems (missing table, odd rows) never show up here;
/// they degrade to an empty or partial price list instead.
#[derive(Error, Debug)]
pub enum PriceError {
    /// One or more required query fields were absent or blank.
    #[error("missing required parameter(s): {}", .0.join(", "))]
    MissingParameter(Vec<&'static str>),

    /// The upstream page could not be retrieved at the transport level.
    #[error("scrape failure: {0}")]
    ScrapeFailure(String),
}

impl From<reqwest::Error> for PriceError {
    fn from(e: reqwest::Error) -> Self {
        PriceError::ScrapeFailure(e.to_string())
    }
}

impl IntoResponse for PriceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            PriceError::MissingParameter(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            PriceError::ScrapeFailure(detail) => {
                error!(error = %detail, "price scrape failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "failed to fetch price data".to_owned(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

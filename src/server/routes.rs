use crate::models::PriceReport;
use crate::scrapers::PriceQuery;
use crate::server::AppState;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    source: &'static str,
}

/// GET /price?state=&commodity=&mandi=
pub async fn price_handler(
    State(state): State<AppState>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> Result<Json<PriceReport>, Response> {
    let Query(query) = query.map_err(|rejection| {
        (rejection.status(), Json(json!({ "error": rejection.body_text() }))).into_response()
    })?;

    let lookup = query.validate().map_err(IntoResponse::into_response)?;
    let report = state
        .source
        .fetch(&lookup)
        .await
        .map_err(IntoResponse::into_response)?;
    Ok(Json(report))
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        source: state.source.source_name(),
    })
}

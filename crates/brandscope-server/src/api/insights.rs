use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use brandscope_scraper::{collect_brand_insights, parse_store_url, InsightsReport, PipelineError};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) const NO_CATALOG_MESSAGE: &str = "No products found or invalid store URL";

#[derive(Debug, Deserialize)]
pub(super) struct InsightsRequest {
    #[serde(default)]
    pub website_url: Option<String>,
}

/// Scrapes the requested store (plus competitors) and returns the records.
pub(super) async fn fetch_insights(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Result<Json<InsightsRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<InsightsReport>>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        ApiError::new(req_id.0.clone(), "validation_error", rejection.body_text())
    })?;

    let website_url = parse_store_url(request.website_url.as_deref().unwrap_or_default())
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    tracing::info!(request_id = %req_id.0, website_url = %website_url, "insight request received");

    let report = collect_brand_insights(
        &state.storefront,
        &state.search,
        &state.store,
        &website_url,
        &state.discovery,
    )
    .await
    .map_err(|e| match e {
        PipelineError::NoCatalog { url } => {
            tracing::info!(request_id = %req_id.0, website_url = %url, "no catalog found");
            ApiError::new(req_id.0.clone(), "not_found", NO_CATALOG_MESSAGE)
        }
        PipelineError::Persist(source) => {
            tracing::error!(request_id = %req_id.0, error = %source, "failed to persist insights");
            ApiError::new(
                req_id.0.clone(),
                "internal_error",
                format!("failed to persist brand insights: {source}"),
            )
        }
    })?;

    Ok(Json(ApiResponse {
        data: report,
        meta: ResponseMeta::new(req_id.0),
    }))
}

//! Direct pricing endpoints

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppResult,
    models::{PricingConfig, PricingResult},
    services::export,
    AppState,
};

/// Compute the price table
#[utoipa::path(
    post,
    path = "/pricing/compute",
    tag = "pricing",
    request_body = PricingConfig,
    responses(
        (status = 200, description = "Prices for every season and platform", body = PricingResult),
        (status = 422, description = "Inconsistent configuration", body = crate::error::ErrorResponse)
    )
)]
pub async fn compute(
    State(state): State<AppState>,
    Json(config): Json<PricingConfig>,
) -> AppResult<Json<PricingResult>> {
    let result = state.services.pricing.recompute(&config)?;
    Ok(Json(result))
}

/// Plain-text price report
#[utoipa::path(
    post,
    path = "/pricing/report",
    tag = "pricing",
    request_body = PricingConfig,
    responses(
        (status = 200, description = "Text report", body = String, content_type = "text/plain"),
        (status = 422, description = "Inconsistent configuration", body = crate::error::ErrorResponse)
    )
)]
pub async fn report(
    State(state): State<AppState>,
    Json(config): Json<PricingConfig>,
) -> AppResult<String> {
    let result = state.services.pricing.recompute(&config)?;
    Ok(export::pricing_report(&config, &result))
}

/// CSV export of the price table
#[utoipa::path(
    post,
    path = "/pricing/export",
    tag = "pricing",
    request_body = PricingConfig,
    responses(
        (status = 200, description = "CSV file", body = String, content_type = "text/csv"),
        (status = 422, description = "Inconsistent configuration", body = crate::error::ErrorResponse)
    )
)]
pub async fn export_csv(
    State(state): State<AppState>,
    Json(config): Json<PricingConfig>,
) -> AppResult<impl IntoResponse> {
    let result = state.services.pricing.recompute(&config)?;
    let today = chrono::Local::now().date_naive();
    let filename = export::csv_filename(&config.property_name, today);
    let csv = export::pricing_csv(&config, &result, today);

    tracing::info!(%filename, "Pricing CSV exported");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        csv,
    ))
}

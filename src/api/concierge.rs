//! Concierge endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        concierge::{base_rates_or_standard, standard_base_rates},
        season::calendar_or_standard,
        AllocationResult, ConciergeConfig, ConciergeResult,
        SeasonBudget, SeasonProfile, Seasonal, StayRates,
    },
    services::export,
    AppState,
};

fn full_ceilings() -> StayRates {
    StayRates::uniform(1.0)
}

/// Allocation solver request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AllocationRequest {
    /// Targeted share of the year's days occupied
    #[validate(range(min = 0.0, max = 100.0, message = "Target fill rate must be between 0 and 100"))]
    #[serde(default)]
    pub target_fill_percent: f64,
    /// Days and weekend slots per season, standard calendar when omitted
    #[serde(default = "SeasonBudget::standard_calendar", deserialize_with = "calendar_or_standard")]
    #[schema(value_type = Object)]
    pub calendar: Seasonal<SeasonBudget>,
    #[serde(default = "standard_base_rates", deserialize_with = "base_rates_or_standard")]
    #[schema(value_type = Object)]
    pub base_rates: Seasonal<StayRates>,
    #[serde(default = "full_ceilings")]
    pub ceilings: StayRates,
}

/// Fee breakdown, allocation and annual revenue
#[utoipa::path(
    post,
    path = "/concierge/compute",
    tag = "concierge",
    request_body = ConciergeConfig,
    responses(
        (status = 200, description = "Concierge results", body = ConciergeResult),
        (status = 422, description = "Inconsistent configuration", body = crate::error::ErrorResponse)
    )
)]
pub async fn compute(
    State(state): State<AppState>,
    Json(config): Json<ConciergeConfig>,
) -> AppResult<Json<ConciergeResult>> {
    let result = state.services.concierge.recompute(&config)?;
    Ok(Json(result))
}

/// Plain-text concierge report
#[utoipa::path(
    post,
    path = "/concierge/report",
    tag = "concierge",
    request_body = ConciergeConfig,
    responses(
        (status = 200, description = "Text report", body = String, content_type = "text/plain"),
        (status = 422, description = "Inconsistent configuration", body = crate::error::ErrorResponse)
    )
)]
pub async fn report(
    State(state): State<AppState>,
    Json(config): Json<ConciergeConfig>,
) -> AppResult<String> {
    let result = state.services.concierge.recompute(&config)?;
    Ok(export::concierge_report(&config, &result))
}

/// Run the occupancy allocation solver alone
#[utoipa::path(
    post,
    path = "/concierge/allocation",
    tag = "concierge",
    request_body = AllocationRequest,
    responses(
        (status = 200, description = "Booking counts per season", body = AllocationResult),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 422, description = "Inconsistent rates", body = crate::error::ErrorResponse)
    )
)]
pub async fn allocation(
    State(state): State<AppState>,
    Json(request): Json<AllocationRequest>,
) -> AppResult<Json<AllocationResult>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profiles = request.calendar.map(|season, budget| SeasonProfile {
        budget: *budget,
        base_rates: *request.base_rates.get(season),
    });
    let result = state
        .services
        .concierge
        .allocate(request.target_fill_percent, &profiles, request.ceilings)?;
    Ok(Json(result))
}

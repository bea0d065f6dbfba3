//! Cross-tool sync endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{ConciergeConfig, PricingConfig},
    AppState,
};

/// Copy stored pricing inputs into the concierge settings
#[utoipa::path(
    post,
    path = "/sync/pricing-to-concierge",
    tag = "sync",
    responses(
        (status = 200, description = "Updated concierge settings", body = ConciergeConfig),
        (status = 422, description = "Stored pricing settings are inconsistent", body = crate::error::ErrorResponse)
    )
)]
pub async fn pricing_to_concierge(State(state): State<AppState>) -> AppResult<Json<ConciergeConfig>> {
    let config = state.services.sync.pricing_to_concierge().await?;
    Ok(Json(config))
}

/// Copy stored concierge inputs into the pricing settings
#[utoipa::path(
    post,
    path = "/sync/concierge-to-pricing",
    tag = "sync",
    responses(
        (status = 200, description = "Updated pricing settings", body = PricingConfig)
    )
)]
pub async fn concierge_to_pricing(State(state): State<AppState>) -> AppResult<Json<PricingConfig>> {
    let config = state.services.sync.concierge_to_pricing().await?;
    Ok(Json(config))
}

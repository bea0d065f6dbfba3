//! Settings endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::{ConciergeConfig, PricingConfig},
    AppState,
};

/// Get stored pricing settings
#[utoipa::path(
    get,
    path = "/settings/pricing",
    tag = "settings",
    responses(
        (status = 200, description = "Stored pricing settings, defaults when none", body = PricingConfig)
    )
)]
pub async fn get_pricing(State(state): State<AppState>) -> AppResult<Json<PricingConfig>> {
    let config = state.services.settings.pricing().await?;
    Ok(Json(config))
}

/// Replace stored pricing settings
#[utoipa::path(
    put,
    path = "/settings/pricing",
    tag = "settings",
    request_body = PricingConfig,
    responses(
        (status = 200, description = "Saved settings", body = PricingConfig)
    )
)]
pub async fn update_pricing(
    State(state): State<AppState>,
    Json(config): Json<PricingConfig>,
) -> AppResult<Json<PricingConfig>> {
    state.services.settings.save_pricing(&config).await?;
    Ok(Json(config))
}

/// Restore factory pricing settings
#[utoipa::path(
    post,
    path = "/settings/pricing/reset",
    tag = "settings",
    responses(
        (status = 200, description = "Factory settings", body = PricingConfig)
    )
)]
pub async fn reset_pricing(State(state): State<AppState>) -> AppResult<Json<PricingConfig>> {
    let config = state.services.settings.reset_pricing().await?;
    Ok(Json(config))
}

/// Get stored concierge settings
#[utoipa::path(
    get,
    path = "/settings/concierge",
    tag = "settings",
    responses(
        (status = 200, description = "Stored concierge settings, defaults when none", body = ConciergeConfig)
    )
)]
pub async fn get_concierge(State(state): State<AppState>) -> AppResult<Json<ConciergeConfig>> {
    let config = state.services.settings.concierge().await?;
    Ok(Json(config))
}

/// Replace stored concierge settings
#[utoipa::path(
    put,
    path = "/settings/concierge",
    tag = "settings",
    request_body = ConciergeConfig,
    responses(
        (status = 200, description = "Saved settings", body = ConciergeConfig)
    )
)]
pub async fn update_concierge(
    State(state): State<AppState>,
    Json(config): Json<ConciergeConfig>,
) -> AppResult<Json<ConciergeConfig>> {
    state.services.settings.save_concierge(&config).await?;
    Ok(Json(config))
}

/// Restore factory concierge settings
#[utoipa::path(
    post,
    path = "/settings/concierge/reset",
    tag = "settings",
    responses(
        (status = 200, description = "Factory settings", body = ConciergeConfig)
    )
)]
pub async fn reset_concierge(State(state): State<AppState>) -> AppResult<Json<ConciergeConfig>> {
    let config = state.services.settings.reset_concierge().await?;
    Ok(Json(config))
}

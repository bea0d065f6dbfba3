//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{concierge, health, pricing, settings, sync};
use crate::models::{allocation, concierge as concierge_models, enums, pricing as pricing_models, season, validation};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gîte Pricing API",
        version = "0.3.0",
        description = "Vacation-rental pricing and concierge revenue calculator"
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Pricing
        pricing::compute,
        pricing::report,
        pricing::export_csv,
        // Concierge
        concierge::compute,
        concierge::report,
        concierge::allocation,
        // Settings
        settings::get_pricing,
        settings::update_pricing,
        settings::reset_pricing,
        settings::get_concierge,
        settings::update_concierge,
        settings::reset_concierge,
        // Sync
        sync::pricing_to_concierge,
        sync::concierge_to_pricing,
    ),
    components(
        schemas(
            // Shared
            enums::Season,
            enums::StayType,
            enums::Platform,
            season::SeasonBudget,
            validation::MessageLevel,
            validation::ValidationMessage,
            // Pricing
            pricing_models::PricingConfig,
            pricing_models::CommissionRates,
            pricing_models::StayDiscounts,
            pricing_models::PricingNetAmounts,
            pricing_models::PricingResult,
            pricing_models::SeasonPrices,
            pricing_models::PlatformPrices,
            pricing_models::NightlyPrices,
            pricing_models::StayPrices,
            pricing_models::StayPrice,
            pricing_models::ShortStayEstimates,
            pricing_models::ShortStayEstimate,
            // Concierge
            concierge_models::ConciergeConfig,
            concierge_models::ConciergeNetAmounts,
            concierge_models::ConciergeResult,
            concierge_models::SeasonFees,
            concierge_models::BookingFees,
            concierge_models::RevenueSummary,
            allocation::StayRates,
            allocation::AllocationResult,
            allocation::SeasonAllocation,
            concierge::AllocationRequest,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "pricing", description = "Direct pricing calculator"),
        (name = "concierge", description = "Concierge fees, occupancy allocation and revenue"),
        (name = "settings", description = "Stored tool settings"),
        (name = "sync", description = "Copy inputs between the two tools")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

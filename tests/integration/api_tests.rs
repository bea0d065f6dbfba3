//! API integration tests, driving the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use gite_pricing_server::{api, repository::Repository, AppConfig, AppState};

/// Router over a fresh settings directory
fn app() -> (Router, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::new(AppConfig::default(), Repository::with_directory(dir.path()));
    (api::create_router(state), dir)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(request.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec(), headers)
}

async fn send_json(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes, _) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn default_pricing() -> Value {
    json!({
        "property_name": "Gîte du Moulin",
        "cleaning_cost": 200,
        "commissions": { "booking": 13.25, "airbnb": 18.76, "natuurhuisje": 12 },
        "rounding_step": 5,
        "discounts": { "midweek": 0, "week": 0 },
        "net_amounts": {
            "low": { "weekend": 1500, "long_weekend": 1800, "midweek": 1500 },
            "mid": { "weekend": 1800, "long_weekend": 2200, "midweek": 1600 },
            "high": { "weekend": 2000, "long_weekend": 2500, "midweek": 2000 }
        }
    })
}

#[tokio::test]
async fn test_health_check() {
    let (app, _dir) = app();
    let (status, body) = send_json(&app, "GET", "/api/v1/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send_json(&app, "GET", "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_compute_prices() {
    let (app, _dir) = app();
    let (status, body) = send_json(&app, "POST", "/api/v1/pricing/compute", Some(default_pricing())).await;

    assert_eq!(status, StatusCode::OK);
    let low_booking = &body["seasons"][0]["platforms"][0];
    assert_eq!(body["seasons"][0]["season"], "low");
    assert_eq!(low_booking["platform"], "booking");
    assert_eq!(low_booking["stays"]["weekend"]["gross"], 1730.0);
    assert_eq!(low_booking["nightly"]["friday_saturday"], 765.0);
    assert_eq!(low_booking["stays"]["week"]["gross"], 3615.0);
    assert_eq!(body["messages"][0]["level"], "success");
}

#[tokio::test]
async fn test_full_commission_is_rejected() {
    let (app, _dir) = app();
    let mut config = default_pricing();
    config["commissions"]["booking"] = json!(100);

    let (status, body) = send_json(&app, "POST", "/api/v1/pricing/compute", Some(config)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "InvalidConfiguration");
    assert!(body["message"].as_str().unwrap().contains("Booking commission"));
}

#[tokio::test]
async fn test_export_csv() {
    let (app, _dir) = app();
    let (status, bytes, headers) = send(&app, "POST", "/api/v1/pricing/export", Some(default_pricing())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("text/csv"));
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.contains("filename=\"Gite-du-Moulin-"));
    assert!(disposition.ends_with(".csv\""));

    let csv = String::from_utf8(bytes).unwrap();
    assert!(csv.starts_with("Property;Gîte du Moulin\n"));
    assert!(csv.contains("Season;Type;Day/Stay;Discount;Booking;Airbnb;Natuurhuisje"));
}

#[tokio::test]
async fn test_pricing_report() {
    let (app, _dir) = app();
    let (status, bytes, _) = send(&app, "POST", "/api/v1/pricing/report", Some(default_pricing())).await;

    assert_eq!(status, StatusCode::OK);
    let report = String::from_utf8(bytes).unwrap();
    assert!(report.starts_with("GÎTE DU MOULIN"));
    assert!(report.contains("HIGH SEASON"));
}

#[tokio::test]
async fn test_concierge_compute() {
    let (app, _dir) = app();
    let config = json!({
        "cleaning_hours": 5,
        "cleaning_hourly_rate": 35,
        "management_fee_percent": 18,
        "target_fill_percent": 65,
        "net_amounts": {
            "low": { "weekend": 1500, "long_weekend": 1800, "midweek": 1500, "week": 2500 },
            "mid": { "weekend": 1800, "long_weekend": 2200, "midweek": 1600, "week": 3000 },
            "high": { "weekend": 2000, "long_weekend": 2500, "midweek": 2000, "week": 3500 }
        }
    });

    let (status, body) = send_json(&app, "POST", "/api/v1/concierge/compute", Some(config)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allocation"]["total_nights"], 236);
    assert_eq!(body["allocation"]["target_nights"], 237);
    let total = body["revenue"]["total_revenue"].as_f64().unwrap();
    assert!((total - 139_700.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_allocation_endpoint() {
    let (app, _dir) = app();

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/v1/concierge/allocation",
        Some(json!({ "target_fill_percent": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_nights"], 183);

    let (status, body) = send_json(
        &app,
        "POST",
        "/api/v1/concierge/allocation",
        Some(json!({ "target_fill_percent": 140 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_partial_seasons_are_accepted() {
    let (app, _dir) = app();

    let config = json!({ "rounding_step": 5, "net_amounts": { "low": { "weekend": 1500 } } });
    let (status, body) = send_json(&app, "POST", "/api/v1/pricing/compute", Some(config)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["seasons"][0]["platforms"][0]["stays"]["weekend"]["gross"], 1500.0);
    assert_eq!(body["seasons"][1]["platforms"][0]["stays"]["weekend"]["gross"], 0.0);

    let config = json!({
        "target_fill_percent": 50,
        "calendar": { "high": { "days": 100, "weekend_slots": 18 } },
        "base_rates": { "mid": { "week": 0.15, "weekend": 0.8, "midweek": 0.3 } }
    });
    let (status, body) = send_json(&app, "POST", "/api/v1/concierge/compute", Some(config)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["allocation"]["total_days"], 211 + 61 + 100);
    assert_eq!(body["allocation"]["seasons"][0]["days"], 211);

    let (status, body) = send_json(&app, "POST", "/api/v1/concierge/allocation", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_days"], 365);
    assert_eq!(body["total_nights"], 0);
}

#[tokio::test]
async fn test_oversized_calendar_is_rejected() {
    let (app, _dir) = app();
    let half = u32::MAX / 2 + 1;
    let request = json!({
        "target_fill_percent": 50,
        "calendar": {
            "low": { "days": half, "weekend_slots": 0 },
            "mid": { "days": half, "weekend_slots": 0 },
            "high": { "days": half, "weekend_slots": 0 }
        }
    });

    let (status, body) = send_json(&app, "POST", "/api/v1/concierge/allocation", Some(request)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "InvalidConfiguration");
}

#[tokio::test]
async fn test_settings_roundtrip_and_reset() {
    let (app, dir) = app();

    let (status, body) = send_json(&app, "GET", "/api/v1/settings/pricing", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleaning_cost"], 200.0);

    let mut config = default_pricing();
    config["cleaning_cost"] = json!(180);
    let (status, _) = send_json(&app, "PUT", "/api/v1/settings/pricing", Some(config)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(dir.path().join("pricing.json").exists());

    let (_, body) = send_json(&app, "GET", "/api/v1/settings/pricing", None).await;
    assert_eq!(body["cleaning_cost"], 180.0);
    assert_eq!(body["property_name"], "Gîte du Moulin");

    let (status, body) = send_json(&app, "POST", "/api/v1/settings/pricing/reset", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleaning_cost"], 200.0);
}

#[tokio::test]
async fn test_sync_between_tools() {
    let (app, _dir) = app();
    let (_, _) = send_json(&app, "PUT", "/api/v1/settings/pricing", Some(default_pricing())).await;

    let (status, body) = send_json(&app, "POST", "/api/v1/sync/pricing-to-concierge", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property_name"], "Gîte du Moulin");
    assert_eq!(body["cleaning_hours"], 4.72);
    assert_eq!(body["net_amounts"]["low"]["week"], 3136.0);

    let (_, stored) = send_json(&app, "GET", "/api/v1/settings/concierge", None).await;
    assert_eq!(stored["cleaning_hours"], 4.72);

    let (status, body) = send_json(&app, "POST", "/api/v1/sync/concierge-to-pricing", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleaning_cost"], 199.89);
}

#[tokio::test]
async fn test_unknown_route() {
    let (app, _dir) = app();
    let (status, body) = send_json(&app, "GET", "/api/v1/bookings", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NoSuchData");
}

//! Settings service: load with defaults and migrations, save, reset

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::{
    error::AppResult,
    models::{ConciergeConfig, PricingConfig, Season},
    repository::Repository,
};

pub const PRICING_KEY: &str = "pricing";
pub const CONCIERGE_KEY: &str = "concierge";

#[derive(Clone)]
pub struct SettingsService {
    repository: Repository,
}

impl SettingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Stored pricing settings, or factory defaults when nothing was saved
    pub async fn pricing(&self) -> AppResult<PricingConfig> {
        self.load(PRICING_KEY, PricingConfig::factory_defaults(), migrate_pricing)
            .await
    }

    pub async fn save_pricing(&self, config: &PricingConfig) -> AppResult<()> {
        self.save(PRICING_KEY, config).await
    }

    pub async fn reset_pricing(&self) -> AppResult<PricingConfig> {
        let defaults = PricingConfig::factory_defaults();
        self.save(PRICING_KEY, &defaults).await?;
        tracing::info!("Pricing settings reset to defaults");
        Ok(defaults)
    }

    /// Stored concierge settings, or factory defaults when nothing was saved
    pub async fn concierge(&self) -> AppResult<ConciergeConfig> {
        self.load(CONCIERGE_KEY, ConciergeConfig::factory_defaults(), migrate_concierge)
            .await
    }

    pub async fn save_concierge(&self, config: &ConciergeConfig) -> AppResult<()> {
        self.save(CONCIERGE_KEY, config).await
    }

    pub async fn reset_concierge(&self) -> AppResult<ConciergeConfig> {
        let defaults = ConciergeConfig::factory_defaults();
        self.save(CONCIERGE_KEY, &defaults).await?;
        tracing::info!("Concierge settings reset to defaults");
        Ok(defaults)
    }

    async fn load<T>(&self, key: &str, defaults: T, migrate: fn(&mut Value)) -> AppResult<T>
    where
        T: Serialize + DeserializeOwned,
    {
        let Some(document) = self.repository.settings.load(key).await? else {
            tracing::debug!(key, "No stored settings, using defaults");
            return Ok(defaults);
        };

        let mut stored: Value = serde_json::from_str(&document)?;
        migrate(&mut stored);

        let mut merged = serde_json::to_value(defaults)?;
        merge(&mut merged, stored);
        Ok(serde_json::from_value(merged)?)
    }

    async fn save<T: Serialize>(&self, key: &str, config: &T) -> AppResult<()> {
        let document = serde_json::to_string_pretty(config)?;
        self.repository.settings.save(key, &document).await?;
        tracing::info!(key, "Settings saved");
        Ok(())
    }
}

/// Overlay `stored` onto `base`. Objects merge key by key, nulls keep the base value.
fn merge(base: &mut Value, stored: Value) {
    match (base, stored) {
        (Value::Object(base), Value::Object(stored)) => {
            for (key, value) in stored {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None if !value.is_null() => {
                        base.insert(key, value);
                    }
                    None => {}
                }
            }
        }
        (_, Value::Null) => {}
        (slot, value) => *slot = value,
    }
}

fn season_key(season: Season) -> &'static str {
    match season {
        Season::Low => "low",
        Season::Mid => "mid",
        Season::High => "high",
    }
}

fn is_numeric_object(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| map.values().all(|v| v.is_number()))
}

fn migrate_pricing(stored: &mut Value) {
    let Some(root) = stored.as_object_mut() else {
        return;
    };

    // The full week is derived from the nightly prices now
    if let Some(net_amounts) = root.get_mut("net_amounts").and_then(Value::as_object_mut) {
        for season in Season::ALL {
            if let Some(amounts) = net_amounts
                .get_mut(season_key(season))
                .and_then(Value::as_object_mut)
            {
                if amounts.remove("week").is_some() {
                    tracing::warn!(%season, "Dropped stored week amount");
                }
            }
        }
    }

    // Discounts predating the midweek discount are reset as a whole
    match root.get("discounts") {
        Some(discounts) if is_numeric_object(discounts) && discounts.get("midweek").is_some() => {}
        Some(_) => {
            tracing::warn!("Outdated stored discounts, resetting to none");
            root.insert("discounts".to_string(), zero_discounts());
        }
        None => {
            root.insert("discounts".to_string(), zero_discounts());
        }
    }
}

fn zero_discounts() -> Value {
    let mut discounts = Map::new();
    discounts.insert("midweek".to_string(), Value::from(0.0));
    discounts.insert("week".to_string(), Value::from(0.0));
    Value::Object(discounts)
}

fn migrate_concierge(stored: &mut Value) {
    let Some(root) = stored.as_object_mut() else {
        return;
    };

    // Per-season tables must be objects to merge over the standard values
    for table in ["calendar", "base_rates", "net_amounts"] {
        if root.get(table).is_some_and(|v| !v.is_object()) {
            tracing::warn!(table, "Malformed stored table, using defaults");
            root.remove(table);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError, models::pricing::StayDiscounts, repository::settings::MockSettingsStore,
    };
    use std::sync::Arc;

    fn service_with(store: MockSettingsStore) -> SettingsService {
        SettingsService::new(Repository::new(Arc::new(store)))
    }

    fn returning_document(key: &'static str, document: &'static str) -> MockSettingsStore {
        let mut store = MockSettingsStore::new();
        store
            .expect_load()
            .withf(move |k| k == key)
            .returning(move |_| Ok(Some(document.to_string())));
        store
    }

    #[tokio::test]
    async fn test_defaults_when_nothing_stored() {
        let mut store = MockSettingsStore::new();
        store.expect_load().returning(|_| Ok(None));
        let service = service_with(store);

        assert_eq!(service.pricing().await.unwrap(), PricingConfig::factory_defaults());
        assert_eq!(service.concierge().await.unwrap(), ConciergeConfig::factory_defaults());
    }

    #[tokio::test]
    async fn test_partial_document_merges_over_defaults() {
        let store = returning_document(
            PRICING_KEY,
            r#"{"property_name":"Les Tilleuls","net_amounts":{"high":{"weekend":2100}}}"#,
        );
        let config = service_with(store).pricing().await.unwrap();

        assert_eq!(config.property_name, "Les Tilleuls");
        assert_eq!(config.net_amounts.high.weekend, 2100.0);
        assert_eq!(config.net_amounts.high.long_weekend, 2500.0);
        assert_eq!(config.cleaning_cost, 200.0);
        assert_eq!(config.rounding_step, 5.0);
    }

    #[tokio::test]
    async fn test_pricing_migrations() {
        let store = returning_document(
            PRICING_KEY,
            r#"{"discounts":"ten","net_amounts":{"low":{"weekend":1400,"week":2500}}}"#,
        );
        let config = service_with(store).pricing().await.unwrap();

        assert_eq!(config.discounts.midweek, 0.0);
        assert_eq!(config.discounts.week, 0.0);
        assert_eq!(config.net_amounts.low.weekend, 1400.0);
    }

    #[tokio::test]
    async fn test_discounts_without_midweek_are_reset() {
        let store = returning_document(PRICING_KEY, r#"{"discounts":{"week":10}}"#);
        let config = service_with(store).pricing().await.unwrap();
        assert_eq!(config.discounts, StayDiscounts::default());

        let store = returning_document(PRICING_KEY, r#"{"discounts":{"midweek":10}}"#);
        let config = service_with(store).pricing().await.unwrap();
        assert_eq!(config.discounts.midweek, 10.0);
        assert_eq!(config.discounts.week, 0.0);
    }

    #[tokio::test]
    async fn test_concierge_partial_tables() {
        let store = returning_document(
            CONCIERGE_KEY,
            r#"{"calendar":{"high":{"days":100}},"base_rates":{"mid":{"weekend":0.9}},"ceilings":null}"#,
        );
        let config = service_with(store).concierge().await.unwrap();

        assert_eq!(config.calendar.high.days, 100);
        assert_eq!(config.calendar.high.weekend_slots, 18);
        assert_eq!(config.calendar.low.days, 211);
        assert_eq!(config.base_rates.mid.weekend, 0.9);
        assert_eq!(config.base_rates.mid.week, 0.15);
        assert_eq!(config.ceilings.week, 1.0);
    }

    #[tokio::test]
    async fn test_corrupt_document_is_serialization_error() {
        let store = returning_document(CONCIERGE_KEY, "{not json");
        let err = service_with(store).concierge().await.unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_reset_saves_defaults() {
        let mut store = MockSettingsStore::new();
        store
            .expect_save()
            .withf(|key, document| key == PRICING_KEY && document.contains("\"rounding_step\": 5.0"))
            .times(1)
            .returning(|_, _| Ok(()));

        let config = service_with(store).reset_pricing().await.unwrap();
        assert_eq!(config, PricingConfig::factory_defaults());
    }

    #[test]
    fn test_merge_keeps_base_on_null() {
        let mut base = serde_json::json!({"a": 1, "b": {"c": 2, "d": 3}});
        merge(&mut base, serde_json::json!({"a": null, "b": {"d": 4}, "e": 5}));
        assert_eq!(base, serde_json::json!({"a": 1, "b": {"c": 2, "d": 4}, "e": 5}));
    }
}

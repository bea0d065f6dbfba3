//! Per-season containers and season budgets

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use super::enums::Season;

/// One value per season. A season missing from a payload takes `T::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Seasonal<T> {
    pub low: T,
    pub mid: T,
    pub high: T,
}

impl<T> Seasonal<T> {
    pub fn new(low: T, mid: T, high: T) -> Self {
        Self { low, mid, high }
    }

    pub fn get(&self, season: Season) -> &T {
        match season {
            Season::Low => &self.low,
            Season::Mid => &self.mid,
            Season::High => &self.high,
        }
    }

    pub fn get_mut(&mut self, season: Season) -> &mut T {
        match season {
            Season::Low => &mut self.low,
            Season::Mid => &mut self.mid,
            Season::High => &mut self.high,
        }
    }

    /// Iterate in season order (low, mid, high)
    pub fn iter(&self) -> impl Iterator<Item = (Season, &T)> {
        Season::ALL.into_iter().map(move |season| (season, self.get(season)))
    }

    pub fn map<U>(&self, mut f: impl FnMut(Season, &T) -> U) -> Seasonal<U> {
        Seasonal {
            low: f(Season::Low, &self.low),
            mid: f(Season::Mid, &self.mid),
            high: f(Season::High, &self.high),
        }
    }
}

/// Seasons actually present in a payload
#[derive(Deserialize)]
struct SeasonalOverride<T> {
    low: Option<T>,
    mid: Option<T>,
    high: Option<T>,
}

impl<T> Seasonal<T> {
    /// Deserialize the seasons present, keeping `base` for the others
    pub fn deserialize_over<'de, D>(deserializer: D, base: Seasonal<T>) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let given = SeasonalOverride::<T>::deserialize(deserializer)?;
        Ok(Seasonal {
            low: given.low.unwrap_or(base.low),
            mid: given.mid.unwrap_or(base.mid),
            high: given.high.unwrap_or(base.high),
        })
    }
}

/// `deserialize_with` target for calendars: missing seasons keep the standard budget
pub fn calendar_or_standard<'de, D>(deserializer: D) -> Result<Seasonal<SeasonBudget>, D::Error>
where
    D: Deserializer<'de>,
{
    Seasonal::deserialize_over(deserializer, SeasonBudget::standard_calendar())
}

/// Calendar budget of a season
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SeasonBudget {
    /// Days of the calendar year assigned to the season
    pub days: u32,
    /// Friday-start weekend windows available in the season
    pub weekend_slots: u32,
}

impl SeasonBudget {
    pub const YEAR_DAYS: u32 = 365;
    pub const YEAR_WEEKENDS: u32 = 52;

    /// Default calendar split: 211 low, 61 mid and 93 high season days
    pub fn standard_calendar() -> Seasonal<SeasonBudget> {
        Seasonal::new(
            SeasonBudget { days: 211, weekend_slots: 24 },
            SeasonBudget { days: 61, weekend_slots: 10 },
            SeasonBudget { days: 93, weekend_slots: 18 },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_calendar_covers_year() {
        let calendar = SeasonBudget::standard_calendar();
        let days: u32 = calendar.iter().map(|(_, b)| b.days).sum();
        let slots: u32 = calendar.iter().map(|(_, b)| b.weekend_slots).sum();
        assert_eq!(days, SeasonBudget::YEAR_DAYS);
        assert_eq!(slots, SeasonBudget::YEAR_WEEKENDS);
    }

    #[test]
    fn test_missing_season_defaults_to_zero() {
        let values: Seasonal<SeasonBudget> = serde_json::from_str(r#"{"low":{"days":10}}"#).unwrap();
        assert_eq!(values.low, SeasonBudget { days: 10, weekend_slots: 0 });
        assert_eq!(values.mid, SeasonBudget::default());
        assert_eq!(values.high, SeasonBudget::default());
    }

    #[test]
    fn test_partial_calendar_keeps_standard_seasons() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(deserialize_with = "calendar_or_standard")]
            calendar: Seasonal<SeasonBudget>,
        }

        let wrapper: Wrapper =
            serde_json::from_str(r#"{"calendar":{"high":{"days":100,"weekend_slots":20}}}"#).unwrap();
        let standard = SeasonBudget::standard_calendar();
        assert_eq!(wrapper.calendar.high, SeasonBudget { days: 100, weekend_slots: 20 });
        assert_eq!(wrapper.calendar.low, standard.low);
        assert_eq!(wrapper.calendar.mid, standard.mid);
    }

    #[test]
    fn test_map_keeps_season_positions() {
        let values = Seasonal::new(1, 2, 3);
        let labels = values.map(|season, v| format!("{}:{}", season, v));
        assert_eq!(labels.low, "Low season:1");
        assert_eq!(labels.high, "High season:3");
        assert_eq!(*values.get(Season::Mid), 2);
    }
}

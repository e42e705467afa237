use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic position from the geolocation capability.
/// Consumed once per refresh, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// User-selected temperature unit, independent of stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl DisplayUnit {
    pub fn toggled(self) -> Self {
        match self {
            DisplayUnit::Celsius => DisplayUnit::Fahrenheit,
            DisplayUnit::Fahrenheit => DisplayUnit::Celsius,
        }
    }

    /// Project a stored Celsius reading into this unit for display.
    /// The stored value is never mutated; conversion happens at read time.
    pub fn format_temp(self, celsius: f64) -> String {
        match self {
            DisplayUnit::Celsius => format!("{}°C", celsius.round() as i64),
            DisplayUnit::Fahrenheit => {
                format!("{}°F", (celsius * 9.0 / 5.0 + 32.0).round() as i64)
            }
        }
    }

    /// Label for the unit-toggle control: names the unit you switch *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            DisplayUnit::Celsius => "Switch °F",
            DisplayUnit::Fahrenheit => "Switch °C",
        }
    }
}

/// One weather reading for one location, immutable until replaced.
///
/// Temperatures are always Celsius (`units=metric` is fixed on the wire);
/// sunrise/sunset are epoch seconds as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    pub country: Option<String>,
    pub temp_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity: u8,
    pub pressure_hpa: u32,
    pub wind_speed_ms: f64,
    pub clouds_pct: u8,
    /// Metres; the provider omits this field in some regions.
    pub visibility_m: Option<u32>,
    pub sunrise: i64,
    pub sunset: i64,
    /// Seconds east of UTC at the reading's location.
    pub timezone_offset_secs: i64,
    /// Primary condition label, e.g. "Clear" or "Rain".
    pub condition: String,
    pub description: String,
    pub fetched_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_display_rounds() {
        assert_eq!(DisplayUnit::Celsius.format_temp(20.4), "20°C");
        assert_eq!(DisplayUnit::Celsius.format_temp(-0.2), "0°C");
    }

    #[test]
    fn fahrenheit_projection_matches_formula() {
        for c in [-40.0f64, 0.0, 20.0, 36.6, 100.0] {
            let expected = format!("{}°F", (c * 9.0 / 5.0 + 32.0).round() as i64);
            assert_eq!(DisplayUnit::Fahrenheit.format_temp(c), expected);
        }
        assert_eq!(DisplayUnit::Fahrenheit.format_temp(20.0), "68°F");
        assert_eq!(DisplayUnit::Fahrenheit.format_temp(-40.0), "-40°F");
    }

    #[test]
    fn toggling_twice_restores_display() {
        let unit = DisplayUnit::Celsius;
        let original = unit.format_temp(17.3);
        let back = unit.toggled().toggled().format_temp(17.3);
        assert_eq!(original, back);
    }

    #[test]
    fn toggle_label_names_target_unit() {
        assert_eq!(DisplayUnit::Celsius.toggle_label(), "Switch °F");
        assert_eq!(DisplayUnit::Fahrenheit.toggle_label(), "Switch °C");
    }
}

//! View state and view-model: everything a render sink needs, as strings.

use skycast_weather::{format_local_time, select_backdrop, Backdrop, DisplayUnit, WeatherSnapshot};

/// Widget lifecycle as a tagged variant. Every state is re-triggerable:
/// a failed refresh lands in `Error` and the next refresh starts over.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(ViewModel),
}

/// One-way bound display fields for the weather panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub location: String,
    pub temperature: String,
    pub description: String,
    pub min_max: String,
    pub humidity: String,
    pub wind: String,
    pub clouds: String,
    pub visibility: String,
    pub pressure: String,
    pub sunrise: String,
    pub sunset: String,
    pub unit_toggle_label: &'static str,
    pub backdrop: Backdrop,
}

impl ViewModel {
    pub fn from_snapshot(snapshot: &WeatherSnapshot, unit: DisplayUnit) -> Self {
        let location = match &snapshot.country {
            Some(country) => format!("{}, {}", snapshot.location_name, country),
            None => snapshot.location_name.clone(),
        };

        // Min/max stay in Celsius; the unit toggle projects only the
        // current temperature.
        let min_max = format!(
            "{}° / {}°",
            snapshot.temp_min_c.round() as i64,
            snapshot.temp_max_c.round() as i64
        );

        let visibility = match snapshot.visibility_m {
            Some(metres) => format!("{} km", metres as f64 / 1000.0),
            None => "n/a".to_string(),
        };

        Self {
            location,
            temperature: unit.format_temp(snapshot.temp_c),
            description: snapshot.description.clone(),
            min_max,
            humidity: format!("{}%", snapshot.humidity),
            wind: format!("{} m/s", snapshot.wind_speed_ms),
            clouds: format!("{}%", snapshot.clouds_pct),
            visibility,
            pressure: format!("{} hPa", snapshot.pressure_hpa),
            sunrise: format_local_time(snapshot.sunrise, snapshot.timezone_offset_secs),
            sunset: format_local_time(snapshot.sunset, snapshot.timezone_offset_secs),
            unit_toggle_label: unit.toggle_label(),
            backdrop: select_backdrop(&snapshot.condition),
        }
    }
}

/// The widget's outbound seam: whatever hosts the widget implements this
/// and binds the fields to its own surface.
pub trait RenderSink {
    /// Replace the whole view (status line, panel visibility, all fields).
    fn render(&mut self, view: &ViewState);

    /// Update only the temperature field and the unit-toggle label.
    /// `temperature` is `None` when no snapshot exists yet; the field is
    /// left as-is in that case.
    fn render_temperature(&mut self, temperature: Option<&str>, toggle_label: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use skycast_weather::BackdropImage;

    fn snapshot() -> WeatherSnapshot {
        WeatherSnapshot {
            location_name: "Lviv".into(),
            country: Some("UA".into()),
            temp_c: 20.4,
            temp_min_c: 18.2,
            temp_max_c: 22.9,
            humidity: 64,
            pressure_hpa: 1015,
            wind_speed_ms: 4.6,
            clouds_pct: 40,
            visibility_m: Some(10000),
            sunrise: 1_700_000_000,
            sunset: 1_700_030_000,
            timezone_offset_secs: 7200,
            condition: "Clouds".into(),
            description: "scattered clouds".into(),
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn populates_every_display_field() {
        let vm = ViewModel::from_snapshot(&snapshot(), DisplayUnit::Celsius);

        assert_eq!(vm.location, "Lviv, UA");
        assert_eq!(vm.temperature, "20°C");
        assert_eq!(vm.description, "scattered clouds");
        assert_eq!(vm.min_max, "18° / 23°");
        assert_eq!(vm.humidity, "64%");
        assert_eq!(vm.wind, "4.6 m/s");
        assert_eq!(vm.clouds, "40%");
        assert_eq!(vm.visibility, "10 km");
        assert_eq!(vm.pressure, "1015 hPa");
        assert_eq!(vm.unit_toggle_label, "Switch °F");
        assert!(matches!(vm.backdrop.image, BackdropImage::Url(_)));
    }

    #[test]
    fn sunrise_uses_location_wall_clock() {
        let vm = ViewModel::from_snapshot(&snapshot(), DisplayUnit::Celsius);
        // 1_700_000_000 is 22:13 UTC; +7200s offset puts sunrise at 00:13
        assert_eq!(vm.sunrise, "00:13");
    }

    #[test]
    fn missing_country_renders_bare_name() {
        let mut snap = snapshot();
        snap.country = None;
        let vm = ViewModel::from_snapshot(&snap, DisplayUnit::Celsius);
        assert_eq!(vm.location, "Lviv");
    }

    #[test]
    fn missing_visibility_renders_placeholder() {
        let mut snap = snapshot();
        snap.visibility_m = None;
        let vm = ViewModel::from_snapshot(&snap, DisplayUnit::Celsius);
        assert_eq!(vm.visibility, "n/a");
    }

    #[test]
    fn fractional_visibility_keeps_decimals() {
        let mut snap = snapshot();
        snap.visibility_m = Some(9500);
        let vm = ViewModel::from_snapshot(&snap, DisplayUnit::Celsius);
        assert_eq!(vm.visibility, "9.5 km");
    }

    #[test]
    fn fahrenheit_projects_without_touching_snapshot() {
        let snap = snapshot();
        let vm = ViewModel::from_snapshot(&snap, DisplayUnit::Fahrenheit);
        assert_eq!(vm.temperature, "69°F");
        assert_eq!(vm.unit_toggle_label, "Switch °C");
        // Stored reading stays Celsius
        assert_eq!(snap.temp_c, 20.4);
    }
}

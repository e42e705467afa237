//! Weather domain for Skycast
//!
//! Provides current-conditions data via an OpenWeatherMap-style API with
//! IP-based geolocation, plus the pure projections (unit conversion, wall
//! clock formatting, backdrop selection) the widget renders from.

pub mod backdrop;
pub mod clock;
pub mod location;
pub mod provider;
pub mod types;

pub use backdrop::{select_backdrop, Backdrop, BackdropImage};
pub use clock::format_local_time;
pub use location::{FixedLocator, GeoIpLocator, LocationSource, Locator};
pub use provider::WeatherProvider;
pub use types::{Coordinates, DisplayUnit, WeatherSnapshot};

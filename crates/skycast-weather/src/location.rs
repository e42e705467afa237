//! Geolocation capability.
//!
//! Position comes from an IP geolocation endpoint by default; a fixed
//! coordinate can be pinned in configuration for machines without egress
//! or with unhelpful IP ranges.

use reqwest::Client;
use serde::Deserialize;
use skycast_core::{LocationConfig, LocationError};
use std::future::Future;
use std::time::Duration;

use crate::types::Coordinates;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// The seam between the widget and whatever resolves the user's position.
pub trait LocationSource {
    /// Request the current position once.
    fn current(&self) -> impl Future<Output = Result<Coordinates, LocationError>> + Send;
}

/// ip-api.com style response: `status` is "success" or "fail", and a
/// failure carries a human-readable `message`.
#[derive(Debug, Deserialize)]
struct GeoIpResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    message: Option<String>,
}

/// Resolves position from the machine's public IP address.
#[derive(Debug, Clone)]
pub struct GeoIpLocator {
    client: Client,
    base_url: String,
}

impl GeoIpLocator {
    pub fn new(base_url: impl Into<String>) -> Result<Self, LocationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| LocationError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

impl LocationSource for GeoIpLocator {
    async fn current(&self) -> Result<Coordinates, LocationError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(request_error)?;

        if !response.status().is_success() {
            tracing::debug!("GeoIP endpoint returned status {}", response.status());
            return Err(LocationError::ServiceUnavailable);
        }

        let body: GeoIpResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Other(e.to_string()))?;

        if body.status != "success" {
            let message = body.message.unwrap_or_else(|| "lookup failed".into());
            tracing::debug!("GeoIP lookup failed: {}", message);
            return Err(LocationError::Other(message));
        }

        match (body.lat, body.lon) {
            (Some(latitude), Some(longitude)) => {
                tracing::info!("Got location: {}, {}", latitude, longitude);
                Ok(Coordinates {
                    latitude,
                    longitude,
                })
            }
            _ => Err(LocationError::Other(
                "lookup succeeded without coordinates".into(),
            )),
        }
    }
}

fn request_error(e: reqwest::Error) -> LocationError {
    if e.is_timeout() {
        LocationError::Timeout
    } else if e.is_connect() {
        LocationError::ServiceUnavailable
    } else {
        LocationError::Other(e.to_string())
    }
}

/// Always yields the coordinates it was built with.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocator {
    coords: Coordinates,
}

impl FixedLocator {
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

impl LocationSource for FixedLocator {
    async fn current(&self) -> Result<Coordinates, LocationError> {
        Ok(self.coords)
    }
}

/// Locator selected by configuration: pinned coordinates when present,
/// IP geolocation otherwise.
#[derive(Debug, Clone)]
pub enum Locator {
    GeoIp(GeoIpLocator),
    Fixed(FixedLocator),
}

impl Locator {
    pub fn from_config(config: &LocationConfig) -> Result<Self, LocationError> {
        match &config.pinned {
            Some(pinned) => Ok(Locator::Fixed(FixedLocator::new(Coordinates {
                latitude: pinned.latitude,
                longitude: pinned.longitude,
            }))),
            None => Ok(Locator::GeoIp(GeoIpLocator::new(config.geoip_url.clone())?)),
        }
    }
}

impl LocationSource for Locator {
    async fn current(&self) -> Result<Coordinates, LocationError> {
        match self {
            Locator::GeoIp(inner) => inner.current().await,
            Locator::Fixed(inner) => inner.current().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_locator_returns_pinned_coordinates() {
        let locator = FixedLocator::new(Coordinates {
            latitude: 49.84,
            longitude: 24.03,
        });
        let coords = locator.current().await.unwrap();
        assert_eq!(coords.latitude, 49.84);
        assert_eq!(coords.longitude, 24.03);
    }

    #[tokio::test]
    async fn locator_from_config_prefers_pinned() {
        let config = LocationConfig {
            geoip_url: "http://ip-api.com/json".into(),
            pinned: Some(skycast_core::PinnedCoordinates {
                latitude: 1.0,
                longitude: 2.0,
            }),
        };
        let locator = Locator::from_config(&config).unwrap();
        assert!(matches!(locator, Locator::Fixed(_)));
    }
}

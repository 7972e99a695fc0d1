use color_eyre::eyre::Result;
use geo_types::Point;
use reqwest::header::ACCEPT_LANGUAGE;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::clients::{build_reqwest_client, get_default_client};

pub const NOMINATIM_REVERSE_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Zoom 10 resolves to city level.
const ZOOM: u8 = 10;
const LANGUAGE: &str = "ru";

/// Reverse geocoding against a Nominatim `/reverse` endpoint.
///
/// Each call issues exactly one GET and decodes the body as JSON without
/// looking at the status code first.
#[derive(Clone, Debug)]
pub struct ReverseGeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl ReverseGeocodeClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(NOMINATIM_REVERSE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: build_reqwest_client()?,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Coordinates are formatted as-is, no range or finiteness checks.
    pub fn request_url(&self, lat: f64, lon: f64) -> String {
        format!(
            "{}?format=json&lat={}&lon={}&zoom={}&addressdetails=1",
            self.base_url, lat, lon, ZOOM
        )
    }

    pub async fn reverse_geocode(&self, lat: f64, lon: f64) -> Result<Value> {
        self.reverse_geocode_as(lat, lon).await
    }

    /// `geo_types` points are `(x = lon, y = lat)`.
    pub async fn reverse_geocode_point(&self, point: Point<f64>) -> Result<Value> {
        self.reverse_geocode(point.y(), point.x()).await
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn reverse_geocode_as<T>(&self, lat: f64, lon: f64) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.request_url(lat, lon);
        debug!(%url, "requesting reverse geocode");
        let response = self
            .http
            .get(url)
            .header(ACCEPT_LANGUAGE, LANGUAGE)
            .send()
            .await?;
        debug!(status = %response.status(), "got reverse geocode response");
        Ok(response.json::<T>().await?)
    }
}

/// Reverse geocode with the process-wide default client.
pub async fn reverse_geocode(lat: f64, lon: f64) -> Result<Value> {
    get_default_client()?.reverse_geocode(lat, lon).await
}

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

use crate::model::RawWeatherResponse;

/// OpenWeather current-weather endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// The closed set of failures surfaced to callers. Everything that can go
/// wrong before a request exists is `BadUrl`; everything after a valid URL
/// (transport failure, unreadable body, undecodable payload) is `BadParsing`.
/// HTTP status codes are deliberately not inspected: a provider error body
/// either fails to decode as weather data or counts as success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkingError {
    #[error("the query could not be turned into a valid request URL")]
    BadUrl,
    #[error("the weather data could not be fetched or decoded")]
    BadParsing,
}

/// HTTP client for the OpenWeather current-weather endpoint.
///
/// Construct one explicitly and pass it where needed; there is no shared
/// global instance. Each fetch issues exactly one GET with the transport's
/// default timeout, no retry and no cancellation hook, and calls may run
/// concurrently without coordination.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    http: Client,
}

impl WeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint, mainly for tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self { base_url, api_key, http: Client::new() }
    }

    /// Fetch current weather by city name. The name is percent-encoded into
    /// the `q` query parameter; an empty or whitespace-only name resolves to
    /// `BadUrl` without any network call.
    pub async fn fetch_by_city(
        &self,
        city_name: &str,
    ) -> Result<RawWeatherResponse, NetworkingError> {
        let url = self.city_url(city_name)?;
        debug!(%url, "requesting current weather by city");
        self.fetch(url).await
    }

    /// Fetch current weather for a latitude/longitude pair.
    pub async fn fetch_by_coordinates(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<RawWeatherResponse, NetworkingError> {
        let url = self.coordinate_url(latitude, longitude)?;
        debug!(%url, "requesting current weather by coordinates");
        self.fetch(url).await
    }

    fn city_url(&self, city_name: &str) -> Result<Url, NetworkingError> {
        if city_name.trim().is_empty() {
            return Err(NetworkingError::BadUrl);
        }

        Url::parse_with_params(
            &self.base_url,
            &[("units", "metric"), ("appid", self.api_key.as_str()), ("q", city_name)],
        )
        .map_err(|_| NetworkingError::BadUrl)
    }

    fn coordinate_url(&self, latitude: f64, longitude: f64) -> Result<Url, NetworkingError> {
        Url::parse_with_params(
            &self.base_url,
            &[
                ("units", "metric"),
                ("appid", self.api_key.as_str()),
                ("lat", latitude.to_string().as_str()),
                ("lon", longitude.to_string().as_str()),
            ],
        )
        .map_err(|_| NetworkingError::BadUrl)
    }

    async fn fetch(&self, url: Url) -> Result<RawWeatherResponse, NetworkingError> {
        let res = self.http.get(url).send().await.map_err(|err| {
            debug!(%err, "transport failure");
            NetworkingError::BadParsing
        })?;

        let body = res.text().await.map_err(|err| {
            debug!(%err, "failed to read response body");
            NetworkingError::BadParsing
        })?;

        decode_body(&body)
    }
}

fn decode_body(body: &str) -> Result<RawWeatherResponse, NetworkingError> {
    serde_json::from_str(body).map_err(|err| {
        debug!(%err, "failed to decode weather payload");
        NetworkingError::BadParsing
    })
}

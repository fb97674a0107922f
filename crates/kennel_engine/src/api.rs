use std::time::Duration;

use kennel_core::{Breeds, Probe};

use crate::decode::{decode_images, decode_listing};

/// Public base URL of the Dog API.
pub const DOG_API: &str = "https://dog.ceo/api";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DOG_API.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
    /// The service answered with `status: "error"`; the message passes
    /// through verbatim.
    #[error("{0}")]
    Service(String),
}

/// Thin read-only client for the two Dog API endpoints the core needs.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    settings: ApiSettings,
    client: reqwest::Client,
}

impl DogApiClient {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self { settings, client })
    }

    /// Fetches the full breed listing and decodes it into a taxonomy.
    pub async fn fetch_taxonomy(&self) -> Result<Breeds, ApiError> {
        let text = self.get_text("breeds/list/all").await?;
        decode_listing(&text)
    }

    /// Fetches sample image URLs for a resolved probe.
    pub async fn search_images(&self, probe: &Probe) -> Result<Vec<String>, ApiError> {
        let method = match &probe.sub_breed {
            None => format!("breed/{}/images", probe.breed),
            Some(sub_breed) => format!("breed/{}/{}/images", probe.breed, sub_breed),
        };

        let text = self.get_text(&method).await?;
        decode_images(&text)
    }

    async fn get_text(&self, method: &str) -> Result<String, ApiError> {
        let url = format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            method
        );
        let parsed =
            reqwest::Url::parse(&url).map_err(|err| ApiError::InvalidUrl(err.to_string()))?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        response.text().await.map_err(map_reqwest_error)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::Timeout;
    }
    ApiError::Network(err.to_string())
}

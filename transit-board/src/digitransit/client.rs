//! Digitransit HTTP client.
//!
//! Posts GraphQL queries to the routing endpoint and decodes the JSON
//! responses. Each call is exactly one request; nothing is retried.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::TransitApi;
use super::error::DigitransitError;
use super::query::{PlanRequest, plan_query, stop_query};
use super::types::{GraphQlResponse, PlanResponse, StopResponse};

/// Default endpoint: the HSL router.
const DEFAULT_BASE_URL: &str = "https://api.digitransit.fi/routing/v1/routers/hsl/index/graphql";

/// Header carrying the subscription key.
const SUBSCRIPTION_KEY_HEADER: &str = "digitransit-subscription-key";

/// How much of an undecodable body to keep in the error.
const ERROR_BODY_LIMIT: usize = 500;

/// Configuration for the Digitransit client.
#[derive(Debug, Clone)]
pub struct DigitransitConfig {
    /// Subscription key for authentication
    pub subscription_key: String,
    /// GraphQL endpoint URL (defaults to the HSL router)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DigitransitConfig {
    /// Create a new config with the given subscription key.
    pub fn new(subscription_key: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom endpoint URL (for testing or another router).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Request body for a GraphQL POST.
#[derive(Serialize)]
struct QueryBody<'a> {
    query: &'a str,
}

/// Digitransit GraphQL API client.
#[derive(Debug, Clone)]
pub struct DigitransitClient {
    http: reqwest::Client,
    base_url: String,
}

impl DigitransitClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DigitransitConfig) -> Result<Self, DigitransitError> {
        let mut headers = HeaderMap::new();

        let key = HeaderValue::from_str(&config.subscription_key)
            .map_err(|_| DigitransitError::InvalidKey)?;
        headers.insert(HeaderName::from_static(SUBSCRIPTION_KEY_HEADER), key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Get upcoming arrivals at a stop.
    pub async fn get_arrivals(&self, stop_id: &str) -> Result<StopResponse, DigitransitError> {
        debug!(stop_id, "fetching stop arrivals");
        self.post_query(&stop_query(stop_id)).await
    }

    /// Get candidate itineraries for a plan request.
    pub async fn get_itineraries(
        &self,
        request: &PlanRequest,
    ) -> Result<PlanResponse, DigitransitError> {
        debug!(date = %request.date, time = %request.time, "fetching itineraries");
        self.post_query(&plan_query(request)).await
    }

    /// POST a query and decode the GraphQL envelope.
    ///
    /// A response with no `data` but a non-empty `errors` array is turned
    /// into [`DigitransitError::GraphQl`].
    async fn post_query<T: DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<GraphQlResponse<T>, DigitransitError> {
        let response = self
            .http
            .post(&self.base_url)
            .json(&QueryBody { query })
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DigitransitError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DigitransitError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DigitransitError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        decode_response(&body)
    }
}

/// Decode a response body into the GraphQL envelope.
fn decode_response<T: DeserializeOwned>(body: &str) -> Result<GraphQlResponse<T>, DigitransitError> {
    let decoded: GraphQlResponse<T> =
        serde_json::from_str(body).map_err(|e| DigitransitError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(ERROR_BODY_LIMIT).collect()),
        })?;

    if decoded.data.is_none() && !decoded.errors.is_empty() {
        return Err(DigitransitError::GraphQl(decoded.error_messages()));
    }
    if !decoded.errors.is_empty() {
        warn!(errors = ?decoded.error_messages(), "partial GraphQL response");
    }

    Ok(decoded)
}

impl TransitApi for DigitransitClient {
    async fn fetch_arrivals(&self, stop_id: &str) -> Result<StopResponse, DigitransitError> {
        self.get_arrivals(stop_id).await
    }

    async fn fetch_itineraries(
        &self,
        request: &PlanRequest,
    ) -> Result<PlanResponse, DigitransitError> {
        self.get_itineraries(request).await
    }
}

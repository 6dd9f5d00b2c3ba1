//! Digitransit client error types.

/// Errors from the Digitransit HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DigitransitError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Subscription key rejected
    #[error("unauthorized: check DIGITRANSIT_SUBSCRIPTION_KEY")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by Digitransit API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// The query was rejected; no data was returned
    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// Subscription key is not a valid header value
    #[error("invalid subscription key format")]
    InvalidKey,

    /// Canned responses could not be loaded or are missing
    #[error("mock data error: {0}")]
    Mock(String),
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}

//! Booking client error types.

/// Errors from the booking service.
///
/// The first three variants are the expected outcomes the acquisition loop
/// reacts to. Everything else is a failure the loop cannot classify further
/// and treats as transient.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// The query was valid but the service listed no trains
    #[error("no results")]
    NoResults,

    /// The train's general-class seats were taken before the claim landed
    #[error("sold out")]
    SoldOut,

    /// The service rejected the session; a fresh login is required
    #[error("session expired, login required")]
    SessionExpired,

    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Service returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the service
    #[error("rate limited by booking service")]
    RateLimited,
}

fn body_suffix(body: &Option<String>) -> String {
    match body {
        Some(body) => format!(" (body: {body})"),
        None => String::new(),
    }
}

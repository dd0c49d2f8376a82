//! Booking client trait and the HTTP gateway binding.
//!
//! The acquisition loop only sees the `BookingClient` trait. The concrete
//! `HttpBookingClient` speaks JSON to a booking gateway that fronts the
//! reservation service, and maps the gateway's failures onto the outcomes
//! the loop understands.

use std::future::Future;

use reqwest::StatusCode;
use tracing::debug;

use crate::domain::{Reservation, SearchQuery, SeatOption, TrainCandidate};

use super::convert::{convert_reservation, convert_train_list, train_to_dto};
use super::error::BookingError;
use super::types::{
    ErrorBody, LoginRequest, LoginResponse, ReservationDto, ReserveRequest, TrainList,
};

/// Default base URL for the booking gateway.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8710";

/// How much of an unexpected response body to keep in errors.
const BODY_SNIPPET_LEN: usize = 500;

/// Access to the reservation service.
///
/// This abstraction allows the acquisition loop to be tested with scripted
/// responses.
pub trait BookingClient {
    /// List trains on the query's route departing at or after its time cursor.
    ///
    /// With `include_sold_out` the service also lists trains that currently
    /// have no seats. Fails with `NoResults` when nothing is listed and with
    /// `SessionExpired` when the session was rejected.
    fn search(
        &self,
        query: &SearchQuery,
        include_sold_out: bool,
    ) -> impl Future<Output = Result<Vec<TrainCandidate>, BookingError>>;

    /// Claim a seat on `candidate`.
    ///
    /// Fails with `SoldOut` when the seats went between search and claim.
    fn reserve(
        &self,
        candidate: &TrainCandidate,
        option: SeatOption,
    ) -> impl Future<Output = Result<Reservation, BookingError>>;

    /// Authenticate, returning whether the session is now usable.
    fn login(&mut self) -> impl Future<Output = Result<bool, BookingError>>;

    /// Whether the last login succeeded.
    fn is_authenticated(&self) -> bool;
}

/// Configuration for the gateway client.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Member ID (already normalized)
    pub member_id: String,
    /// Account password
    pub password: String,
    /// Base URL of the gateway
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GatewayConfig {
    /// Create a new config with the given credentials.
    pub fn new(member_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            password: password.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Booking gateway client.
///
/// Holds the credentials so the session can be re-established after expiry.
#[derive(Clone)]
pub struct HttpBookingClient {
    http: reqwest::Client,
    base_url: String,
    member_id: String,
    password: String,
    session_token: Option<String>,
    authenticated: bool,
}

impl HttpBookingClient {
    /// Create a new client. No request is made until `login`.
    pub fn new(config: GatewayConfig) -> Result<Self, BookingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            member_id: config.member_id,
            password: config.password,
            session_token: None,
            authenticated: false,
        })
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl BookingClient for HttpBookingClient {
    async fn search(
        &self,
        query: &SearchQuery,
        include_sold_out: bool,
    ) -> Result<Vec<TrainCandidate>, BookingError> {
        let url = format!("{}/v1/trains", self.base_url);

        let response = self
            .authorize(self.http.get(&url))
            .query(&[
                ("dep", query.origin.as_str().to_string()),
                ("arr", query.destination.as_str().to_string()),
                ("date", query.date.to_string()),
                ("time", query.time_cursor.to_string()),
                ("include_sold_out", include_sold_out.to_string()),
            ])
            .send()
            .await?;

        let body = success_body(response).await?;

        let list: TrainList = serde_json::from_str(&body).map_err(|e| BookingError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_LEN).collect()),
        })?;

        if list.trains.is_empty() {
            return Err(BookingError::NoResults);
        }

        let trains = convert_train_list(&list.trains);
        debug!(rows = list.trains.len(), usable = trains.len(), "search returned");
        Ok(trains)
    }

    async fn reserve(
        &self,
        candidate: &TrainCandidate,
        option: SeatOption,
    ) -> Result<Reservation, BookingError> {
        let url = format!("{}/v1/reservations", self.base_url);
        let train = train_to_dto(candidate);

        let response = self
            .authorize(self.http.post(&url))
            .json(&ReserveRequest {
                train: &train,
                option: option.as_str(),
            })
            .send()
            .await?;

        let body = success_body(response).await?;

        let dto: ReservationDto = serde_json::from_str(&body).map_err(|e| BookingError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(BODY_SNIPPET_LEN).collect()),
        })?;

        Ok(convert_reservation(dto, candidate))
    }

    async fn login(&mut self) -> Result<bool, BookingError> {
        let url = format!("{}/v1/login", self.base_url);

        let response = self
            .http
            .post(&url)
            .json(&LoginRequest {
                member_id: &self.member_id,
                password: &self.password,
            })
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            self.session_token = None;
            self.authenticated = false;
            return Ok(false);
        }

        let body = success_body(response).await?;

        let login: LoginResponse = serde_json::from_str(&body).map_err(|e| BookingError::Json {
            message: e.to_string(),
            body: None,
        })?;

        self.authenticated = login.authenticated;
        self.session_token = if login.authenticated {
            login.session_token
        } else {
            None
        };

        Ok(self.authenticated)
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Read the body of a successful response, or classify the failure.
async fn success_body(response: reqwest::Response) -> Result<String, BookingError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response.text().await?);
    }

    let body = response.text().await.unwrap_or_default();
    Err(classify_failure(status, &body))
}

/// Map a non-success response onto a booking error.
///
/// An error `code` in the body takes precedence over the status code.
pub(crate) fn classify_failure(status: StatusCode, body: &str) -> BookingError {
    if let Ok(error) = serde_json::from_str::<ErrorBody>(body) {
        match error.code.as_str() {
            "no_results" => return BookingError::NoResults,
            "sold_out" => return BookingError::SoldOut,
            "need_login" => return BookingError::SessionExpired,
            _ => {
                if let Some(message) = error.message {
                    return fallback_for_status(status, format!("{}: {message}", error.code));
                }
            }
        }
    }

    fallback_for_status(status, body.chars().take(BODY_SNIPPET_LEN).collect())
}

fn fallback_for_status(status: StatusCode, message: String) -> BookingError {
    match status {
        StatusCode::UNAUTHORIZED => BookingError::SessionExpired,
        StatusCode::NOT_FOUND => BookingError::NoResults,
        StatusCode::CONFLICT | StatusCode::GONE => BookingError::SoldOut,
        StatusCode::TOO_MANY_REQUESTS => BookingError::RateLimited,
        _ => BookingError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

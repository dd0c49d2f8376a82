//! Failure classification and bounded re-authentication.

use crate::booking::{BookingClient, BookingError};

use super::error::AcquireError;
use super::observer::{PollEvent, PollObserver};

/// How the loop should treat a failed booking call.
#[derive(Debug)]
pub enum Failure {
    /// Nothing listed yet; wait and poll again.
    NoResults,
    /// Lost the race for a seat.
    SoldOut,
    /// Session rejected; re-authenticate.
    SessionExpired,
    /// Anything else. Logged and treated as transient.
    Unclassified(BookingError),
}

impl Failure {
    /// Classify a booking error.
    pub fn classify(error: BookingError) -> Self {
        match error {
            BookingError::NoResults => Failure::NoResults,
            BookingError::SoldOut => Failure::SoldOut,
            BookingError::SessionExpired => Failure::SessionExpired,
            other @ (BookingError::Http(_)
            | BookingError::Json { .. }
            | BookingError::Api { .. }
            | BookingError::RateLimited) => Failure::Unclassified(other),
        }
    }
}

/// Re-login bookkeeping for one run.
///
/// The attempt counter only grows: a successful re-login or a successful
/// poll does not give attempts back.
#[derive(Debug, Clone)]
pub struct SessionGuard {
    attempts: u32,
    max_attempts: u32,
}

impl SessionGuard {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            attempts: 0,
            max_attempts,
        }
    }

    /// Re-logins attempted so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Recover from an expired session.
    ///
    /// Fails without calling `login` once the ceiling is passed, and fails
    /// immediately when the single login attempt does not succeed.
    pub async fn recover<B, O>(&mut self, client: &mut B, observer: &O) -> Result<(), AcquireError>
    where
        B: BookingClient,
        O: PollObserver,
    {
        self.attempts += 1;
        if self.attempts > self.max_attempts {
            observer.observe(PollEvent::ReloginExhausted {
                max: self.max_attempts,
            });
            return Err(AcquireError::ReloginExhausted {
                attempts: self.max_attempts,
            });
        }

        observer.observe(PollEvent::SessionExpired {
            attempt: self.attempts,
            max: self.max_attempts,
        });

        let reason = match client.login().await {
            Ok(true) => return Ok(()),
            Ok(false) => "credentials rejected".to_string(),
            Err(e) => e.to_string(),
        };

        observer.observe(PollEvent::ReloginFailed {
            reason: reason.clone(),
        });
        Err(AcquireError::LoginFailed { reason })
    }
}

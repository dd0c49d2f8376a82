//! Booking service client.
//!
//! The acquisition loop talks to the reservation service only through the
//! `BookingClient` trait. `HttpBookingClient` binds it to a JSON booking
//! gateway. Key characteristics of the service:
//! - Dates are "YYYYMMDD" and times "HHMMSS", both zero-padded
//! - Searches list trains departing at or after a time cursor
//! - Sessions expire server-side and must be re-established with a login

mod client;
mod convert;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod types;

pub use client::{BookingClient, DEFAULT_BASE_URL, GatewayConfig, HttpBookingClient};
pub use error::BookingError;

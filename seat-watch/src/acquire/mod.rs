//! Seat acquisition.
//!
//! This module implements the polling loop that answers: "is there a seat
//! on this route yet? If so, take it."
//!
//! Two search modes share one loop. Range mode tries the earliest few trains
//! with general seats; exact mode watches a single train until a seat opens.

mod config;
mod error;
mod observer;
mod runner;
mod select;
mod session;


pub use config::{
    AcquireConfig, DEFAULT_LIMIT, MAX_INTERVAL_SECS, MAX_RELOGIN_ATTEMPTS, MIN_INTERVAL_SECS,
    SearchMode, clamp_interval,
};
pub use error::{AcquireError, EXIT_AUTH_FAILURE};
pub use observer::{PollEvent, PollObserver, TracingObserver};
pub use runner::{Acquirer, success_message};
pub use select::{pick_exact, shortlist};
pub use session::{Failure, SessionGuard};

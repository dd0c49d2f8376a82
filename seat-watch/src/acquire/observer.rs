//! Progress reporting for the acquisition loop.
//!
//! The loop never logs directly. It reports each step as a `PollEvent` to an
//! injected `PollObserver`; `TracingObserver` turns events into log lines,
//! while tests record them and assert on the sequence.

use std::time::Duration;

use tracing::{debug, error, info};

use crate::domain::{Reservation, SearchQuery, TrainCandidate};

use super::config::SearchMode;

/// One step of the acquisition loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    /// A poll cycle is starting.
    Searching {
        attempt: u64,
        query: SearchQuery,
        mode: SearchMode,
    },

    /// Nothing to try this cycle.
    NoResults { exact: bool },

    /// Exact mode found the watched train.
    Found(TrainCandidate),

    /// The watched train has no general seats yet.
    NoSeatsYet(TrainCandidate),

    /// About to claim a seat on this train.
    Trying(TrainCandidate),

    /// A claim lost the race.
    SoldOut { exact: bool },

    /// Every shortlisted train sold out during this cycle.
    ShortlistExhausted { tried: usize },

    /// A seat was claimed.
    Reserved(Reservation),

    /// The session expired and a re-login is being attempted.
    SessionExpired { attempt: u32, max: u32 },

    /// A re-login did not succeed.
    ReloginFailed { reason: String },

    /// The session expired once more than re-logins are allowed.
    ReloginExhausted { max: u32 },

    /// A failure the loop could not classify.
    Unclassified { detail: String },

    /// Waiting before the next cycle.
    Sleeping(Duration),
}

/// Receives loop progress.
pub trait PollObserver {
    fn observe(&self, event: PollEvent);
}

/// Observer that logs through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PollObserver for TracingObserver {
    fn observe(&self, event: PollEvent) {
        match event {
            PollEvent::Searching {
                attempt,
                query,
                mode: SearchMode::Range { limit, end_time },
            } => {
                let until = end_time.map(|t| format!(" until {t}")).unwrap_or_default();
                info!(
                    "[{attempt}] Searching {}->{} on {} from {}{until} (limit {limit})...",
                    query.origin, query.destination, query.date, query.time_cursor
                );
            }
            PollEvent::Searching {
                attempt,
                query,
                mode: SearchMode::Exact,
            } => info!(
                "[{attempt}] Searching exact train {}->{} on {} at {}...",
                query.origin, query.destination, query.date, query.time_cursor
            ),
            PollEvent::NoResults { exact: false } => info!("No seats found."),
            PollEvent::NoResults { exact: true } => {
                info!("Exact train not found (or no schedule returned yet).")
            }
            PollEvent::Found(train) => info!("Found {train}"),
            PollEvent::NoSeatsYet(_) => info!("No general seats yet, retrying..."),
            PollEvent::Trying(train) => info!("Trying {train}"),
            PollEvent::SoldOut { exact: false } => {
                info!("Sold out while reserving candidate, moving on...")
            }
            PollEvent::SoldOut { exact: true } => info!("Sold out while reserving, retrying..."),
            PollEvent::ShortlistExhausted { tried } => {
                info!("All {tried} shortlisted trains sold out, retrying...")
            }
            PollEvent::Reserved(reservation) => info!(
                "Reserved! ID={}, train={}",
                reservation.id.as_deref().unwrap_or("-"),
                reservation.description
            ),
            PollEvent::SessionExpired { attempt, max } => {
                info!("Session expired, re-authenticating (attempt {attempt}/{max})...")
            }
            PollEvent::ReloginFailed { reason } => error!("Re-login failed, aborting: {reason}"),
            PollEvent::ReloginExhausted { max } => {
                error!("Re-login failed too many times ({max} allowed), aborting.")
            }
            PollEvent::Unclassified { detail } => error!("Unexpected error: {detail}"),
            PollEvent::Sleeping(interval) => debug!("sleeping {}s", interval.as_secs()),
        }
    }
}

/// Observer that keeps every event, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: std::sync::Mutex<Vec<PollEvent>>,
}

#[cfg(test)]
impl RecordingObserver {
    pub fn events(&self) -> Vec<PollEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl PollObserver for RecordingObserver {
    fn observe(&self, event: PollEvent) {
        self.events.lock().unwrap().push(event);
    }
}

//! The acquisition loop.
//!
//! Each cycle searches, selects, and tries to claim a general seat. Cycles
//! run strictly one after another:
//!
//! ```text
//! Idle -> Searching -> (Selecting ->) Reserving -> Success
//!                                              \-> Retryable (sleep, next cycle)
//!                                              \-> Terminal (fatal error)
//! ```
//!
//! Expected misses (nothing listed, sold out) and unclassified failures all
//! end the cycle with the same constant pause. An expired session is the
//! exception: after a successful re-login the next cycle starts at once.

use crate::booking::BookingClient;
use crate::domain::{Reservation, SearchQuery, SeatOption, ServiceTime, TrainCandidate};
use crate::notify::Notifier;

use super::config::{AcquireConfig, SearchMode};
use super::error::AcquireError;
use super::observer::{PollEvent, PollObserver};
use super::select::{pick_exact, shortlist};
use super::session::{Failure, SessionGuard};

/// How a single poll cycle ended.
#[derive(Debug)]
enum CycleOutcome {
    /// A seat was claimed on `train`.
    Reserved {
        reservation: Reservation,
        train: TrainCandidate,
    },

    /// Exact mode found its train without general seats.
    NoSeatsYet,

    /// Range mode lost the race on every shortlisted train.
    ShortlistExhausted { tried: usize },

    /// A booking call failed.
    Failed(Failure),
}

/// Loop bookkeeping. Owned by a single `run`.
#[derive(Debug)]
struct LoopState {
    attempt: u64,
    guard: SessionGuard,
}

/// Drives search and reserve cycles until a seat is claimed.
pub struct Acquirer<B, N, O> {
    client: B,
    notifier: N,
    observer: O,
    config: AcquireConfig,
}

impl<B, N, O> Acquirer<B, N, O>
where
    B: BookingClient,
    N: Notifier,
    O: PollObserver,
{
    /// Create a new acquirer.
    pub fn new(client: B, notifier: N, observer: O, config: AcquireConfig) -> Self {
        Self {
            client,
            notifier,
            observer,
            config,
        }
    }

    pub fn client(&self) -> &B {
        &self.client
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Poll until a seat is claimed or authentication can't be recovered.
    ///
    /// A client that is not logged in goes through the session guard before
    /// its next search. On success the operator is notified before the
    /// reservation is returned. At most one reservation is made per call.
    pub async fn run(&mut self, query: &SearchQuery) -> Result<Reservation, AcquireError> {
        let mut state = LoopState {
            attempt: 0,
            guard: SessionGuard::new(self.config.max_relogin_attempts),
        };
        let exact = self.config.mode.is_exact();

        loop {
            if !self.client.is_authenticated() {
                state
                    .guard
                    .recover(&mut self.client, &self.observer)
                    .await?;
            }

            state.attempt += 1;
            self.observer.observe(PollEvent::Searching {
                attempt: state.attempt,
                query: query.clone(),
                mode: self.config.mode.clone(),
            });

            let outcome = match self.config.mode {
                SearchMode::Range { limit, end_time } => {
                    self.range_cycle(query, limit, end_time).await
                }
                SearchMode::Exact => self.exact_cycle(query).await,
            };

            match outcome {
                CycleOutcome::Reserved { reservation, train } => {
                    self.observer
                        .observe(PollEvent::Reserved(reservation.clone()));
                    self.notifier
                        .send(&success_message(query, &train, &reservation))
                        .await;
                    return Ok(reservation);
                }
                CycleOutcome::NoSeatsYet => {}
                CycleOutcome::ShortlistExhausted { tried } => {
                    self.observer
                        .observe(PollEvent::ShortlistExhausted { tried });
                }
                CycleOutcome::Failed(Failure::NoResults) => {
                    self.observer.observe(PollEvent::NoResults { exact });
                }
                CycleOutcome::Failed(Failure::SoldOut) => {
                    self.observer.observe(PollEvent::SoldOut { exact });
                }
                CycleOutcome::Failed(Failure::SessionExpired) => {
                    state
                        .guard
                        .recover(&mut self.client, &self.observer)
                        .await?;
                    continue;
                }
                CycleOutcome::Failed(Failure::Unclassified(e)) => {
                    self.observer.observe(PollEvent::Unclassified {
                        detail: format!("{e:?}: {e}"),
                    });
                }
            }

            let interval = self.config.interval();
            self.observer.observe(PollEvent::Sleeping(interval));
            tokio::time::sleep(interval).await;
        }
    }

    /// One range-mode cycle: try the shortlist in order.
    ///
    /// A sold-out claim moves on to the next train in the same cycle; any
    /// other failure ends the cycle.
    async fn range_cycle(
        &self,
        query: &SearchQuery,
        limit: usize,
        end_time: Option<ServiceTime>,
    ) -> CycleOutcome {
        let trains = match self.client.search(query, false).await {
            Ok(trains) => trains,
            Err(e) => return CycleOutcome::Failed(Failure::classify(e)),
        };

        let candidates = shortlist(trains, limit, end_time);
        if candidates.is_empty() {
            return CycleOutcome::Failed(Failure::NoResults);
        }

        let tried = candidates.len();
        for train in candidates {
            self.observer.observe(PollEvent::Trying(train.clone()));
            match self.client.reserve(&train, SeatOption::GeneralOnly).await {
                Ok(reservation) => return CycleOutcome::Reserved { reservation, train },
                Err(e) => match Failure::classify(e) {
                    Failure::SoldOut => {
                        self.observer.observe(PollEvent::SoldOut { exact: false });
                    }
                    other => return CycleOutcome::Failed(other),
                },
            }
        }

        CycleOutcome::ShortlistExhausted { tried }
    }

    /// One exact-mode cycle: look for the watched train and claim it if it
    /// has general seats.
    async fn exact_cycle(&self, query: &SearchQuery) -> CycleOutcome {
        let trains = match self.client.search(query, true).await {
            Ok(trains) => trains,
            Err(e) => return CycleOutcome::Failed(Failure::classify(e)),
        };

        let Some(train) = pick_exact(trains, query) else {
            return CycleOutcome::Failed(Failure::NoResults);
        };

        self.observer.observe(PollEvent::Found(train.clone()));
        if !train.general_seat_available {
            self.observer.observe(PollEvent::NoSeatsYet(train));
            return CycleOutcome::NoSeatsYet;
        }

        match self.client.reserve(&train, SeatOption::GeneralOnly).await {
            Ok(reservation) => CycleOutcome::Reserved { reservation, train },
            Err(e) => CycleOutcome::Failed(Failure::classify(e)),
        }
    }
}

/// Notification text for a claimed seat.
pub fn success_message(
    query: &SearchQuery,
    train: &TrainCandidate,
    reservation: &Reservation,
) -> String {
    format!(
        "Reserved: {}->{} {} {}\n{}",
        query.origin, query.destination, query.date, train.departure_time, reservation
    )
}

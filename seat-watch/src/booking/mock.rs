//! Scripted booking client for testing the acquisition loop.
//!
//! Each call pops the next scripted response, and every call is recorded so
//! tests can assert on what the loop asked for.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::{
    Reservation, SearchQuery, SeatOption, ServiceDate, ServiceTime, StationName, TrainCandidate,
};

use super::client::BookingClient;
use super::error::BookingError;

/// Booking client that replays scripted responses.
///
/// Running out of scripted responses panics, which keeps a misbehaving loop
/// from polling forever inside a test.
#[derive(Default)]
pub struct ScriptedBookingClient {
    searches: Mutex<VecDeque<Result<Vec<TrainCandidate>, BookingError>>>,
    reserves: Mutex<VecDeque<Result<Reservation, BookingError>>>,
    logins: VecDeque<Result<bool, BookingError>>,
    search_calls: Mutex<Vec<bool>>,
    reserve_calls: Mutex<Vec<TrainCandidate>>,
    login_calls: usize,
    authenticated: bool,
}

impl ScriptedBookingClient {
    pub fn new() -> Self {
        Self {
            authenticated: true,
            ..Self::default()
        }
    }

    /// A client whose session is already gone.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Queue the response to the next search.
    pub fn push_search(&mut self, response: Result<Vec<TrainCandidate>, BookingError>) {
        self.searches.get_mut().unwrap().push_back(response);
    }

    /// Queue the response to the next reserve.
    pub fn push_reserve(&mut self, response: Result<Reservation, BookingError>) {
        self.reserves.get_mut().unwrap().push_back(response);
    }

    /// Queue the response to the next login.
    pub fn push_login(&mut self, response: Result<bool, BookingError>) {
        self.logins.push_back(response);
    }

    /// `include_sold_out` flag of every search so far.
    pub fn search_calls(&self) -> Vec<bool> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Candidates of every reserve attempt so far.
    pub fn reserve_calls(&self) -> Vec<TrainCandidate> {
        self.reserve_calls.lock().unwrap().clone()
    }

    pub fn login_calls(&self) -> usize {
        self.login_calls
    }
}

impl BookingClient for ScriptedBookingClient {
    async fn search(
        &self,
        _query: &SearchQuery,
        include_sold_out: bool,
    ) -> Result<Vec<TrainCandidate>, BookingError> {
        self.search_calls.lock().unwrap().push(include_sold_out);
        self.searches
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted search response left")
    }

    async fn reserve(
        &self,
        candidate: &TrainCandidate,
        option: SeatOption,
    ) -> Result<Reservation, BookingError> {
        assert_eq!(option, SeatOption::GeneralOnly);
        self.reserve_calls.lock().unwrap().push(candidate.clone());
        self.reserves
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reserve response left")
    }

    async fn login(&mut self) -> Result<bool, BookingError> {
        self.login_calls += 1;
        let result = self
            .logins
            .pop_front()
            .expect("no scripted login response left");
        self.authenticated = matches!(result, Ok(true));
        result
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

/// Build a candidate on the default test route (동대구 → 광명, 2024-03-15).
pub fn train(dep_time: &str, general_seat_available: bool) -> TrainCandidate {
    TrainCandidate {
        train_type: "KTX".to_string(),
        train_no: format!("K{dep_time}"),
        departure_date: ServiceDate::parse("20240315").unwrap(),
        departure_time: ServiceTime::parse(dep_time).unwrap(),
        departure_station: StationName::parse("동대구").unwrap(),
        arrival_station: StationName::parse("광명").unwrap(),
        arrival_time: None,
        general_seat_available,
        booking_ref: None,
    }
}

/// The query matching `train`'s route and date, with the given cursor.
pub fn query(time_cursor: &str) -> SearchQuery {
    SearchQuery::new(
        StationName::parse("동대구").unwrap(),
        StationName::parse("광명").unwrap(),
        ServiceDate::parse("20240315").unwrap(),
        ServiceTime::parse(time_cursor).unwrap(),
    )
}

/// A reservation for `candidate`.
pub fn reservation_for(candidate: &TrainCandidate) -> Reservation {
    Reservation {
        id: Some(format!("R-{}", candidate.train_no)),
        description: candidate.to_string(),
    }
}

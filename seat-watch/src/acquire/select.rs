//! Candidate selection.
//!
//! Turns one poll's raw search results into the trains worth trying this
//! cycle.

use crate::domain::{SearchQuery, ServiceTime, TrainCandidate};

/// Build the range-mode shortlist.
///
/// Keeps trains departing no later than `end_time` (when set) that have
/// general seats, earliest first by (date, time), and at most `limit` of
/// them. The sort is stable, so trains departing at the same moment keep
/// the order the service listed them in.
pub fn shortlist(
    mut candidates: Vec<TrainCandidate>,
    limit: usize,
    end_time: Option<ServiceTime>,
) -> Vec<TrainCandidate> {
    candidates.retain(|t| {
        t.general_seat_available && end_time.is_none_or(|end| t.departure_time <= end)
    });
    candidates.sort_by_key(|t| (t.departure_date, t.departure_time));
    candidates.truncate(limit);
    candidates
}

/// Find the exact-mode target.
///
/// Returns the first train whose date, departure time, origin and
/// destination all equal the query's, whatever its seat availability.
pub fn pick_exact(candidates: Vec<TrainCandidate>, query: &SearchQuery) -> Option<TrainCandidate> {
    candidates.into_iter().find(|t| {
        t.departure_date == query.date
            && t.departure_time == query.time_cursor
            && t.departure_station == query.origin
            && t.arrival_station == query.destination
    })
}

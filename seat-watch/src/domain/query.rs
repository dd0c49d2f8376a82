//! Search query.

use super::{ServiceDate, ServiceTime, StationName};

/// Route, date and time cursor for one acquisition run.
///
/// Every field is a validated type, so a query that exists is a query the
/// booking service will accept syntactically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub origin: StationName,
    pub destination: StationName,
    pub date: ServiceDate,

    /// Earliest departure time to list. In exact mode this is also the
    /// departure time of the watched train.
    pub time_cursor: ServiceTime,
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new(
        origin: StationName,
        destination: StationName,
        date: ServiceDate,
        time_cursor: ServiceTime,
    ) -> Self {
        Self {
            origin,
            destination,
            date,
            time_cursor,
        }
    }
}

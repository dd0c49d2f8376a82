//! Domain types for the seat watcher.
//!
//! All types enforce their invariants at construction time, so code that
//! receives them (the selector, the loop, the booking client) can trust
//! dates, times and station names without re-checking them.

mod member_id;
mod query;
mod station;
mod time;
mod train;

pub use member_id::normalize_member_id;
pub use query::SearchQuery;
pub use station::{InvalidStation, StationName};
pub use time::{InvalidDate, InvalidTime, ServiceDate, ServiceTime};
pub use train::{Reservation, SeatOption, TrainCandidate};

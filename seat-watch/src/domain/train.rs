//! Search results and reservations.

use std::fmt;

use super::{ServiceDate, ServiceTime, StationName};

/// One train row from a single search.
///
/// A snapshot: availability is only meaningful for the poll that produced
/// it, and the loop never carries candidates from one poll to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainCandidate {
    /// Train type as the service labels it (e.g. "KTX").
    pub train_type: String,

    /// Train number.
    pub train_no: String,

    pub departure_date: ServiceDate,
    pub departure_time: ServiceTime,
    pub departure_station: StationName,
    pub arrival_station: StationName,
    pub arrival_time: Option<ServiceTime>,

    /// Whether general-class seats can be claimed right now.
    pub general_seat_available: bool,

    /// Opaque identity the service needs to reserve this exact train.
    pub booking_ref: Option<String>,
}

impl fmt::Display for TrainCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {}] {} {}~{} ({}",
            self.train_type,
            self.train_no,
            self.departure_date,
            self.departure_station,
            self.arrival_station,
            self.departure_time
        )?;
        if let Some(arrival) = self.arrival_time {
            write!(f, "~{arrival}")?;
        }
        let seats = if self.general_seat_available {
            "available"
        } else {
            "sold out"
        };
        write!(f, ") general seats {seats}")
    }
}

/// Seat class requested when claiming a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeatOption {
    /// Non-reserved general seats only.
    #[default]
    GeneralOnly,
}

impl SeatOption {
    /// Wire name of the option.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatOption::GeneralOnly => "general_only",
        }
    }
}

/// A successfully claimed seat.
///
/// Treated as opaque apart from the identifier, which is only used for
/// logging and notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: Option<String>,
    pub description: String,
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{} (ID={id})", self.description),
            None => f.write_str(&self.description),
        }
    }
}

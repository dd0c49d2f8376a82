//! Conversion between gateway DTOs and domain types.

use tracing::warn;

use crate::domain::{Reservation, ServiceDate, ServiceTime, StationName, TrainCandidate};

use super::types::{ReservationDto, TrainDto};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse a date string
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Failed to parse a time string
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Station name missing or blank
    #[error("invalid station name: {0:?}")]
    InvalidStation(String),
}

/// Convert a search response into candidates.
///
/// Rows that fail validation are logged and skipped rather than failing the
/// whole poll.
pub fn convert_train_list(trains: &[TrainDto]) -> Vec<TrainCandidate> {
    let mut results = Vec::with_capacity(trains.len());

    for dto in trains {
        match convert_train(dto) {
            Ok(candidate) => results.push(candidate),
            Err(e) => {
                warn!(train_no = %dto.train_no, "skipping malformed train row: {e}");
            }
        }
    }

    results
}

/// Convert a single train row.
pub fn convert_train(dto: &TrainDto) -> Result<TrainCandidate, ConversionError> {
    let departure_date = ServiceDate::parse(&dto.dep_date)
        .map_err(|_| ConversionError::InvalidDate(dto.dep_date.clone()))?;
    let departure_time = ServiceTime::parse(&dto.dep_time)
        .map_err(|_| ConversionError::InvalidTime(dto.dep_time.clone()))?;
    let arrival_time = dto
        .arr_time
        .as_deref()
        .map(|t| ServiceTime::parse(t).map_err(|_| ConversionError::InvalidTime(t.to_string())))
        .transpose()?;
    let departure_station = StationName::parse(&dto.dep_name)
        .map_err(|_| ConversionError::InvalidStation(dto.dep_name.clone()))?;
    let arrival_station = StationName::parse(&dto.arr_name)
        .map_err(|_| ConversionError::InvalidStation(dto.arr_name.clone()))?;

    Ok(TrainCandidate {
        train_type: dto.train_type.clone(),
        train_no: dto.train_no.clone(),
        departure_date,
        departure_time,
        departure_station,
        arrival_station,
        arrival_time,
        general_seat_available: dto.has_general_seat,
        booking_ref: dto.booking_ref.clone(),
    })
}

/// Rebuild the wire form of a candidate for a reserve call.
pub fn train_to_dto(candidate: &TrainCandidate) -> TrainDto {
    TrainDto {
        train_type: candidate.train_type.clone(),
        train_no: candidate.train_no.clone(),
        dep_date: candidate.departure_date.to_string(),
        dep_time: candidate.departure_time.to_string(),
        dep_name: candidate.departure_station.as_str().to_string(),
        arr_name: candidate.arrival_station.as_str().to_string(),
        arr_time: candidate.arrival_time.map(|t| t.to_string()),
        has_general_seat: candidate.general_seat_available,
        booking_ref: candidate.booking_ref.clone(),
    }
}

/// Convert a reservation response.
///
/// A missing description falls back to the train that was claimed.
pub fn convert_reservation(dto: ReservationDto, candidate: &TrainCandidate) -> Reservation {
    let description = if dto.description.trim().is_empty() {
        candidate.to_string()
    } else {
        dto.description
    };

    Reservation {
        id: dto.reservation_id,
        description,
    }
}

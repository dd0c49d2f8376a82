//! Booking gateway wire types.
//!
//! These mirror the gateway's JSON payloads field for field. Conversion into
//! validated domain types happens in `convert`.

use serde::{Deserialize, Serialize};

/// Body of a login request.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub member_id: &'a str,
    pub password: &'a str,
}

/// Response to a login request.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub authenticated: bool,
    #[serde(default)]
    pub session_token: Option<String>,
}

/// Response to a train search.
#[derive(Debug, Deserialize)]
pub struct TrainList {
    #[serde(default)]
    pub trains: Vec<TrainDto>,
}

/// One train row as the gateway reports it.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct TrainDto {
    pub train_type: String,
    pub train_no: String,
    /// "YYYYMMDD"
    pub dep_date: String,
    /// "HHMMSS"
    pub dep_time: String,
    pub dep_name: String,
    pub arr_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arr_time: Option<String>,
    pub has_general_seat: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_ref: Option<String>,
}

/// Body of a reservation request.
#[derive(Debug, Serialize)]
pub struct ReserveRequest<'a> {
    pub train: &'a TrainDto,
    pub option: &'static str,
}

/// Response to a successful reservation.
#[derive(Debug, Deserialize)]
pub struct ReservationDto {
    #[serde(default)]
    pub reservation_id: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Error body the gateway attaches to non-success responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_train_list() {
        let json = r#"{
            "trains": [{
                "train_type": "KTX",
                "train_no": "101",
                "dep_date": "20240315",
                "dep_time": "090000",
                "dep_name": "동대구",
                "arr_name": "광명",
                "arr_time": "104500",
                "has_general_seat": true,
                "booking_ref": "abc"
            }]
        }"#;

        let list: TrainList = serde_json::from_str(json).unwrap();
        assert_eq!(list.trains.len(), 1);
        assert_eq!(list.trains[0].dep_time, "090000");
        assert_eq!(list.trains[0].booking_ref.as_deref(), Some("abc"));
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "train_type": "ITX",
            "train_no": "7",
            "dep_date": "20240315",
            "dep_time": "090000",
            "dep_name": "A",
            "arr_name": "B",
            "has_general_seat": false
        }"#;

        let train: TrainDto = serde_json::from_str(json).unwrap();
        assert!(train.arr_time.is_none());
        assert!(train.booking_ref.is_none());

        let list: TrainList = serde_json::from_str("{}").unwrap();
        assert!(list.trains.is_empty());
    }

    #[test]
    fn reserve_request_shape() {
        let train = TrainDto {
            train_type: "KTX".into(),
            train_no: "101".into(),
            dep_date: "20240315".into(),
            dep_time: "090000".into(),
            dep_name: "동대구".into(),
            arr_name: "광명".into(),
            arr_time: None,
            has_general_seat: true,
            booking_ref: None,
        };
        let body = serde_json::to_value(ReserveRequest {
            train: &train,
            option: "general_only",
        })
        .unwrap();

        assert_eq!(body["option"], "general_only");
        assert_eq!(body["train"]["train_no"], "101");
        assert!(body["train"].get("arr_time").is_none());
    }

    #[test]
    fn login_response_without_token() {
        let resp: LoginResponse = serde_json::from_str(r#"{"authenticated": false}"#).unwrap();
        assert!(!resp.authenticated);
        assert!(resp.session_token.is_none());
    }
}

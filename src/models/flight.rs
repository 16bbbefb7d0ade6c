use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    Scheduled,
    Open,
    Boarding,
    Departed,
    Arrived,
    Delayed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl FlightStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::Open => "OPEN",
            Self::Boarding => "BOARDING",
            Self::Departed => "DEPARTED",
            Self::Arrived => "ARRIVED",
            Self::Delayed => "DELAYED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub distance_km: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: i64,
    pub flight_number: String,
    pub route: Route,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub status: FlightStatus,
    #[serde(default)]
    pub aircraft_id: Option<i64>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub available_seats: Option<u32>,
}

impl Flight {
    pub fn duration(&self) -> Duration {
        self.arrival_time - self.departure_time
    }

    pub fn is_departed(&self, now: DateTime<Utc>) -> bool {
        now >= self.departure_time
    }

    /// "2h 35m" style label
    pub fn duration_label(&self) -> String {
        let minutes = self.duration().num_minutes().max(0);
        format!("{}h {:02}m", minutes / 60, minutes % 60)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFlight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub aircraft_id: i64,
    pub base_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightStatusUpdate {
    pub status: FlightStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn flight() -> Flight {
        Flight {
            id: 1,
            flight_number: "SK101".into(),
            route: Route {
                origin: "HAN".into(),
                destination: "SGN".into(),
                distance_km: None,
            },
            departure_time: Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap(),
            arrival_time: Utc.with_ymd_and_hms(2025, 3, 1, 10, 5, 0).unwrap(),
            status: FlightStatus::Open,
            aircraft_id: None,
            base_price: None,
            available_seats: None,
        }
    }

    #[test]
    fn duration_and_departure() {
        let f = flight();
        assert_eq!(f.duration(), Duration::minutes(125));
        assert_eq!(f.duration_label(), "2h 05m");
        assert!(!f.is_departed(Utc.with_ymd_and_hms(2025, 3, 1, 7, 59, 0).unwrap()));
        assert!(f.is_departed(f.departure_time));
    }

    #[test]
    fn unknown_status_does_not_break_decoding() {
        let status: FlightStatus = serde_json::from_str("\"DIVERTED\"").unwrap();
        assert_eq!(status, FlightStatus::Unknown);
    }
}

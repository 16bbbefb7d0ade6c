use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::employee::Position;

/// Crew member placed on a flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: i64,
    pub flight_id: i64,
    #[serde(default)]
    pub flight_number: Option<String>,
    pub employee_id: i64,
    #[serde(default)]
    pub employee_name: Option<String>,
    #[serde(default)]
    pub role: Option<Position>,
    #[serde(default)]
    pub departure_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub arrival_time: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Block hours of the assigned flight, when both times are known
    pub fn block_hours(&self) -> Option<f64> {
        let (dep, arr) = (self.departure_time?, self.arrival_time?);
        let minutes = (arr - dep).num_minutes();
        (minutes >= 0).then(|| minutes as f64 / 60.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignCrewRequest {
    pub flight_id: i64,
    pub employee_id: i64,
}

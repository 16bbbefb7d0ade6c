use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::assignment::Assignment;

/// Job position of an employee. `Ticketing` staffs the desks, every other
/// position flies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Ticketing,
    Pilot,
    CoPilot,
    FlightAttendant,
    Other(String),
}

impl Position {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ticketing => "TICKETING",
            Self::Pilot => "PILOT",
            Self::CoPilot => "CO_PILOT",
            Self::FlightAttendant => "FLIGHT_ATTENDANT",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_ticketing(&self) -> bool {
        matches!(self, Self::Ticketing)
    }
}

impl From<String> for Position {
    fn from(raw: String) -> Self {
        match raw.to_ascii_uppercase().as_str() {
            "TICKETING" => Self::Ticketing,
            "PILOT" => Self::Pilot,
            "CO_PILOT" | "COPILOT" => Self::CoPilot,
            "FLIGHT_ATTENDANT" => Self::FlightAttendant,
            _ => Self::Other(raw),
        }
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.as_str().to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub employee_code: Option<String>,
    #[serde(default)]
    pub full_name: String,
    pub position: Position,
    #[serde(default)]
    pub flight_hours: f64,
    #[serde(default)]
    pub monthly_flight_hours: f64,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub user_id: i64,
    pub full_name: String,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_code: Option<String>,
}

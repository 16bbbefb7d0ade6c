use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::seat::SeatClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Booked,
    Paid,
    CheckedIn,
    Boarded,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "BOOKED",
            Self::Paid => "PAID",
            Self::CheckedIn => "CHECKED_IN",
            Self::Boarded => "BOARDED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i64,
    pub ticket_code: String,
    pub flight_id: i64,
    #[serde(default)]
    pub flight_number: Option<String>,
    pub passenger_id: i64,
    #[serde(default)]
    pub passenger_name: Option<String>,
    #[serde(default)]
    pub seat_number: Option<String>,
    #[serde(default)]
    pub seat_class: Option<SeatClass>,
    pub status: TicketStatus,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub booked_at: Option<DateTime<Utc>>,
}

impl Ticket {
    pub fn can_pay(&self) -> bool {
        self.status == TicketStatus::Booked
    }

    pub fn can_check_in(&self) -> bool {
        self.status == TicketStatus::Paid
    }

    pub fn can_cancel(&self) -> bool {
        matches!(self.status, TicketStatus::Booked | TicketStatus::Paid)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub flight_id: i64,
    pub seat_class: SeatClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_guards_follow_status() {
        let mut ticket: Ticket = serde_json::from_value(serde_json::json!({
            "id": 7,
            "ticketCode": "TK-7",
            "flightId": 1,
            "passengerId": 3,
            "status": "BOOKED"
        }))
        .unwrap();
        assert!(ticket.can_pay());
        assert!(!ticket.can_check_in());

        ticket.status = TicketStatus::Paid;
        assert!(ticket.can_check_in());
        assert!(ticket.can_cancel());

        ticket.status = TicketStatus::CheckedIn;
        assert!(!ticket.can_cancel());
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl SeatClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Economy => "ECONOMY",
            Self::PremiumEconomy => "PREMIUM_ECONOMY",
            Self::Business => "BUSINESS",
            Self::First => "FIRST",
        }
    }

    pub fn all() -> [SeatClass; 4] {
        [Self::Economy, Self::PremiumEconomy, Self::Business, Self::First]
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::all().into_iter().find(|class| class.as_str() == raw)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub id: i64,
    pub flight_id: i64,
    pub seat_number: String,
    pub seat_class: SeatClass,
    #[serde(default)]
    pub available: bool,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aircraft {
    pub id: i64,
    pub registration: String,
    pub model: String,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub total_seats: u32,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAircraft {
    pub registration: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    pub economy_seats: u32,
    pub business_seats: u32,
}

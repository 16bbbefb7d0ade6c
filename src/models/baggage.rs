use serde::{Deserialize, Serialize};

/// Checked bag. The fee is computed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baggage {
    pub id: i64,
    pub ticket_id: i64,
    #[serde(default)]
    pub tag_number: Option<String>,
    pub weight_kg: f64,
    #[serde(default)]
    pub fee: f64,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBaggage {
    pub ticket_id: i64,
    pub weight_kg: f64,
}

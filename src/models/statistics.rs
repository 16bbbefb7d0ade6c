use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsOverview {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_flights: u64,
    #[serde(default)]
    pub tickets_sold: u64,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub active_aircraft: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    /// `YYYY-MM`
    pub month: String,
    pub revenue: f64,
    #[serde(default)]
    pub tickets: u64,
}

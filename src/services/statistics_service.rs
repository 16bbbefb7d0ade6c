use crate::error::ApiResult;
use crate::models::{MonthlyRevenue, StatisticsOverview};
use crate::services::api_client::{ApiClient, CancelToken};
use crate::services::transport::Transport;

const STATISTICS_PATH: &str = "/statistics";

impl<T: Transport> ApiClient<T> {
    pub async fn overview(&self, cancel: &CancelToken) -> ApiResult<StatisticsOverview> {
        self.get_cancellable(&format!("{}/overview", STATISTICS_PATH), &[], cancel)
            .await
    }

    /// Revenue per month of `year`, in calendar order
    pub async fn revenue_by_month(&self, year: i32, cancel: &CancelToken) -> ApiResult<Vec<MonthlyRevenue>> {
        let query = [("year".to_string(), year.to_string())];
        let mut months: Vec<MonthlyRevenue> = self
            .get_cancellable(&format!("{}/revenue", STATISTICS_PATH), &query, cancel)
            .await?;
        months.sort_by(|a, b| a.month.cmp(&b.month));
        Ok(months)
    }
}

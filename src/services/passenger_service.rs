use crate::error::ApiResult;
use crate::models::{Page, Passenger, UpdatePassengerRequest};
use crate::services::api_client::{ApiClient, CancelToken};
use crate::services::query::{FilterField, Query};
use crate::services::transport::Transport;

const PASSENGERS_PATH: &str = "/passengers";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassengerField {
    Id,
    FullName,
    Nationality,
    PassportNumber,
    LoyaltyPoints,
}

impl FilterField for PassengerField {
    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FullName => "fullName",
            Self::Nationality => "nationality",
            Self::PassportNumber => "passportNumber",
            Self::LoyaltyPoints => "loyaltyPoints",
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_passengers(
        &self,
        query: &Query<PassengerField>,
        cancel: &CancelToken,
    ) -> ApiResult<Page<Passenger>> {
        self.get_cancellable(PASSENGERS_PATH, &query.to_pairs(), cancel)
            .await
    }

    pub async fn get_passenger(&self, id: i64) -> ApiResult<Passenger> {
        self.get(&format!("{}/{}", PASSENGERS_PATH, id), &[]).await
    }

    /// Only the fields set on `request` are sent
    pub async fn update_passenger(
        &self,
        id: i64,
        request: &UpdatePassengerRequest,
    ) -> ApiResult<Passenger> {
        self.patch(&format!("{}/{}", PASSENGERS_PATH, id), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{ok, signed_in_client};

    #[tokio::test]
    async fn partial_update_skips_unset_fields() {
        let (api, _storage) = signed_in_client(vec![ok(
            r#"{"id":9,"fullName":"Alice Nguyen","nationality":"VN","loyaltyPoints":120}"#,
        )]);
        let passenger = api
            .update_passenger(
                9,
                &UpdatePassengerRequest {
                    nationality: Some("VN".to_string()),
                    ..UpdatePassengerRequest::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(passenger.nationality.as_deref(), Some("VN"));
        assert_eq!(
            api.transport().last_request().body.as_deref(),
            Some(r#"{"nationality":"VN"}"#)
        );
    }

    #[tokio::test]
    async fn loyalty_threshold_filter() {
        let (api, _storage) = signed_in_client(vec![ok(r#"{"content":[]}"#)]);
        let query = Query::new().ge(PassengerField::LoyaltyPoints, 1000);
        api.list_passengers(&query, &CancelToken::new()).await.unwrap();
        assert!(api
            .transport()
            .last_request()
            .url
            .ends_with("filter=loyaltyPoints%3Dge%3D1000"));
    }
}

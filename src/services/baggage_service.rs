use crate::error::{ApiError, ApiResult};
use crate::models::{Baggage, NewBaggage};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

const BAGGAGE_PATH: &str = "/baggage";
const MAX_PIECE_WEIGHT_KG: f64 = 32.0;

impl<T: Transport> ApiClient<T> {
    /// Pieces checked against one ticket
    pub async fn list_baggage(&self, ticket_id: i64) -> ApiResult<Vec<Baggage>> {
        let query = [("ticketId".to_string(), ticket_id.to_string())];
        self.get(BAGGAGE_PATH, &query).await
    }

    /// The fee comes back computed by the server
    pub async fn add_baggage(&self, baggage: &NewBaggage) -> ApiResult<Baggage> {
        if !(baggage.weight_kg > 0.0 && baggage.weight_kg <= MAX_PIECE_WEIGHT_KG) {
            return Err(ApiError::Validation(format!(
                "Weight must be between 0 and {} kg",
                MAX_PIECE_WEIGHT_KG
            )));
        }
        log::info!(
            "🧳 [BAGGAGE] {} kg on ticket {}",
            baggage.weight_kg,
            baggage.ticket_id
        );
        self.post(BAGGAGE_PATH, baggage).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{ok, signed_in_client};

    #[tokio::test]
    async fn fee_is_taken_from_the_response() {
        let (api, _storage) = signed_in_client(vec![ok(
            r#"{"id":1,"ticketId":7,"tagNumber":"BG-001","weightKg":23.5,"fee":15.0}"#,
        )]);
        let baggage = api
            .add_baggage(&NewBaggage {
                ticket_id: 7,
                weight_kg: 23.5,
            })
            .await
            .unwrap();
        assert_eq!(baggage.fee, 15.0);
    }

    #[tokio::test]
    async fn overweight_piece_is_rejected_locally() {
        let (api, _storage) = signed_in_client(vec![]);
        let err = api
            .add_baggage(&NewBaggage {
                ticket_id: 7,
                weight_kg: 40.0,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(api.transport().requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn listing_is_scoped_to_the_ticket() {
        let (api, _storage) = signed_in_client(vec![ok("[]")]);
        assert!(api.list_baggage(7).await.unwrap().is_empty());
        assert_eq!(
            api.transport().last_request().url,
            "http://api.test/v1/baggage?ticketId=7"
        );
    }
}

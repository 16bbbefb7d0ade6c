use crate::error::ApiResult;
use crate::models::{Aircraft, NewAircraft, Page};
use crate::services::api_client::{ApiClient, CancelToken};
use crate::services::query::{FilterField, Query};
use crate::services::transport::Transport;

const AIRCRAFT_PATH: &str = "/aircraft";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AircraftField {
    Id,
    Registration,
    Model,
    Manufacturer,
    TotalSeats,
    Status,
}

impl FilterField for AircraftField {
    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Registration => "registration",
            Self::Model => "model",
            Self::Manufacturer => "manufacturer",
            Self::TotalSeats => "totalSeats",
            Self::Status => "status",
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_aircraft(
        &self,
        query: &Query<AircraftField>,
        cancel: &CancelToken,
    ) -> ApiResult<Page<Aircraft>> {
        self.get_cancellable(AIRCRAFT_PATH, &query.to_pairs(), cancel)
            .await
    }

    pub async fn get_aircraft(&self, id: i64) -> ApiResult<Aircraft> {
        self.get(&format!("{}/{}", AIRCRAFT_PATH, id), &[]).await
    }

    /// The server lays out the seat map from the per-class counts
    pub async fn create_aircraft(&self, aircraft: &NewAircraft) -> ApiResult<Aircraft> {
        log::info!(
            "🛩️ [AIRCRAFT] Registering {} ({})",
            aircraft.registration,
            aircraft.model
        );
        self.post(AIRCRAFT_PATH, aircraft).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{ok, signed_in_client};

    #[tokio::test]
    async fn create_returns_the_registered_aircraft() {
        let (api, _storage) = signed_in_client(vec![ok(
            r#"{"id":2,"registration":"VN-A321","model":"A321neo","totalSeats":184}"#,
        )]);
        let aircraft = api
            .create_aircraft(&NewAircraft {
                registration: "VN-A321".to_string(),
                model: "A321neo".to_string(),
                manufacturer: None,
                economy_seats: 168,
                business_seats: 16,
            })
            .await
            .unwrap();
        assert_eq!(aircraft.total_seats, 184);
        assert_eq!(
            api.transport().last_request().body.as_deref(),
            Some(r#"{"registration":"VN-A321","model":"A321neo","economySeats":168,"businessSeats":16}"#)
        );
    }
}

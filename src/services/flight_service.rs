use chrono::NaiveDate;

use crate::error::ApiResult;
use crate::models::{Flight, FlightStatus, FlightStatusUpdate, NewFlight, Page};
use crate::services::api_client::{ApiClient, CancelToken};
use crate::services::query::{FilterField, Query, SortDirection};
use crate::services::transport::Transport;

const FLIGHTS_PATH: &str = "/flights";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightField {
    Id,
    FlightNumber,
    Origin,
    Destination,
    DepartureTime,
    ArrivalTime,
    Status,
    BasePrice,
    AvailableSeats,
}

impl FilterField for FlightField {
    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FlightNumber => "flightNumber",
            Self::Origin => "route.origin",
            Self::Destination => "route.destination",
            Self::DepartureTime => "departureTime",
            Self::ArrivalTime => "arrivalTime",
            Self::Status => "status",
            Self::BasePrice => "basePrice",
            Self::AvailableSeats => "availableSeats",
        }
    }
}

/// Passenger-facing flight search form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightSearch {
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>,
}

impl FlightSearch {
    /// Bookable flights matching the form, earliest departure first
    pub fn to_query(&self) -> Query<FlightField> {
        let mut query = Query::new()
            .contains_if(FlightField::Origin, &self.origin)
            .contains_if(FlightField::Destination, &self.destination)
            .one_of(
                FlightField::Status,
                [FlightStatus::Scheduled.as_str(), FlightStatus::Open.as_str()],
            )
            .sort_by(FlightField::DepartureTime, SortDirection::Asc);

        if let Some(date) = self.date {
            if let Some(start) = date.and_hms_opt(0, 0, 0) {
                query = query.ge(FlightField::DepartureTime, start.and_utc());
            }
            if let Some(end) = date.succ_opt().and_then(|next| next.and_hms_opt(0, 0, 0)) {
                query = query.lt(FlightField::DepartureTime, end.and_utc());
            }
        }
        query
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn search_flights(
        &self,
        query: &Query<FlightField>,
        cancel: &CancelToken,
    ) -> ApiResult<Page<Flight>> {
        self.get_cancellable(FLIGHTS_PATH, &query.to_pairs(), cancel)
            .await
    }

    pub async fn get_flight(&self, id: i64) -> ApiResult<Flight> {
        self.get(&format!("{}/{}", FLIGHTS_PATH, id), &[]).await
    }

    pub async fn create_flight(&self, flight: &NewFlight) -> ApiResult<Flight> {
        log::info!(
            "✈️ [FLIGHTS] Scheduling {} {} → {}",
            flight.flight_number,
            flight.origin,
            flight.destination
        );
        self.post(FLIGHTS_PATH, flight).await
    }

    pub async fn update_flight_status(&self, id: i64, status: FlightStatus) -> ApiResult<Flight> {
        log::info!("✈️ [FLIGHTS] Flight {} → {}", id, status.as_str());
        self.patch(
            &format!("{}/{}/status", FLIGHTS_PATH, id),
            &FlightStatusUpdate { status },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{ok, signed_in_client};
    use crate::services::transport::Method;

    const FLIGHT: &str = r#"{
        "id": 5,
        "flightNumber": "VN123",
        "route": {"origin": "HAN", "destination": "SGN"},
        "departureTime": "2026-11-02T01:00:00Z",
        "arrivalTime": "2026-11-02T03:10:00Z",
        "status": "OPEN"
    }"#;

    #[test]
    fn search_form_builds_a_day_window() {
        let search = FlightSearch {
            origin: "HAN".to_string(),
            destination: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 11, 2),
        };
        assert_eq!(
            search.to_query().filter_expression().as_deref(),
            Some(
                "route.origin=='*HAN*';status=in=('SCHEDULED','OPEN');\
                 departureTime=ge='2026-11-02T00:00:00Z';departureTime=lt='2026-11-03T00:00:00Z'"
            )
        );
    }

    #[tokio::test]
    async fn search_returns_a_page_of_flights() {
        let (api, _storage) = signed_in_client(vec![ok(&format!(
            r#"{{"content":[{}],"page":0,"size":10,"totalElements":1}}"#,
            FLIGHT
        ))]);
        let page = api
            .search_flights(&FlightSearch::default().to_query(), &CancelToken::new())
            .await
            .unwrap();
        assert_eq!(page.content[0].flight_number, "VN123");
        assert_eq!(page.content[0].duration_label(), "2h 10m");
    }

    #[tokio::test]
    async fn status_change_patches_status_resource() {
        let (api, _storage) = signed_in_client(vec![ok(FLIGHT)]);
        api.update_flight_status(5, FlightStatus::Open).await.unwrap();
        let request = api.transport().last_request();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.url, "http://api.test/v1/flights/5/status");
        assert_eq!(request.body.as_deref(), Some(r#"{"status":"OPEN"}"#));
    }
}

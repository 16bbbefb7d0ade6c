use crate::error::ApiResult;
use crate::models::{Seat, SeatClass};
use crate::services::api_client::ApiClient;
use crate::services::transport::Transport;

fn seats_path(flight_id: i64) -> String {
    format!("/flights/{}/seats", flight_id)
}

impl<T: Transport> ApiClient<T> {
    /// Full seat map of a flight
    pub async fn list_seats(&self, flight_id: i64) -> ApiResult<Vec<Seat>> {
        self.get(&seats_path(flight_id), &[]).await
    }

    /// Free seats, optionally narrowed to one cabin class
    pub async fn available_seats(&self, flight_id: i64, class: Option<SeatClass>) -> ApiResult<Vec<Seat>> {
        let query: Vec<(String, String)> = class
            .map(|class| vec![("seatClass".to_string(), class.as_str().to_string())])
            .unwrap_or_default();
        let seats: Vec<Seat> = self
            .get(&format!("{}/available", seats_path(flight_id)), &query)
            .await?;
        Ok(seats.into_iter().filter(|seat| seat.available).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{ok, signed_in_client};

    #[tokio::test]
    async fn available_seats_drop_taken_ones() {
        let (api, _storage) = signed_in_client(vec![ok(
            r#"[
                {"id":1,"flightId":5,"seatNumber":"1A","seatClass":"BUSINESS","available":true},
                {"id":2,"flightId":5,"seatNumber":"1B","seatClass":"BUSINESS","available":false}
            ]"#,
        )]);
        let seats = api
            .available_seats(5, Some(SeatClass::Business))
            .await
            .unwrap();
        assert_eq!(seats.len(), 1);
        assert_eq!(seats[0].seat_number, "1A");
        assert_eq!(
            api.transport().last_request().url,
            "http://api.test/v1/flights/5/seats/available?seatClass=BUSINESS"
        );
    }
}

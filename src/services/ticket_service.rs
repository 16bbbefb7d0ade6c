use crate::error::ApiResult;
use crate::models::{BookingRequest, Page, PaymentRequest, Ticket};
use crate::services::api_client::{ApiClient, CancelToken};
use crate::services::query::{FilterField, Query};
use crate::services::transport::Transport;

const TICKETS_PATH: &str = "/tickets";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketField {
    Id,
    TicketCode,
    FlightId,
    FlightNumber,
    PassengerId,
    PassengerName,
    SeatClass,
    Status,
    BookedAt,
}

impl FilterField for TicketField {
    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::TicketCode => "ticketCode",
            Self::FlightId => "flight.id",
            Self::FlightNumber => "flight.flightNumber",
            Self::PassengerId => "passenger.id",
            Self::PassengerName => "passenger.fullName",
            Self::SeatClass => "seatClass",
            Self::Status => "status",
            Self::BookedAt => "bookedAt",
        }
    }
}

impl<T: Transport> ApiClient<T> {
    /// Every ticket (staff / admin)
    pub async fn list_tickets(
        &self,
        query: &Query<TicketField>,
        cancel: &CancelToken,
    ) -> ApiResult<Page<Ticket>> {
        self.get_cancellable(TICKETS_PATH, &query.to_pairs(), cancel)
            .await
    }

    /// Tickets of the signed-in passenger
    pub async fn my_tickets(
        &self,
        query: &Query<TicketField>,
        cancel: &CancelToken,
    ) -> ApiResult<Page<Ticket>> {
        self.get_cancellable(&format!("{}/my", TICKETS_PATH), &query.to_pairs(), cancel)
            .await
    }

    pub async fn book_ticket(&self, request: &BookingRequest) -> ApiResult<Ticket> {
        log::info!(
            "🎫 [TICKETS] Booking flight {} ({})",
            request.flight_id,
            request.seat_class.as_str()
        );
        self.post(TICKETS_PATH, request).await
    }

    pub async fn pay_ticket(&self, id: i64, request: &PaymentRequest) -> ApiResult<Ticket> {
        log::info!("💳 [TICKETS] Paying ticket {} by {}", id, request.method);
        self.post(&format!("{}/{}/pay", TICKETS_PATH, id), request)
            .await
    }

    pub async fn check_in(&self, id: i64) -> ApiResult<Ticket> {
        log::info!("🛂 [TICKETS] Checking in ticket {}", id);
        self.post(&format!("{}/{}/check-in", TICKETS_PATH, id), &serde_json::json!({}))
            .await
    }

    pub async fn cancel_ticket(&self, id: i64) -> ApiResult<Ticket> {
        log::info!("🚫 [TICKETS] Cancelling ticket {}", id);
        self.post(&format!("{}/{}/cancel", TICKETS_PATH, id), &serde_json::json!({}))
            .await
    }
}

use crate::error::ApiResult;
use crate::models::{AssignCrewRequest, Assignment, Page};
use crate::services::api_client::{ApiClient, CancelToken};
use crate::services::query::{FilterField, Query};
use crate::services::transport::Transport;

const ASSIGNMENTS_PATH: &str = "/assignments";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentField {
    Id,
    FlightId,
    EmployeeId,
    DepartureTime,
}

impl FilterField for AssignmentField {
    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FlightId => "flight.id",
            Self::EmployeeId => "employee.id",
            Self::DepartureTime => "flight.departureTime",
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_assignments(
        &self,
        query: &Query<AssignmentField>,
        cancel: &CancelToken,
    ) -> ApiResult<Page<Assignment>> {
        self.get_cancellable(ASSIGNMENTS_PATH, &query.to_pairs(), cancel)
            .await
    }

    /// Roster of the signed-in crew member
    pub async fn my_assignments(&self, cancel: &CancelToken) -> ApiResult<Vec<Assignment>> {
        self.get_cancellable(&format!("{}/my", ASSIGNMENTS_PATH), &[], cancel)
            .await
    }

    pub async fn assign_crew(&self, request: &AssignCrewRequest) -> ApiResult<Assignment> {
        log::info!(
            "🧑‍✈️ [ASSIGNMENTS] Employee {} → flight {}",
            request.employee_id,
            request.flight_id
        );
        self.post(ASSIGNMENTS_PATH, request).await
    }

    pub async fn remove_assignment(&self, id: i64) -> ApiResult<()> {
        log::info!("🧑‍✈️ [ASSIGNMENTS] Removing assignment {}", id);
        self.delete(&format!("{}/{}", ASSIGNMENTS_PATH, id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{ok, signed_in_client};
    use crate::services::transport::Method;

    #[tokio::test]
    async fn roster_carries_block_times() {
        let (api, _storage) = signed_in_client(vec![ok(
            r#"[{"id":1,"flightId":5,"employeeId":4,"role":"PILOT",
                 "departureTime":"2026-11-02T01:00:00Z","arrivalTime":"2026-11-02T03:30:00Z"}]"#,
        )]);
        let roster = api.my_assignments(&CancelToken::new()).await.unwrap();
        assert_eq!(roster[0].block_hours(), Some(2.5));
        assert_eq!(
            api.transport().last_request().url,
            "http://api.test/v1/assignments/my"
        );
    }

    #[tokio::test]
    async fn assign_and_remove() {
        let (api, _storage) = signed_in_client(vec![
            ok(r#"{"id":11,"flightId":5,"employeeId":4}"#),
            ok("null"),
        ]);
        let assignment = api
            .assign_crew(&AssignCrewRequest {
                flight_id: 5,
                employee_id: 4,
            })
            .await
            .unwrap();
        api.remove_assignment(assignment.id).await.unwrap();

        let request = api.transport().last_request();
        assert_eq!(request.method, Method::Delete);
        assert_eq!(request.url, "http://api.test/v1/assignments/11");
    }
}

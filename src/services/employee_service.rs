use crate::error::ApiResult;
use crate::models::{Employee, EmployeeRequest, Page};
use crate::services::api_client::{ApiClient, CancelToken};
use crate::services::query::{FilterField, Query};
use crate::services::transport::Transport;

const EMPLOYEES_PATH: &str = "/employees";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Id,
    EmployeeCode,
    FullName,
    Position,
    FlightHours,
}

impl FilterField for EmployeeField {
    fn name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::EmployeeCode => "employeeCode",
            Self::FullName => "fullName",
            Self::Position => "position",
            Self::FlightHours => "flightHours",
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_employees(
        &self,
        query: &Query<EmployeeField>,
        cancel: &CancelToken,
    ) -> ApiResult<Page<Employee>> {
        self.get_cancellable(EMPLOYEES_PATH, &query.to_pairs(), cancel)
            .await
    }

    pub async fn get_employee(&self, id: i64) -> ApiResult<Employee> {
        self.get(&format!("{}/{}", EMPLOYEES_PATH, id), &[]).await
    }

    pub async fn create_employee(&self, request: &EmployeeRequest) -> ApiResult<Employee> {
        log::info!("🧑‍✈️ [EMPLOYEES] Creating {} ({})", request.full_name, request.position);
        self.post(EMPLOYEES_PATH, request).await
    }

    pub async fn update_employee(&self, id: i64, request: &EmployeeRequest) -> ApiResult<Employee> {
        self.put(&format!("{}/{}", EMPLOYEES_PATH, id), request)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use crate::services::testing::{ok, signed_in_client};
    use crate::services::transport::Method;

    #[tokio::test]
    async fn filter_by_position_and_name() {
        let (api, _storage) = signed_in_client(vec![ok(r#"{"content":[],"totalElements":0}"#)]);
        let query = Query::new()
            .eq(EmployeeField::Position, Position::Pilot.as_str())
            .contains_if(EmployeeField::FullName, " tran ");

        let page = api.list_employees(&query, &CancelToken::new()).await.unwrap();
        assert!(page.is_empty());
        assert_eq!(
            query.filter_expression().as_deref(),
            Some("position=='PILOT';fullName=='*tran*'")
        );
    }

    #[tokio::test]
    async fn update_puts_the_whole_record() {
        let (api, _storage) = signed_in_client(vec![ok(
            r#"{"id":4,"fullName":"Tran Van B","position":"CO_PILOT"}"#,
        )]);
        let employee = api
            .update_employee(
                4,
                &EmployeeRequest {
                    user_id: 12,
                    full_name: "Tran Van B".to_string(),
                    position: Position::CoPilot,
                    employee_code: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(employee.position, Position::CoPilot);

        let request = api.transport().last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, "http://api.test/v1/employees/4");
    }
}

pub mod transport;
pub mod auth_events;
pub mod query;
pub mod api_client;

// Resource endpoints, each an `impl ApiClient` block
pub mod auth_service;
pub mod user_service;
pub mod employee_service;
pub mod passenger_service;
pub mod flight_service;
pub mod ticket_service;
pub mod aircraft_service;
pub mod seat_service;
pub mod baggage_service;
pub mod assignment_service;
pub mod statistics_service;

#[cfg(test)]
pub(crate) mod testing;

pub use transport::{HttpRequest, HttpResponse, Method, Transport};
#[cfg(target_arch = "wasm32")]
pub use transport::FetchTransport;
pub use auth_events::{AuthEvent, AuthEvents};
pub use query::{FilterField, FilterValue, Operator, Query, SortDirection};
pub use api_client::{ApiClient, CancelToken};

pub use user_service::UserField;
pub use employee_service::EmployeeField;
pub use passenger_service::PassengerField;
pub use flight_service::{FlightField, FlightSearch};
pub use ticket_service::TicketField;
pub use aircraft_service::AircraftField;
pub use assignment_service::AssignmentField;

pub mod envelope;
pub mod auth;
pub mod user;
pub mod employee;
pub mod passenger;
pub mod flight;
pub mod ticket;
pub mod seat;
pub mod aircraft;
pub mod baggage;
pub mod assignment;
pub mod statistics;

pub use envelope::{ApiEnvelope, Page};
pub use auth::{AuthPayload, LoginRequest, RegisterRequest};
pub use user::{UpdateRoleRequest, User, UserRole};
pub use employee::{Employee, EmployeeRequest, Position};
pub use passenger::{Passenger, UpdatePassengerRequest};
pub use flight::{Flight, FlightStatus, FlightStatusUpdate, NewFlight, Route};
pub use ticket::{BookingRequest, PaymentRequest, Ticket, TicketStatus};
pub use seat::{Seat, SeatClass};
pub use aircraft::{Aircraft, NewAircraft};
pub use baggage::{Baggage, NewBaggage};
pub use assignment::{AssignCrewRequest, Assignment};
pub use statistics::{MonthlyRevenue, StatisticsOverview};

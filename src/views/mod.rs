pub mod admin_dashboard;
pub mod app;
pub mod crew_dashboard;
pub mod login;
pub mod passenger_dashboard;
pub mod register;
pub mod shared;
pub mod splash;
pub mod staff_dashboard;
pub mod unknown_role;

pub use admin_dashboard::render_admin_dashboard;
pub use app::render_app;
pub use crew_dashboard::render_crew_dashboard;
pub use login::render_login;
pub use passenger_dashboard::render_passenger_dashboard;
pub use register::render_register;
pub use splash::render_splash;
pub use staff_dashboard::render_staff_dashboard;
pub use unknown_role::render_unknown_role;

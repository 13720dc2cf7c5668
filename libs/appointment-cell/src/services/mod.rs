pub mod booking;
pub mod calendar;
pub mod dashboard;

pub use booking::{BookingService, SESSION_TTL_MINUTES};
pub use calendar::CalendarService;
pub use dashboard::DashboardService;

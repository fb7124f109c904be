pub mod appointments;
pub mod booking;
pub mod reschedule;
pub mod validation;

pub use appointments::AppointmentBook;
pub use booking::{load_booking_catalog, BookingFlow};
pub use reschedule::RescheduleFlow;

pub mod models;
pub mod services;

pub use models::*;
pub use services::*;

pub use services::validation::can_advance_from_date_time;

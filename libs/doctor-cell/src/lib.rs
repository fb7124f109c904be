pub mod models;
pub mod services;

// Re-export all models and services for external use
pub use models::*;
pub use services::*;

pub use services::availability::{generate_date_options, local_today, standard_time_slots};
pub use services::search::filter_doctors;

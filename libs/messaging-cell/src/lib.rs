pub mod models;
pub mod services;

pub use models::*;
pub use services::*;

pub use services::chat::{format_time, local_now};
pub use services::contacts::partition_contacts;

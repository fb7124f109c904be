pub mod availability;
pub mod catalog;
pub mod doctor;
pub mod reviews;
pub mod search;

pub use catalog::{CatalogProvider, MockCatalog};
pub use doctor::DoctorService;

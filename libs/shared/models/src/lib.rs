pub mod auth;
pub mod error;
pub mod navigation;

pub use auth::{User, UserRole};
pub use error::AppError;
pub use navigation::{NavigationHost, NavigationStack, Route};

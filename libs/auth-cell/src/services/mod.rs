pub mod identity;
pub mod registration;

pub use identity::{route_guard, IdentityService, USER_STORE_KEY};
pub use registration::RegistrationWizard;

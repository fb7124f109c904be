use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::{User, UserRole};

pub struct TestConfig {
    pub booking_horizon_days: u32,
    pub availability_seed: Option<u64>,
    pub unavailable_date_ratio: f64,
    pub identity_store_path: Option<PathBuf>,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            booking_horizon_days: 7,
            availability_seed: Some(42),
            unavailable_date_ratio: 0.2,
            identity_store_path: None,
        }
    }
}

impl TestConfig {
    pub fn with_store_path(path: impl Into<PathBuf>) -> Self {
        Self {
            identity_store_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            booking_horizon_days: self.booking_horizon_days,
            availability_seed: self.availability_seed,
            unavailable_date_ratio: self.unavailable_date_ratio,
            identity_store_path: self.identity_store_path.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl Default for TestUser {
    fn default() -> Self {
        Self::patient("test@example.com")
    }
}

impl TestUser {
    pub fn new(email: &str, role: UserRole) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email: email.to_string(),
            role,
        }
    }

    pub fn doctor(email: &str) -> Self {
        Self::new(email, UserRole::Doctor)
    }

    pub fn patient(email: &str) -> Self {
        Self::new(email, UserRole::Patient)
    }

    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }

    /// The JSON blob the identity provider caches under the `user` key.
    pub fn cached_json(&self) -> String {
        json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "userType": self.role.as_str(),
        })
        .to_string()
    }
}

/// A Monday, so weekday labels in tests are predictable.
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn test_config_creation() {
        let config = TestConfig::default();
        let app_config = config.to_app_config();

        assert_eq!(app_config.booking_horizon_days, 7);
        assert_eq!(app_config.availability_seed, Some(42));
        assert!(!app_config.is_persistent_identity());
    }

    #[test]
    fn test_user_creation() {
        let user = TestUser::doctor("doc@example.com");
        assert_eq!(user.name, "doc");
        assert_eq!(user.role, UserRole::Doctor);

        let user_model = user.to_user();
        assert_eq!(user_model.email, user.email);
        assert_eq!(user_model.id, user.id);
        assert!(user_model.is_doctor());
    }

    #[test]
    fn cached_json_matches_user_shape() {
        let user = TestUser::patient("amy@example.com");
        let decoded: User = serde_json::from_str(&user.cached_json()).unwrap();
        assert_eq!(decoded, user.to_user());
    }

    #[test]
    fn fixed_today_is_a_monday() {
        assert_eq!(fixed_today().weekday(), Weekday::Mon);
    }
}

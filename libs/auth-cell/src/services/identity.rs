use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::auth::{User, UserRole};
use shared_models::navigation::{NavigationHost, Route};
use shared_storage::{build_store, KeyValueStore};

use crate::models::{AuthError, LoginForm, RegistrationRequest};

pub const USER_STORE_KEY: &str = "user";

/// Where a screen should be sent given the sign-in state, if anywhere.
pub fn route_guard(user: Option<&User>, in_auth_group: bool) -> Option<Route> {
    match (user, in_auth_group) {
        (None, false) => Some(Route::Welcome),
        (Some(_), true) => Some(Route::Home),
        _ => None,
    }
}

/// Mock identity provider. Accepts any credentials and caches the user locally.
pub struct IdentityService {
    store: Arc<dyn KeyValueStore>,
    current: RwLock<Option<User>>,
}

impl IdentityService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            current: RwLock::new(None),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(build_store(config))
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    pub async fn role(&self) -> Option<UserRole> {
        self.current.read().await.as_ref().map(|user| user.role)
    }

    pub async fn signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Reloads the cached user on start-up. Unreadable entries count as signed out.
    #[instrument(skip(self))]
    pub async fn restore(&self) -> Option<User> {
        let cached = match self.store.get(USER_STORE_KEY).await {
            Ok(cached) => cached,
            Err(e) => {
                error!("Failed to read cached user: {}", e);
                None
            }
        };

        let user = cached.and_then(|json| match serde_json::from_str::<User>(&json) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding unreadable cached user: {}", e);
                None
            }
        });

        debug!("Restored session: signed_in={}", user.is_some());
        *self.current.write().await = user.clone();
        user
    }

    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn login(&self, form: &LoginForm) -> Result<User, AuthError> {
        form.validate()?;

        let role = if form.email.contains("doctor") {
            UserRole::Doctor
        } else {
            UserRole::Patient
        };
        let user = User {
            id: "123".to_string(),
            name: email_local_part(&form.email).to_string(),
            email: form.email.clone(),
            role,
        };

        self.persist(&user).await.map_err(|e| {
            error!("Login failed: {}", e);
            AuthError::InvalidCredentials
        })?;

        info!("User {} signed in as {}", user.email, user.role);
        *self.current.write().await = Some(user.clone());
        Ok(user)
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegistrationRequest) -> Result<User, AuthError> {
        let user = User {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
            role: request.role,
        };

        self.persist(&user).await.map_err(|e| {
            error!("Registration failed: {}", e);
            AuthError::RegistrationFailed
        })?;

        info!("Registered new {} account {}", user.role, user.email);
        *self.current.write().await = Some(user.clone());
        Ok(user)
    }

    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store
            .remove(USER_STORE_KEY)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))?;

        *self.current.write().await = None;
        info!("User signed out");
        Ok(())
    }

    /// Replaces the current screen when the sign-in state does not allow it.
    pub async fn enforce_route(&self, in_auth_group: bool, nav: &mut impl NavigationHost) {
        let user = self.current_user().await;
        if let Some(route) = route_guard(user.as_ref(), in_auth_group) {
            debug!("Redirecting to {}", route);
            nav.replace(route);
        }
    }

    async fn persist(&self, user: &User) -> Result<(), AuthError> {
        let json = serde_json::to_string(user).map_err(|e| AuthError::Storage(e.to_string()))?;
        self.store
            .set(USER_STORE_KEY, &json)
            .await
            .map_err(|e| AuthError::Storage(e.to_string()))
    }
}

fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_storage::MemoryStore;

    #[test]
    fn guard_redirects() {
        let user = User {
            id: "1".to_string(),
            name: "a".to_string(),
            email: "a@b.c".to_string(),
            role: UserRole::Patient,
        };

        assert_eq!(route_guard(None, false), Some(Route::Welcome));
        assert_eq!(route_guard(None, true), None);
        assert_eq!(route_guard(Some(&user), true), Some(Route::Home));
        assert_eq!(route_guard(Some(&user), false), None);
    }

    #[test]
    fn local_part_without_at_sign() {
        assert_eq!(email_local_part("jane@example.com"), "jane");
        assert_eq!(email_local_part("jane"), "jane");
    }

    #[tokio::test]
    async fn login_derives_role_from_email() {
        let service = IdentityService::new(Arc::new(MemoryStore::new()));

        let doctor = service
            .login(&LoginForm::new("doctor.kim@clinic.com", "pw"))
            .await
            .unwrap();
        assert_eq!(doctor.id, "123");
        assert_eq!(doctor.name, "doctor.kim");
        assert_eq!(doctor.role, UserRole::Doctor);
        assert_eq!(service.role().await, Some(UserRole::Doctor));
    }
}

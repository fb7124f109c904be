use serde::{Deserialize, Serialize};

use shared_models::auth::UserRole;
use shared_models::error::AppError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(())
    }
}

/// Fields shared by both registration forms, collected on the first step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountDetails {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AccountDetails {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.password.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRegistration {
    pub account: AccountDetails,
    pub profile_image: Option<String>,
    pub medical_report: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorRegistration {
    pub account: AccountDetails,
    pub specialization: String,
    pub experience: String,
    pub profile_image: Option<String>,
    pub license_image: Option<String>,
}

/// A registration form the two-step wizard can drive.
pub trait RegistrationForm {
    const ROLE: UserRole;

    fn account(&self) -> &AccountDetails;

    /// Checks run when the second step is submitted.
    fn check_details(&self) -> Result<(), AuthError>;
}

impl RegistrationForm for PatientRegistration {
    const ROLE: UserRole = UserRole::Patient;

    fn account(&self) -> &AccountDetails {
        &self.account
    }

    fn check_details(&self) -> Result<(), AuthError> {
        Ok(())
    }
}

impl RegistrationForm for DoctorRegistration {
    const ROLE: UserRole = UserRole::Doctor;

    fn account(&self) -> &AccountDetails {
        &self.account
    }

    fn check_details(&self) -> Result<(), AuthError> {
        if self.specialization.is_empty() || self.experience.is_empty() || self.license_image.is_none() {
            return Err(AuthError::MissingLicense);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RegistrationStep {
    #[default]
    Account,
    Details,
}

impl RegistrationStep {
    pub fn number(&self) -> u8 {
        match self {
            RegistrationStep::Account => 1,
            RegistrationStep::Details => 2,
        }
    }
}

/// What a finished wizard hands to the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Please fill in all required fields")]
    MissingRequiredFields,

    #[error("Please fill in all required fields and upload your medical license")]
    MissingLicense,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Registration failed. Please try again.")]
    RegistrationFailed,

    #[error("Identity store error: {0}")]
    Storage(String),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFields
            | AuthError::MissingRequiredFields
            | AuthError::MissingLicense => AppError::ValidationError(err.to_string()),
            AuthError::InvalidCredentials | AuthError::RegistrationFailed => {
                AppError::Auth(err.to_string())
            }
            AuthError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn login_form_requires_both_fields() {
        assert_matches!(LoginForm::new("", "secret").validate(), Err(AuthError::MissingFields));
        assert_matches!(LoginForm::new("a@b.c", "").validate(), Err(AuthError::MissingFields));
        assert!(LoginForm::new("a@b.c", "secret").validate().is_ok());
    }

    #[test]
    fn doctor_details_need_license() {
        let mut form = DoctorRegistration {
            specialization: "Cardiology".to_string(),
            experience: "8".to_string(),
            ..Default::default()
        };
        assert_matches!(form.check_details(), Err(AuthError::MissingLicense));

        form.license_image = Some("license.jpg".to_string());
        assert!(form.check_details().is_ok());
    }

    #[test]
    fn validation_errors_surface_verbatim() {
        let app_error: AppError = AuthError::MissingRequiredFields.into();
        assert_eq!(app_error.user_message(), "Please fill in all required fields");
    }
}

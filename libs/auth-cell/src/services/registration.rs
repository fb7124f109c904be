use tracing::debug;

use shared_models::navigation::NavigationHost;

use crate::models::{AuthError, RegistrationForm, RegistrationRequest, RegistrationStep};

/// Two-step sign-up: account fields first, role-specific details second.
///
/// The last rejection stays in `error()` until the next successful step, which is
/// what the form shows inline.
#[derive(Debug, Clone, Default)]
pub struct RegistrationWizard<F> {
    form: F,
    step: RegistrationStep,
    error: Option<AuthError>,
}

impl<F: RegistrationForm> RegistrationWizard<F> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            step: RegistrationStep::Account,
            error: None,
        }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn step(&self) -> RegistrationStep {
        self.step
    }

    pub fn error(&self) -> Option<&AuthError> {
        self.error.as_ref()
    }

    fn record<T>(&mut self, result: Result<T, AuthError>) -> Result<T, AuthError> {
        match &result {
            Ok(_) => self.error = None,
            Err(err) => self.error = Some(err.clone()),
        }
        result
    }

    fn check_account(&self) -> Result<(), AuthError> {
        if self.form.account().is_complete() {
            Ok(())
        } else {
            Err(AuthError::MissingRequiredFields)
        }
    }

    pub fn next(&mut self) -> Result<(), AuthError> {
        let result = self.check_account();
        if result.is_ok() {
            self.step = RegistrationStep::Details;
            debug!("{} registration moved to details", F::ROLE);
        }
        self.record(result)
    }

    /// Returns to the account step, or leaves the screen from it.
    pub fn back(&mut self, nav: &mut impl NavigationHost) {
        match self.step {
            RegistrationStep::Details => self.step = RegistrationStep::Account,
            RegistrationStep::Account => nav.back(),
        }
    }

    pub fn submit(&mut self) -> Result<RegistrationRequest, AuthError> {
        let result = self
            .check_account()
            .and_then(|_| self.form.check_details())
            .map(|_| {
                let account = self.form.account();
                RegistrationRequest {
                    name: account.name.clone(),
                    email: account.email.clone(),
                    role: F::ROLE,
                }
            });
        self.record(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountDetails, DoctorRegistration, PatientRegistration};
    use assert_matches::assert_matches;
    use shared_models::auth::UserRole;
    use shared_models::navigation::{NavigationStack, Route};

    fn account() -> AccountDetails {
        AccountDetails {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn next_requires_account_fields() {
        let mut wizard = RegistrationWizard::new(PatientRegistration::default());

        assert_matches!(wizard.next(), Err(AuthError::MissingRequiredFields));
        assert_eq!(wizard.step(), RegistrationStep::Account);
        assert_eq!(wizard.error(), Some(&AuthError::MissingRequiredFields));

        wizard.form_mut().account = account();
        assert!(wizard.next().is_ok());
        assert_eq!(wizard.step().number(), 2);
        assert!(wizard.error().is_none());
    }

    #[test]
    fn patient_submit_builds_request() {
        let mut wizard = RegistrationWizard::new(PatientRegistration {
            account: account(),
            ..Default::default()
        });
        wizard.next().unwrap();

        let request = wizard.submit().unwrap();
        assert_eq!(request.role, UserRole::Patient);
        assert_eq!(request.name, "Jane Doe");
    }

    #[test]
    fn doctor_submit_requires_license() {
        let mut wizard = RegistrationWizard::new(DoctorRegistration {
            account: account(),
            specialization: "Cardiology".to_string(),
            experience: "8".to_string(),
            ..Default::default()
        });
        wizard.next().unwrap();

        assert_matches!(wizard.submit(), Err(AuthError::MissingLicense));

        wizard.form_mut().license_image = Some("file://license.png".to_string());
        assert_eq!(wizard.submit().unwrap().role, UserRole::Doctor);
    }

    #[test]
    fn back_from_first_step_leaves_screen() {
        let mut nav = NavigationStack::new(Route::Welcome);
        nav.push(Route::Home);
        let mut wizard = RegistrationWizard::new(PatientRegistration {
            account: account(),
            ..Default::default()
        });
        wizard.next().unwrap();

        wizard.back(&mut nav);
        assert_eq!(wizard.step(), RegistrationStep::Account);
        assert_eq!(nav.depth(), 2);

        wizard.back(&mut nav);
        assert_eq!(nav.current(), Some(&Route::Welcome));
    }
}

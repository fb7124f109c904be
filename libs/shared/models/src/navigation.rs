use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Symbolic screen names understood by the navigation host.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "route", rename_all = "kebab-case")]
pub enum Route {
    Welcome,
    Home,
    Appointments,
    BookAppointment,
    RescheduleAppointment { id: String },
    Doctors { specialty: Option<u32> },
    DoctorDetails { id: String },
    Specialties,
    Reviews,
    Messages,
    NewMessage,
    Chat { id: String },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Welcome => "welcome",
            Route::Home => "",
            Route::Appointments => "appointments",
            Route::BookAppointment => "book-appointment",
            Route::RescheduleAppointment { .. } => "reschedule-appointment",
            Route::Doctors { .. } => "doctors",
            Route::DoctorDetails { .. } => "doctor-details",
            Route::Specialties => "specialties",
            Route::Reviews => "reviews",
            Route::Messages => "messages",
            Route::NewMessage => "new-message",
            Route::Chat { .. } => "chat",
        }
    }

    pub fn params(&self) -> Vec<(&'static str, String)> {
        match self {
            Route::RescheduleAppointment { id }
            | Route::DoctorDetails { id }
            | Route::Chat { id } => vec![("id", id.clone())],
            Route::Doctors { specialty: Some(specialty) } => {
                vec![("specialty", specialty.to_string())]
            }
            _ => Vec::new(),
        }
    }

    /// Path form, e.g. `/reschedule-appointment?id=1`.
    pub fn path(&self) -> String {
        let query = self
            .params()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join("&");

        if query.is_empty() {
            format!("/{}", self.name())
        } else {
            format!("/{}?{}", self.name(), query)
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Screen transitions requested by flows. The host owns the stack; flows only ask.
pub trait NavigationHost {
    fn push(&mut self, route: Route);
    fn replace(&mut self, route: Route);
    fn back(&mut self);
}

/// In-memory navigation stack. Also the reference host used in tests.
#[derive(Debug, Clone, Default)]
pub struct NavigationStack {
    stack: Vec<Route>,
}

impl NavigationStack {
    pub fn new(initial: Route) -> Self {
        Self {
            stack: vec![initial],
        }
    }

    pub fn current(&self) -> Option<&Route> {
        self.stack.last()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn history(&self) -> &[Route] {
        &self.stack
    }
}

impl NavigationHost for NavigationStack {
    fn push(&mut self, route: Route) {
        debug!("Navigating to {}", route);
        self.stack.push(route);
    }

    fn replace(&mut self, route: Route) {
        debug!("Replacing current screen with {}", route);
        self.stack.pop();
        self.stack.push(route);
    }

    fn back(&mut self) {
        if let Some(route) = self.stack.pop() {
            debug!("Leaving {}", route);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_paths_carry_query_parameters() {
        let route = Route::RescheduleAppointment { id: "1".to_string() };
        assert_eq!(route.path(), "/reschedule-appointment?id=1");
        assert_eq!(Route::Doctors { specialty: Some(4) }.path(), "/doctors?specialty=4");
        assert_eq!(Route::Doctors { specialty: None }.path(), "/doctors");
        assert_eq!(Route::Home.path(), "/");
    }

    #[test]
    fn stack_push_replace_back() {
        let mut nav = NavigationStack::new(Route::Home);
        nav.push(Route::BookAppointment);
        assert_eq!(nav.current(), Some(&Route::BookAppointment));

        nav.replace(Route::Appointments);
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.current(), Some(&Route::Appointments));

        nav.back();
        assert_eq!(nav.current(), Some(&Route::Home));
    }
}

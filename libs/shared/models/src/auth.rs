use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Patient,
    Doctor,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Patient => "patient",
            UserRole::Doctor => "doctor",
        }
    }

    /// The role on the other side of a consultation.
    pub fn counterpart(&self) -> UserRole {
        match self {
            UserRole::Patient => UserRole::Doctor,
            UserRole::Doctor => UserRole::Patient,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Signed-in identity as cached by the local store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "userType")]
    pub role: UserRole,
}

impl User {
    pub fn is_doctor(&self) -> bool {
        self.role == UserRole::Doctor
    }
}

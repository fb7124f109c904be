use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use shared_models::auth::UserRole;
use shared_models::error::AppError;

/// The person on the other end of a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub name: String,
    /// Specialty for doctors, "Patient" for patients.
    pub role: String,
    pub kind: UserRole,
    pub image: Option<String>,
    pub is_online: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagePreview {
    pub text: String,
    pub time: String,
    pub unread: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Conversation {
    pub id: String,
    pub person: Participant,
    #[serde(rename = "lastMessage")]
    pub last_message: MessagePreview,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: Option<String>,
    #[serde(rename = "lastContactDate")]
    pub last_contact: Option<DateTime<Utc>>,
}

/// Contacts split for the "new message" screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactSections {
    /// Most recent first.
    pub recent: Vec<Contact>,
    pub other: Vec<Contact>,
}

impl ContactSections {
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty() && self.other.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

/// Messages sharing one calendar day, headed by a separator label.
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup {
    pub date: NaiveDate,
    /// e.g. "Monday, June 3"
    pub label: String,
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MessagingError {
    #[error("Conversation {0} not found")]
    ConversationNotFound(String),
}

impl From<MessagingError> for AppError {
    fn from(err: MessagingError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

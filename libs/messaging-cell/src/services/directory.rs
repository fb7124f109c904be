use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, warn};

use shared_models::auth::UserRole;
use shared_models::navigation::{NavigationHost, Route};

use crate::models::{Contact, ContactSections, Conversation, Message, MessagePreview, MessagingError, Participant};
use crate::services::contacts::partition_contacts;
use crate::services::conversations::filter_conversations;

/// A chat thread: who is on the other side and what has been said.
#[derive(Debug, Clone, PartialEq)]
pub struct Thread {
    pub contact: Participant,
    pub messages: Vec<Message>,
}

/// In-memory messaging fixtures. Timestamps are laid out relative to `now`.
#[derive(Debug, Clone, Default)]
pub struct MessageDirectory {
    conversations: Vec<Conversation>,
    doctor_contacts: Vec<Contact>,
    patient_contacts: Vec<Contact>,
    threads: HashMap<String, Thread>,
}

impl MessageDirectory {
    pub fn new(
        conversations: Vec<Conversation>,
        doctor_contacts: Vec<Contact>,
        patient_contacts: Vec<Contact>,
    ) -> Self {
        Self {
            conversations,
            doctor_contacts,
            patient_contacts,
            threads: HashMap::new(),
        }
    }

    pub fn with_thread(mut self, id: &str, thread: Thread) -> Self {
        self.threads.insert(id.to_string(), thread);
        self
    }

    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut directory = Self::new(seed_conversations(), seed_doctor_contacts(now), seed_patient_contacts(now));
        directory.threads = seed_threads(now);
        directory
    }

    pub fn conversations(&self, viewer: UserRole, query: &str) -> Vec<&Conversation> {
        filter_conversations(&self.conversations, viewer, query)
    }

    /// Contacts offered to start a conversation with: doctors for patients, patients for doctors.
    pub fn contacts(&self, viewer: UserRole, query: &str) -> ContactSections {
        let pool = match viewer {
            UserRole::Patient => &self.doctor_contacts,
            UserRole::Doctor => &self.patient_contacts,
        };
        partition_contacts(pool, query)
    }

    pub fn thread(&self, id: &str) -> Result<&Thread, MessagingError> {
        self.threads.get(id).ok_or_else(|| {
            warn!("No chat thread for conversation {}", id);
            MessagingError::ConversationNotFound(id.to_string())
        })
    }

    pub fn open_conversation(&self, id: &str, nav: &mut impl NavigationHost) {
        debug!("Opening conversation {}", id);
        nav.push(Route::Chat { id: id.to_string() });
    }

    pub fn start_new_message(&self, nav: &mut impl NavigationHost) {
        nav.push(Route::NewMessage);
    }

    /// Opens the chat for a contact picked on the new-message screen.
    pub fn start_conversation(&self, contact_id: &str, nav: &mut impl NavigationHost) {
        debug!("Starting conversation with contact {}", contact_id);
        nav.push(Route::Chat {
            id: contact_id.to_string(),
        });
    }
}

fn participant(name: &str, role: &str, kind: UserRole, is_online: bool) -> Participant {
    Participant {
        name: name.to_string(),
        role: role.to_string(),
        kind,
        image: None,
        is_online,
    }
}

fn conversation(id: &str, person: Participant, text: &str, time: &str, unread: u32) -> Conversation {
    Conversation {
        id: id.to_string(),
        person,
        last_message: MessagePreview {
            text: text.to_string(),
            time: time.to_string(),
            unread,
        },
    }
}

pub fn seed_conversations() -> Vec<Conversation> {
    use UserRole::{Doctor, Patient};

    vec![
        conversation(
            "1",
            participant("Dr. Sarah Johnson", "Cardiologist", Doctor, true),
            "Your prescription is ready",
            "10:30 AM",
            2,
        ),
        conversation(
            "2",
            participant("John Smith", "Patient", Patient, false),
            "Thank you, doctor!",
            "Yesterday",
            0,
        ),
        conversation(
            "3",
            participant("Dr. Mark Wilson", "Pediatrician", Doctor, true),
            "How are you feeling today?",
            "Yesterday",
            1,
        ),
        conversation(
            "4",
            participant("Emma Parker", "Patient", Patient, false),
            "I have a question about my medication",
            "Jun 10",
            0,
        ),
        conversation(
            "5",
            participant("Dr. Lisa Chen", "Dermatologist", Doctor, false),
            "Please send me a photo of the affected area",
            "Jun 8",
            0,
        ),
        conversation(
            "6",
            participant("Michael Brown", "Patient", Patient, true),
            "Is it normal to have these symptoms?",
            "Jun 5",
            0,
        ),
    ]
}

fn contact(id: &str, name: &str, role: &str, last_contact: Option<DateTime<Utc>>) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        image: None,
        last_contact,
    }
}

fn days_ago(now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
    Some(now - Duration::days(days))
}

pub fn seed_doctor_contacts(now: DateTime<Utc>) -> Vec<Contact> {
    vec![
        contact("1", "Dr. Sarah Johnson", "Cardiologist", days_ago(now, 2)),
        contact("2", "Dr. Mark Wilson", "Pediatrician", days_ago(now, 5)),
        contact("3", "Dr. Lisa Chen", "Dermatologist", days_ago(now, 10)),
        contact("4", "Dr. James Lee", "Orthopedic", days_ago(now, 15)),
        contact("5", "Dr. Michael Rodriguez", "Neurologist", None),
        contact("6", "Dr. Emily Wilson", "Ophthalmologist", None),
        contact("7", "Dr. Robert Chen", "Psychiatrist", None),
        contact("8", "Dr. Amanda Brown", "Allergist", None),
    ]
}

pub fn seed_patient_contacts(now: DateTime<Utc>) -> Vec<Contact> {
    vec![
        contact("1", "John Smith", "Patient", days_ago(now, 1)),
        contact("2", "Emma Parker", "Patient", days_ago(now, 3)),
        contact("3", "Michael Brown", "Patient", days_ago(now, 7)),
        contact("4", "Sophia Miller", "Patient", None),
        contact("5", "James Wilson", "Patient", None),
        contact("6", "Olivia Davis", "Patient", None),
    ]
}

fn message(id: &str, sender: &str, text: &str, at: DateTime<Utc>, read: bool) -> Message {
    Message {
        id: id.to_string(),
        sender_id: sender.to_string(),
        text: text.to_string(),
        timestamp: at,
        read,
    }
}

fn seed_threads(now: DateTime<Utc>) -> HashMap<String, Thread> {
    use UserRole::{Doctor, Patient};

    let hours_ago = |hours: i64| now - Duration::hours(hours);

    let cardiology = [
        ("doctor1", "Hello! How can I help you today?", 24),
        ("patient1", "Hi Dr. Johnson, I've been experiencing chest pain for the last few days.", 23),
        ("doctor1", "I'm sorry to hear that. Can you describe the pain? Is it sharp or dull?", 22),
        ("patient1", "It's a sharp pain, especially when I take deep breaths.", 21),
        ("doctor1", "Have you noticed any other symptoms like shortness of breath, fever, or cough?", 20),
        ("patient1", "Yes, I've been feeling a bit short of breath, especially when climbing stairs.", 19),
        ("doctor1", "We should schedule an appointment to examine you. Would tomorrow at 10:30 AM work for you?", 18),
        ("patient1", "Yes, that works for me. Thank you!", 17),
        ("doctor1", "In the meantime, try to rest and avoid strenuous activities.", 16),
        ("patient1", "I understand. Thank you for the advice.", 15),
    ];

    let mut first: Vec<Message> = cardiology
        .iter()
        .enumerate()
        .map(|(i, (sender, text, hours))| message(&(i + 1).to_string(), sender, text, hours_ago(*hours), true))
        .collect();
    first.push(message(
        "11",
        "doctor1",
        "Your prescription is ready. You can pick it up from the pharmacy now.",
        hours_ago(3),
        false,
    ));

    let mut threads = HashMap::new();
    threads.insert(
        "1".to_string(),
        Thread {
            contact: participant("Dr. Sarah Johnson", "Cardiologist", Doctor, true),
            messages: first,
        },
    );
    threads.insert(
        "2".to_string(),
        Thread {
            contact: participant("John Smith", "Patient", Patient, false),
            messages: vec![message("1", "patient2", "Thank you, doctor!", hours_ago(24), true)],
        },
    );
    threads.insert(
        "3".to_string(),
        Thread {
            contact: participant("Dr. Mark Wilson", "Pediatrician", Doctor, true),
            messages: vec![message("1", "doctor2", "How are you feeling today?", hours_ago(24), false)],
        },
    );
    threads
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::TimeZone;
    use shared_models::navigation::NavigationStack;

    fn directory() -> MessageDirectory {
        let now = Utc.with_ymd_and_hms(2024, 6, 12, 12, 0, 0).unwrap();
        MessageDirectory::seeded(now)
    }

    fn names(conversations: &[&Conversation]) -> Vec<String> {
        conversations.iter().map(|c| c.person.name.clone()).collect()
    }

    #[test]
    fn patients_see_doctor_conversations() {
        let directory = directory();

        let patient_view = directory.conversations(UserRole::Patient, "");
        assert_eq!(
            names(&patient_view),
            vec!["Dr. Sarah Johnson", "Dr. Mark Wilson", "Dr. Lisa Chen"]
        );

        let doctor_view = directory.conversations(UserRole::Doctor, "");
        assert_eq!(names(&doctor_view), vec!["John Smith", "Emma Parker", "Michael Brown"]);
    }

    #[test]
    fn conversation_search_by_name() {
        let directory = directory();
        let found = directory.conversations(UserRole::Patient, "WILSON");
        assert_eq!(names(&found), vec!["Dr. Mark Wilson"]);
    }

    #[test]
    fn contacts_follow_viewer_role() {
        let directory = directory();

        let for_patient = directory.contacts(UserRole::Patient, "");
        assert_eq!(for_patient.recent.len(), 4);
        assert_eq!(for_patient.other.len(), 4);
        assert_eq!(for_patient.recent[0].name, "Dr. Sarah Johnson");

        let for_doctor = directory.contacts(UserRole::Doctor, "");
        assert_eq!(for_doctor.recent[0].name, "John Smith");
        assert_eq!(for_doctor.other.len(), 3);
    }

    #[test]
    fn missing_thread_is_not_found() {
        assert_matches!(
            directory().thread("6"),
            Err(MessagingError::ConversationNotFound(id)) if id == "6"
        );
    }

    #[test]
    fn start_conversation_opens_chat() {
        let directory = directory();
        let mut nav = NavigationStack::new(Route::Messages);
        directory.start_new_message(&mut nav);

        directory.start_conversation("2", &mut nav);
        assert_eq!(
            nav.history(),
            &[Route::Messages, Route::NewMessage, Route::Chat { id: "2".to_string() }]
        );
    }
}

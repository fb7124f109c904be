use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use tracing::{debug, instrument};

use shared_models::auth::UserRole;

use crate::models::{DayGroup, Message, MessagingError, Participant};
use crate::services::directory::MessageDirectory;

pub fn local_now() -> DateTime<Local> {
    Local::now()
}

/// Bubble timestamp: "14:05" today, "Yesterday", otherwise "Jun 8". Days are taken in `now`'s zone.
pub fn format_time<Tz: TimeZone>(timestamp: DateTime<Utc>, now: &DateTime<Tz>) -> String {
    let local = timestamp.with_timezone(&now.timezone()).naive_local();
    let today = now.naive_local().date();

    if local.date() == today {
        local.format("%H:%M").to_string()
    } else if Some(local.date()) == today.checked_sub_signed(Duration::days(1)) {
        "Yesterday".to_string()
    } else {
        local.format("%b %-d").to_string()
    }
}

/// Separator above each day's messages, e.g. "Monday, June 3".
pub fn day_label(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

/// An open chat screen. Owns its copy of the thread; sends never reach the directory.
#[derive(Debug, Clone)]
pub struct ChatSession {
    conversation_id: String,
    contact: Participant,
    messages: Vec<Message>,
    viewer: UserRole,
}

impl ChatSession {
    /// Loads the thread and marks every message read.
    #[instrument(skip(directory))]
    pub fn open(
        directory: &MessageDirectory,
        conversation_id: &str,
        viewer: UserRole,
    ) -> Result<Self, MessagingError> {
        let thread = directory.thread(conversation_id)?;

        let messages: Vec<Message> = thread
            .messages
            .iter()
            .cloned()
            .map(|message| Message { read: true, ..message })
            .collect();

        debug!("Opened chat with {} messages", messages.len());

        Ok(Self {
            conversation_id: conversation_id.to_string(),
            contact: thread.contact.clone(),
            messages,
            viewer,
        })
    }

    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn contact(&self) -> &Participant {
        &self.contact
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Appends a message from the viewer. Blank input is ignored.
    pub fn send(&mut self, text: &str, now: DateTime<Utc>) -> Option<&Message> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let sender_id = match self.viewer {
            UserRole::Patient => "patient1",
            UserRole::Doctor => "doctor1",
        };

        self.messages.push(Message {
            id: (self.messages.len() + 1).to_string(),
            sender_id: sender_id.to_string(),
            text: text.to_string(),
            timestamp: now,
            read: false,
        });
        debug!("Message sent in conversation {}", self.conversation_id);

        self.messages.last()
    }

    pub fn is_mine(&self, message: &Message) -> bool {
        message.sender_id.contains(self.viewer.as_str())
    }

    /// Delivery label shown under the viewer's own messages.
    pub fn status_label(&self, message: &Message) -> Option<&'static str> {
        if !self.is_mine(message) {
            return None;
        }
        Some(if message.read { "Read" } else { "Delivered" })
    }

    /// Messages bucketed by calendar day in `tz`, oldest day first.
    pub fn group_by_day<Tz: TimeZone>(&self, tz: &Tz) -> Vec<DayGroup> {
        let mut groups: Vec<DayGroup> = Vec::new();

        for message in &self.messages {
            let date = message.timestamp.with_timezone(tz).date_naive();
            match groups.iter_mut().find(|group| group.date == date) {
                Some(group) => group.messages.push(message.clone()),
                None => groups.push(DayGroup {
                    date,
                    label: day_label(date),
                    messages: vec![message.clone()],
                }),
            }
        }

        groups.sort_by_key(|group| group.date);
        groups
    }
}

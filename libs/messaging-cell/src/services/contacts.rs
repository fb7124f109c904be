use tracing::debug;

use crate::models::{Contact, ContactSections};

/// Case-insensitive substring match over name and role. An empty query matches everything.
pub fn matches_contact(contact: &Contact, query: &str) -> bool {
    let query = query.to_lowercase();
    query.is_empty()
        || contact.name.to_lowercase().contains(&query)
        || contact.role.to_lowercase().contains(&query)
}

/// Filters by `query`, then splits into contacts with a last-contact time and those without.
pub fn partition_contacts(contacts: &[Contact], query: &str) -> ContactSections {
    let (mut recent, other): (Vec<Contact>, Vec<Contact>) = contacts
        .iter()
        .filter(|contact| matches_contact(contact, query))
        .cloned()
        .partition(|contact| contact.last_contact.is_some());

    recent.sort_by(|a, b| b.last_contact.cmp(&a.last_contact));

    debug!(
        "Contacts for {:?}: {} recent, {} other",
        query,
        recent.len(),
        other.len()
    );

    ContactSections { recent, other }
}

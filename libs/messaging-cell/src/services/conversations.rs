use shared_models::auth::UserRole;

use crate::models::Conversation;

/// Conversations a viewer can see: patients talk to doctors and doctors to patients.
pub fn visible_to(conversation: &Conversation, viewer: UserRole) -> bool {
    conversation.person.kind == viewer.counterpart()
}

/// Visible conversations whose participant name contains `query`, ignoring case.
pub fn filter_conversations<'a>(
    conversations: &'a [Conversation],
    viewer: UserRole,
    query: &str,
) -> Vec<&'a Conversation> {
    let query = query.to_lowercase();
    conversations
        .iter()
        .filter(|conversation| visible_to(conversation, viewer))
        .filter(|conversation| {
            query.is_empty() || conversation.person.name.to_lowercase().contains(&query)
        })
        .collect()
}

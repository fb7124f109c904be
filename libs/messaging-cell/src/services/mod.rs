pub mod chat;
pub mod contacts;
pub mod conversations;
pub mod directory;

pub use chat::ChatSession;
pub use directory::MessageDirectory;

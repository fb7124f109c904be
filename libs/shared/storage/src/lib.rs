pub mod store;

pub use store::{build_store, FileStore, KeyValueStore, MemoryStore};

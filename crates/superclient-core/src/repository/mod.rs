//! Repository Layer
//!
//! Persistence on top of a string key-value store (the browser's
//! `localStorage` in production, [`MemoryStore`] in tests).

mod traits;
mod memory;
mod contact_repo;
mod notification_repo;
mod session_repo;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use contact_repo::{read_contacts, ContactStore};
pub use notification_repo::{NotificationLog, NOTIFICATIONS_SEEN_KEY};
pub use session_repo::Session;

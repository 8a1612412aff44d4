//! Superclient Core
//!
//! Layered architecture:
//! - domain: entities and the derived dashboard summaries
//! - repository: key-value persistence (contacts, notifications, session)
//! - scheduler / events: injected timer and change-notification services
//! - editor: the contact edit session with auto-save
//! - api: backend endpoints, response envelopes and configuration
//!
//! Nothing in here touches the browser; the UI crate supplies the
//! `localStorage`, `setTimeout` and HTTP implementations.

pub mod api;
pub mod config;
pub mod domain;
pub mod editor;
pub mod error;
pub mod events;
pub mod repository;
pub mod scheduler;

pub use config::{ApiConfig, ContactStoreConfig, SessionConfig};
pub use editor::ContactEditor;
pub use error::{ApiError, ContactsDecodeError};
pub use events::{AppEvent, EventBus, SubscriptionId};
pub use repository::{ContactStore, KeyValueStore, MemoryStore, NotificationLog, Session};
pub use scheduler::{ManualScheduler, ScheduledTask, Scheduler};

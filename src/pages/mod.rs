//! Pages
//!
//! One component per navigation entry.

mod contacts;
mod dashboard;
mod login;
mod notifications;
mod support;

pub use contacts::ContactsPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use notifications::{unseen_badge, NotificationsPage};
pub use support::SupportPage;

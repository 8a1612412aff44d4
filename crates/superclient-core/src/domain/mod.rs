//! Domain Layer
//!
//! Entities shown on the dashboard and the pure functions that derive
//! view-model values from them. No I/O happens here.

mod entity;
mod currency;
mod pipeline;
mod finance;
mod access;
mod contact;
mod birthday;
mod color;
mod faq;

pub use entity::{Entity, remove_by_id, upsert_by_id};
pub use currency::{format_value, parse_value};
pub use pipeline::{Column, Deal, PipelineSummary, summarize_pipeline};
pub use finance::{Category, Expense, FinanceSummary, summarize_finance};
pub use access::{AccessSummary, Invite, Module, Role, PENDING_INVITE_STATUS, summarize_access};
pub use contact::{Contact, ContactListField, maps_search_url, sanitize_phone};
pub use birthday::{UpcomingBirthday, upcoming_birthdays, REMINDER_WINDOW_DAYS};
pub use color::{darken_color, CHIP_DARKEN_FACTOR};
pub use faq::{FaqItem, filter_faq};

//! UI Components
//!
//! Reusable Leptos components.

mod category_chip;
mod contact_card;
mod contact_form;
mod delete_confirm_button;
mod list_field_editor;
mod stat_card;

pub use category_chip::CategoryChip;
pub use contact_card::{ContactCard, ContactDetail};
pub use contact_form::ContactForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use list_field_editor::ListFieldEditor;
pub use stat_card::StatCard;

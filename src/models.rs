//! Frontend Models
//!
//! Data structures matching backend entities, shared with the core crate.

pub use superclient_core::domain::{
    Category, Column, Contact, ContactListField, Expense, Invite, Module, Role,
};

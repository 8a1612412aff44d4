//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each section is
//! filled by its own request and stays empty when that request fails.

use leptos::prelude::*;
use reactive_stores::Store;
use superclient_core::api::FinanceData;

use crate::models::{Category, Column, Expense, Invite, Module, Role};

/// Backend data shown on the home dashboard
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Pipeline board, in stage order
    pub columns: Vec<Column>,
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
    pub roles: Vec<Role>,
    pub modules: Vec<Module>,
    pub invites: Vec<Invite>,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace both finance lists from one response
pub fn store_set_finance(store: &DashboardStore, data: FinanceData) {
    store.expenses().set(data.expenses);
    store.categories().set(data.categories);
}

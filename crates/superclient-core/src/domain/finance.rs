//! Finance Entities
//!
//! Expenses reference a category by id; the dashboard shows total spend and
//! the heaviest category.

use serde::{Deserialize, Serialize};

use super::entity::{deserialize_id, Entity};

/// A single expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(deserialize_with = "deserialize_id")]
    pub category_id: String,
}

impl Expense {
    pub fn new(id: impl Into<String>, amount: f64, category_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount,
            category_id: category_id.into(),
        }
    }
}

/// Expense category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Chip color (hex, e.g. "#22c9a6")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: None,
        }
    }
}

impl Entity for Category {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Aggregates shown on the finance dashboard card
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceSummary<'a> {
    pub total_spend: f64,
    /// Winning category id, even when it has no matching `Category`
    pub top_category_id: Option<String>,
    /// `None` when there is no winner or the lookup fails
    pub top_category: Option<&'a Category>,
    pub top_category_value: f64,
}

/// Total spend plus the category with the strictly greatest sum.
///
/// Sums are kept in first-seen order and a category only wins with a value
/// greater than the current best (which starts at zero), so ties go to the
/// category seen first.
pub fn summarize_finance<'a>(expenses: &[Expense], categories: &'a [Category]) -> FinanceSummary<'a> {
    let total_spend = expenses.iter().map(|e| e.amount).sum();

    let mut totals: Vec<(&str, f64)> = Vec::new();
    for expense in expenses {
        match totals.iter_mut().find(|(id, _)| *id == expense.category_id) {
            Some((_, sum)) => *sum += expense.amount,
            None => totals.push((expense.category_id.as_str(), expense.amount)),
        }
    }

    let mut top_category_id = None;
    let mut top_category_value = 0.0;
    for (id, value) in totals {
        if value > top_category_value {
            top_category_value = value;
            top_category_id = Some(id);
        }
    }

    let top_category = top_category_id.and_then(|id| categories.iter().find(|c| c.id == id));

    FinanceSummary {
        total_spend,
        top_category_id: top_category_id.map(str::to_string),
        top_category,
        top_category_value,
    }
}

//! Pipeline Entities
//!
//! Columns are ordered sales stages, each holding deals whose value is a
//! free-form currency string.

use serde::{Deserialize, Serialize};

use super::currency::parse_value;
use super::entity::{deserialize_id, Entity};

/// A deal card inside a pipeline column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Localized currency text, e.g. "R$ 1,5k"
    #[serde(default)]
    pub value: String,
}

impl Deal {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        parse_value(&self.value)
    }
}

/// An ordered pipeline stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub deals: Vec<Deal>,
}

impl Column {
    pub fn new(id: impl Into<String>, title: impl Into<String>, deals: Vec<Deal>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            deals,
        }
    }

    /// Sum of the parsed values of every deal in this stage
    pub fn total_value(&self) -> f64 {
        self.deals.iter().map(Deal::amount).sum()
    }
}

impl Entity for Column {
    type Id = str;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Aggregates shown on the pipeline dashboard card
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSummary<'a> {
    pub total_count: usize,
    pub total_value: f64,
    pub avg_ticket: f64,
    pub top_stage: Option<&'a Column>,
}

/// Fold the board into totals and the most valuable stage.
///
/// The top stage is replaced only on a strictly greater value, so ties keep
/// the earlier column. The running best starts below zero, which makes the
/// first column the top stage when every stage sums to zero.
pub fn summarize_pipeline(columns: &[Column]) -> PipelineSummary<'_> {
    let mut total_count = 0;
    let mut total_value = 0.0;
    let mut top_stage: Option<(&Column, f64)> = None;

    for column in columns {
        let value = column.total_value();
        total_count += column.deals.len();
        total_value += value;

        let best = top_stage.map_or(-1.0, |(_, best)| best);
        if value > best {
            top_stage = Some((column, value));
        }
    }

    let avg_ticket = if total_count > 0 {
        total_value / total_count as f64
    } else {
        0.0
    };

    PipelineSummary {
        total_count,
        total_value,
        avg_ticket,
        top_stage: top_stage.map(|(column, _)| column),
    }
}

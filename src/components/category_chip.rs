//! Category Chip Component
//!
//! Category label on a background derived from the category color.

use leptos::prelude::*;
use superclient_core::domain::{darken_color, CHIP_DARKEN_FACTOR};

use crate::models::Category;

const DEFAULT_CHIP_COLOR: &str = "#64748b";

#[component]
pub fn CategoryChip(category: Category) -> impl IntoView {
    let color = category.color.as_deref().unwrap_or(DEFAULT_CHIP_COLOR);
    let style = format!(
        "background-color: {}; border-color: {};",
        darken_color(color, CHIP_DARKEN_FACTOR),
        color
    );

    view! {
        <span class="category-chip" style=style>
            {category.name}
        </span>
    }
}

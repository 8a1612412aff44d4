//! Support FAQ search

/// A help topic on the support page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub title: &'static str,
    pub content: &'static str,
}

/// Items whose title or content contains `query`, case-insensitively.
/// A blank query returns everything.
pub fn filter_faq<'a>(items: &'a [FaqItem], query: &str) -> Vec<&'a FaqItem> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| {
            format!("{} {}", item.title, item.content)
                .to_lowercase()
                .contains(&term)
        })
        .collect()
}

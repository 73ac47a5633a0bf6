//! Needs-vs-wants classification of expense categories.

use super::types::ExpenseClass;

/// Category names counted as needs, matched against the lowercased name.
pub const NEED_CATEGORIES: [&str; 8] = [
    "food",
    "rent",
    "utilities",
    "transport",
    "health",
    "medicine",
    "electricity",
    "water",
];

/// Classifies a category by case-insensitive exact match against
/// [`NEED_CATEGORIES`]. Anything else, including padded or synonym names,
/// is a want.
#[must_use]
pub fn classify(category: &str) -> ExpenseClass {
    let folded = category.to_lowercase();
    if NEED_CATEGORIES.contains(&folded.as_str()) {
        ExpenseClass::Need
    } else {
        ExpenseClass::Want
    }
}

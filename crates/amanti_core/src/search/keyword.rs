//! Case-insensitive substring search over item collections.
//!
//! # Responsibility
//! - Match records on title, description, category or location.
//! - Return per-collection result lists in source order.
//!
//! # Invariants
//! - The query is lowercased exactly once per search.
//! - An empty query matches every record; `contains("")` always holds and
//!   this behavior is relied upon by callers.
//! - No ranking: result order is insertion order filtered by match.

use crate::model::item::Item;

/// Search results, one list per collection.
///
/// Either or both lists may be empty; each record appears at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchMatches {
    pub lost_items: Vec<Item>,
    pub found_items: Vec<Item>,
}

/// Runs the keyword search over both collections independently.
///
/// Full scan per call: O(lost + found). No index is maintained.
pub fn search_collections(lost: &[Item], found: &[Item], query: &str) -> SearchMatches {
    let needle = query.to_lowercase();
    SearchMatches {
        lost_items: filter_matching(lost, &needle),
        found_items: filter_matching(found, &needle),
    }
}

/// Whether one record matches an already-lowercased query.
///
/// Logical OR across the four searchable text fields.
pub fn item_matches(item: &Item, needle_lower: &str) -> bool {
    item.title.to_lowercase().contains(needle_lower)
        || item.description.to_lowercase().contains(needle_lower)
        || item.category.to_lowercase().contains(needle_lower)
        || item.location.to_lowercase().contains(needle_lower)
}

fn filter_matching(items: &[Item], needle_lower: &str) -> Vec<Item> {
    items
        .iter()
        .filter(|item| item_matches(item, needle_lower))
        .cloned()
        .collect()
}

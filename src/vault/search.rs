//! Label search over the live collection.
//!
//! No index is kept; the collection is small enough that every query is a
//! full scan.

use super::entry::Entry;

/// Entries whose label contains `query`, ignoring case, in collection order.
///
/// An empty query matches nothing.
pub fn filter(entries: &[Entry], query: &str) -> Vec<Entry> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|e| e.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

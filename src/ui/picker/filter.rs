//! Incremental search over picker candidates.

use super::Candidate;

/// Whether `text` matches the search string.
///
/// A search containing a space is split into whitespace-separated terms that
/// must all occur in `text`; otherwise the whole search must occur as one
/// substring. Matching is case-sensitive.
pub fn matches(search: &str, text: &str) -> bool {
    if search.contains(' ') {
        search.split_whitespace().all(|term| text.contains(term))
    } else {
        text.contains(search)
    }
}

/// Indices of the candidates matching `search`, in original order.
pub fn filter<T: Candidate>(items: &[T], search: &str) -> Vec<usize> {
    if search.is_empty() {
        return (0..items.len()).collect();
    }

    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(search, &item.search_text()))
        .map(|(i, _)| i)
        .collect()
}

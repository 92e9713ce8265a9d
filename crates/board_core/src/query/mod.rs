//! Mirrors [`BoardFilters`] into a flat key-value representation so a
//! board view can be shared or bookmarked. The codec is transport
//! independent; whatever carries the pairs (a URL query string, CLI
//! flag, ...) is the caller's business.
//!
//! Serialization only emits `q` and `priority` when they carry a value;
//! `sortField` and `sortOrder` are always present. Deserialization is
//! lenient: anything missing or unrecognized degrades to the default,
//! so malformed input yields a usable view instead of an error.

use crate::model::TaskPriority;
use crate::view::{BoardFilters, SortField, SortOrder};

pub const SEARCH_KEY: &str = "q";
pub const PRIORITY_KEY: &str = "priority";
pub const SORT_FIELD_KEY: &str = "sortField";
pub const SORT_ORDER_KEY: &str = "sortOrder";

/// Encode filters as ordered key-value pairs.
pub fn encode_filters(filters: &BoardFilters) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(4);
    if !filters.search_text.is_empty() {
        pairs.push((SEARCH_KEY.to_string(), filters.search_text.clone()));
    }
    if let Some(priority) = filters.priority {
        pairs.push((PRIORITY_KEY.to_string(), priority.as_str().to_string()));
    }
    pairs.push((
        SORT_FIELD_KEY.to_string(),
        filters.sort_field.as_str().to_string(),
    ));
    pairs.push((
        SORT_ORDER_KEY.to_string(),
        filters.sort_order.as_str().to_string(),
    ));
    pairs
}

/// Decode pairs back into filters. The first occurrence of a key wins.
pub fn decode_filters(pairs: &[(String, String)]) -> BoardFilters {
    let first = |key: &str| {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    let search_text = first(SEARCH_KEY).unwrap_or("").to_string();

    // Priority names are exact; "high" or "urgent" is treated as unset.
    let priority = first(PRIORITY_KEY).and_then(|raw| match raw {
        "Low" => Some(TaskPriority::Low),
        "Medium" => Some(TaskPriority::Medium),
        "High" => Some(TaskPriority::High),
        _ => None,
    });

    let sort_field = match first(SORT_FIELD_KEY) {
        Some("priority") => SortField::Priority,
        _ => SortField::CreatedAt,
    };

    let sort_order = match first(SORT_ORDER_KEY) {
        Some("asc") => SortOrder::Ascending,
        _ => SortOrder::Descending,
    };

    BoardFilters {
        search_text,
        priority,
        sort_field,
        sort_order,
    }
}

//! Shopper-facing text: sort option labels and variant price spans.

use crate::{codec::NormalizedQuery, filter::SORT_KEYS, mutate::get_values};

///
/// SortOption
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Options offered by the sort picker, in display order.
pub const SORT_OPTIONS: [SortOption; 4] = [
    SortOption {
        value: "featured",
        label: "Featured",
    },
    SortOption {
        value: "newest",
        label: "Newest",
    },
    SortOption {
        value: "price_desc",
        label: "Price: High → Low",
    },
    SortOption {
        value: "price_asc",
        label: "Price: Low → High",
    },
];

/// Label for a raw sort value; unknown values read as `Featured`.
#[must_use]
pub fn sort_label(value: &str) -> &'static str {
    match value {
        "latest" => "Newest",
        other => SORT_OPTIONS
            .iter()
            .find(|option| option.value == other)
            .map_or("Featured", |option| option.label),
    }
}

/// Label for the ordering `query` requests. No sort key means most recent
/// first.
#[must_use]
pub fn current_sort_label(query: &NormalizedQuery) -> &'static str {
    let value = SORT_KEYS
        .iter()
        .find_map(|key| get_values(query, key).into_iter().next());

    sort_label(value.as_deref().unwrap_or("latest"))
}

/// Render a product's variant price span.
///
/// Equal bounds (within a cent) render once; a single known bound renders
/// alone; no bounds render nothing.
#[must_use]
pub fn format_price_range(min: Option<f64>, max: Option<f64>) -> Option<String> {
    match (min, max) {
        (None, None) => None,
        (Some(min), Some(max)) if (min - max).abs() >= 0.01 => {
            Some(format!("${min:.2} - ${max:.2}"))
        }
        (Some(value), _) | (None, Some(value)) => Some(format!("${value:.2}")),
    }
}

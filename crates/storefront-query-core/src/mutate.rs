//! Pure query mutators.
//!
//! Each function takes a query by reference and returns a new one; nothing
//! is modified in place. Results respect the normalized-query shape: a key
//! is never stored with an empty value, and a single surviving value is
//! stored as a scalar.

use crate::codec::{NormalizedQuery, QueryValue};
use indexmap::IndexSet;

/// Non-empty values stored under `key`; empty when the key is absent, null,
/// or blank.
#[must_use]
pub fn get_values(query: &NormalizedQuery, key: &str) -> Vec<String> {
    query
        .get(key)
        .map(|value| {
            value
                .as_slice()
                .iter()
                .filter(|item| !item.is_empty())
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

///
/// Assign `value` to `key`.
///
/// - `Null`, a blank scalar, or a sequence with no non-empty entries removes
///   the key
/// - a non-empty scalar replaces the current value
/// - a sequence keeps its non-empty entries; one survivor becomes a scalar
///
#[must_use]
pub fn set_value(
    query: &NormalizedQuery,
    key: &str,
    value: impl Into<QueryValue>,
) -> NormalizedQuery {
    let mut next = query.clone();

    let clean: Vec<String> = match value.into() {
        QueryValue::Null => Vec::new(),
        QueryValue::Single(single) => vec![single],
        QueryValue::Multi(values) => values,
    }
    .into_iter()
    .filter(|item| !item.is_empty())
    .collect();

    if clean.is_empty() {
        next.remove(key);
    } else {
        next.insert(key.to_string(), QueryValue::collapse(clean));
    }

    next
}

/// Add `value` to the set under `key` if missing, otherwise remove it.
///
/// The current set is order-preserving and duplicate-free; removing the last
/// member removes the key.
#[must_use]
pub fn toggle_value(query: &NormalizedQuery, key: &str, value: &str) -> NormalizedQuery {
    let mut members: IndexSet<String> = get_values(query, key).into_iter().collect();

    if !members.shift_remove(value) {
        members.insert(value.to_string());
    }

    set_value(query, key, members.into_iter().collect::<Vec<_>>())
}

/// Copy of `query` without the listed keys; absent keys are ignored.
#[must_use]
pub fn remove_keys<I, K>(query: &NormalizedQuery, keys: I) -> NormalizedQuery
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    let mut next = query.clone();

    for key in keys {
        next.remove(key.as_ref());
    }

    next
}

/// True when no key is present.
#[must_use]
pub fn is_query_empty(query: &NormalizedQuery) -> bool {
    query.is_empty()
}

///
/// TESTS
///

use derive_more::{Deref, IntoIterator};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///
/// QueryValue
///
/// Present-key state of one query parameter. Absence is modelled by the key
/// not being in the [`NormalizedQuery`] at all, so every key carries one of
/// three explicit shapes:
///
/// - `Null`: the key appeared with no `=` (`?preview`)
/// - `Single`: exactly one value; an empty string means "present but blank"
/// - `Multi`: two or more non-empty values, in order of appearance
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Null,
    Single(String),
    Multi(Vec<String>),
}

impl QueryValue {
    /// Collapse a value list using the parse aggregation rule:
    /// zero values become an empty scalar, one value a scalar, more a sequence.
    #[must_use]
    pub fn collapse(mut values: Vec<String>) -> Self {
        match values.len() {
            0 => Self::Single(String::new()),
            1 => Self::Single(values.remove(0)),
            _ => Self::Multi(values),
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the raw value list (possibly containing empty strings).
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Null => &[],
            Self::Single(value) => std::slice::from_ref(value),
            Self::Multi(values) => values,
        }
    }

    /// First non-empty value, if any.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.as_slice()
            .iter()
            .map(String::as_str)
            .find(|value| !value.is_empty())
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

// Sequence conversions drop blank entries and collapse, so a hand-built
// value always has the shape parsing would produce.
impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::collapse(values.into_iter().filter(|value| !value.is_empty()).collect())
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        values.into_iter().map(str::to_string).collect::<Vec<_>>().into()
    }
}

impl<const N: usize> From<[&str; N]> for QueryValue {
    fn from(values: [&str; N]) -> Self {
        Vec::from(values).into()
    }
}

impl<T: Into<Self>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

///
/// NormalizedQuery
///
/// Canonical in-memory representation of URL query state.
///
/// Keys keep insertion order so serialization is stable. Equality ignores
/// key order but not value order. The map is read-only from the outside;
/// every change goes through the pure functions in [`crate::mutate`], which
/// return a fresh query.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedQuery(#[into_iterator(owned, ref)] IndexMap<String, QueryValue>);

impl NormalizedQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert used by tests and callers assembling a query by hand.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub(crate) fn insert(&mut self, key: String, value: QueryValue) {
        self.0.insert(key, value);
    }

    pub(crate) fn remove(&mut self, key: &str) {
        self.0.shift_remove(key);
    }

    pub(crate) fn sort_keys(&mut self) {
        self.0.sort_keys();
    }
}

impl<K: Into<String>> FromIterator<(K, QueryValue)> for NormalizedQuery {
    fn from_iter<I: IntoIterator<Item = (K, QueryValue)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

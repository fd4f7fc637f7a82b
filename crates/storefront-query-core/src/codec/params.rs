use crate::{codec::QueryValue, error::QueryError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

///
/// ParamValue
///
/// One entry of a framework-provided search-params record. Frameworks
/// deliver either a single string or an already-split list; either may
/// still contain comma-joined values.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    One(String),
    Many(Vec<String>),
}

impl ParamValue {
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }
}

///
/// SearchParams
///
/// Raw `key → string | string[] | undefined` record as handed over by a web
/// framework. `None` marks a declared-but-undefined entry; it is skipped
/// everywhere.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchParams(IndexMap<String, Option<ParamValue>>);

impl SearchParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_one(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0
            .insert(key.into(), Some(ParamValue::One(value.into())));
        self
    }

    #[must_use]
    pub fn with_many<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.0.insert(key.into(), Some(ParamValue::Many(values)));
        self
    }

    #[must_use]
    pub fn with_undefined(mut self, key: impl Into<String>) -> Self {
        self.0.insert(key.into(), None);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&ParamValue>)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build a record from an arbitrary JSON value.
    ///
    /// Objects map member-wise (`string`, `string[]`, `null`); anything else
    /// is a contract violation.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, QueryError> {
        let serde_json::Value::Object(members) = value else {
            return Err(QueryError::unsupported_input(value));
        };

        let mut params = IndexMap::with_capacity(members.len());
        for (key, member) in members {
            let entry = match member {
                serde_json::Value::Null => None,
                serde_json::Value::String(s) => Some(ParamValue::One(s.clone())),
                serde_json::Value::Array(items) => {
                    let values = items
                        .iter()
                        .map(|item| match item {
                            serde_json::Value::String(s) => Ok(s.clone()),
                            other => Err(QueryError::unsupported_value(key, other)),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    Some(ParamValue::Many(values))
                }
                other => return Err(QueryError::unsupported_value(key, other)),
            };
            params.insert(key.clone(), entry);
        }

        Ok(Self(params))
    }

    /// View each entry as the codec's value shape; undefined entries are absent.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, Option<QueryValue>)> {
        self.iter().map(|(key, value)| {
            let value = value.map(|value| match value {
                ParamValue::One(s) => QueryValue::Single(s.clone()),
                ParamValue::Many(values) => QueryValue::Multi(values.clone()),
            });
            (key, value)
        })
    }

    /// Like [`Self::entries`], but with every string split on `,` and
    /// trimmed. Framework records carry already-decoded text, so a comma
    /// inside a value is always a separator here.
    pub(crate) fn comma_split_entries(&self) -> impl Iterator<Item = (&str, Option<QueryValue>)> {
        self.iter().map(|(key, value)| {
            let value = value.map(|value| {
                QueryValue::Multi(
                    value
                        .as_slice()
                        .iter()
                        .flat_map(|item| item.split(','))
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(str::to_string)
                        .collect(),
                )
            });
            (key, value)
        })
    }
}

impl<K: Into<String>> FromIterator<(K, ParamValue)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, ParamValue)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), Some(value)))
                .collect(),
        )
    }
}

use thiserror::Error as ThisError;

///
/// QueryError
///
/// Programming-contract violations at the crate boundary.
///
/// Malformed *user* input never produces one of these: unparseable numbers,
/// unknown sort keys and unknown price bands all degrade to defaults. This
/// error is reserved for callers handing the codec a structurally wrong
/// input shape.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error("unsupported query input: expected a string or an object, found {kind}")]
    UnsupportedInput { kind: &'static str },

    #[error(
        "unsupported value for query key '{key}': expected a string, an array of strings, or null, found {kind}"
    )]
    UnsupportedValue { key: String, kind: &'static str },
}

impl QueryError {
    pub(crate) const fn unsupported_input(value: &serde_json::Value) -> Self {
        Self::UnsupportedInput {
            kind: json_kind(value),
        }
    }

    pub(crate) fn unsupported_value(key: impl Into<String>, value: &serde_json::Value) -> Self {
        Self::UnsupportedValue {
            key: key.into(),
            kind: json_kind(value),
        }
    }
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

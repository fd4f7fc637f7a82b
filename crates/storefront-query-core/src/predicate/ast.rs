use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

///
/// Predicate AST
///
/// Pure, schema-agnostic representation of listing predicates.
/// Nothing here knows about SQL, indexes, or row storage; a backend lowers
/// the tree into its own query language or evaluates it directly with
/// [`super::eval`].
///

///
/// Value
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Number(f64),
    Text(String),
    List(Vec<Self>),
}

impl Value {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CompareOp {
    Eq = 0x01,
    Lte = 0x04,
    Gte = 0x06,
    In = 0x07,
}

impl CompareOp {
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Eq, value.into())
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Lte, value.into())
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(field, CompareOp::Gte, value.into())
    }

    #[must_use]
    pub fn in_<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values = values.into_iter().map(Into::into).collect();

        Self::new(field, CompareOp::In, Value::List(values))
    }
}

///
/// Predicate
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    And(Vec<Self>),
    Or(Vec<Self>),
    Compare(ComparePredicate),

    /// Case-insensitive `LIKE` match. `pattern` uses `%`, `_` and `\`
    /// escapes; a missing or null field reads as the empty string.
    TextMatchCi { field: String, pattern: String },

    /// At least one related row under `relation` satisfies `predicate`.
    Exists {
        relation: String,
        predicate: Box<Self>,
    },
}

impl Predicate {
    #[must_use]
    pub const fn and(preds: Vec<Self>) -> Self {
        Self::And(preds)
    }

    #[must_use]
    pub const fn or(preds: Vec<Self>) -> Self {
        Self::Or(preds)
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::eq(field, value))
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::lte(field, value))
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::Compare(ComparePredicate::gte(field, value))
    }

    #[must_use]
    pub fn in_<I, V>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Compare(ComparePredicate::in_(field, values))
    }

    #[must_use]
    pub fn text_match_ci(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::TextMatchCi {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    #[must_use]
    pub fn exists(relation: impl Into<String>, predicate: Self) -> Self {
        Self::Exists {
            relation: relation.into(),
            predicate: Box::new(predicate),
        }
    }
}

impl BitAnd for Predicate {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitOr for Predicate {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

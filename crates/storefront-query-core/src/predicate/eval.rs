use super::{CompareOp, ComparePredicate, LikePattern, Predicate, Value};

///
/// FieldPresence
///
/// Result of reading a field from a row during predicate evaluation.
/// Distinguishes a missing field from a present one.
///

#[derive(Clone, Debug, PartialEq)]
pub enum FieldPresence {
    Present(Value),
    Missing,
}

impl<T: Into<Value>> From<Option<T>> for FieldPresence {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, |value| Self::Present(value.into()))
    }
}

///
/// Row
///
/// Anything predicates can be evaluated against. `related` exposes child
/// rows for existence checks; rows without relations keep the default.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence;

    fn related(&self, _relation: &str) -> Vec<&dyn Row> {
        Vec::new()
    }
}

/// Evaluate `predicate` against `row`.
///
/// An empty `And` is true and an empty `Or` is false. Comparisons against a
/// missing field, or between mismatched value kinds, are false.
#[must_use]
pub fn eval<R: Row + ?Sized>(row: &R, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::And(children) => children.iter().all(|child| eval(row, child)),
        Predicate::Or(children) => children.iter().any(|child| eval(row, child)),
        Predicate::Compare(cmp) => eval_compare(row, cmp),
        Predicate::TextMatchCi { field, pattern } => {
            let text = match row.field(field) {
                FieldPresence::Present(Value::Text(text)) => text,
                FieldPresence::Present(_) | FieldPresence::Missing => String::new(),
            };
            LikePattern::new(pattern).matches(&text)
        }
        Predicate::Exists {
            relation,
            predicate,
        } => row
            .related(relation)
            .into_iter()
            .any(|child| eval(child, predicate)),
    }
}

fn eval_compare<R: Row + ?Sized>(row: &R, cmp: &ComparePredicate) -> bool {
    let FieldPresence::Present(actual) = row.field(&cmp.field) else {
        return false;
    };

    match cmp.op {
        CompareOp::Eq => actual == cmp.value,
        CompareOp::In => match &cmp.value {
            Value::List(items) => items.contains(&actual),
            _ => false,
        },
        CompareOp::Gte => compare_numbers(&actual, &cmp.value, |a, b| a >= b),
        CompareOp::Lte => compare_numbers(&actual, &cmp.value, |a, b| a <= b),
    }
}

fn compare_numbers(actual: &Value, expected: &Value, op: impl FnOnce(f64, f64) -> bool) -> bool {
    match (actual.as_number(), expected.as_number()) {
        (Some(a), Some(b)) => op(a, b),
        _ => false,
    }
}

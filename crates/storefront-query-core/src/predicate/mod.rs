//! Backend-agnostic predicate vocabulary and a reference evaluator.

mod ast;
mod eval;
mod pattern;


pub use ast::{CompareOp, ComparePredicate, Predicate, Value};
pub use eval::{FieldPresence, Row, eval};
pub use pattern::{LikePattern, escape_like};

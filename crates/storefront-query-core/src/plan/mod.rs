//! Typed filter spec → backend-agnostic query descriptor.

mod builder;
mod fingerprint;


pub use builder::build_descriptor;
pub use fingerprint::DescriptorFingerprint;

use crate::predicate::{Predicate, Row, eval};
use serde::{Deserialize, Serialize};

///
/// Catalog schema names
///
/// Field and relation names the builder emits. A backend maps these onto
/// its own columns.
///

pub mod fields {
    pub const IS_PUBLISHED: &str = "is_published";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const CATEGORY_ID: &str = "category_id";
    pub const BRAND_ID: &str = "brand_id";
    pub const GENDER: &str = "gender";
    pub const CREATED_AT: &str = "created_at";

    pub const VARIANTS: &str = "variants";
    pub const COLOR_ID: &str = "color_id";
    pub const PRICE: &str = "price";
}

///
/// OrderDirection
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    Asc,
    Desc,
}

///
/// Aggregate
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregate {
    Min,
    Max,
}

///
/// OrderKey
///
/// A row field, or an aggregate over a field of related rows.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderKey {
    Field(String),
    Aggregate {
        func: Aggregate,
        relation: String,
        field: String,
    },
}

impl OrderKey {
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    #[must_use]
    pub fn aggregate(func: Aggregate, relation: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Aggregate {
            func,
            relation: relation.into(),
            field: field.into(),
        }
    }
}

///
/// OrderSpec
///
/// Ordering terms, most significant first.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub fields: Vec<(OrderKey, OrderDirection)>,
}

///
/// PageSpec
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    pub limit: u32,
    pub offset: u32,
}

///
/// QueryDescriptor
///
/// What a data source needs to answer one listing request: a conjunction of
/// predicates, an ordering, and a page window. `color_filter_ids` echoes the
/// selected colors so a source can pick matching imagery.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
    pub predicates: Vec<Predicate>,
    pub order: OrderSpec,
    pub page: PageSpec,
    pub color_filter_ids: Vec<String>,
}

impl QueryDescriptor {
    /// All predicates as a single conjunction.
    #[must_use]
    pub fn filter(&self) -> Predicate {
        Predicate::and(self.predicates.clone())
    }

    /// True when `row` satisfies every predicate.
    #[must_use]
    pub fn matches<R: Row + ?Sized>(&self, row: &R) -> bool {
        self.predicates.iter().all(|predicate| eval(row, predicate))
    }
}

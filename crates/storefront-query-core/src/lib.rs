//! Core runtime for storefront query state: the URL query codec, pure query
//! mutators, the filter resolver, and the backend-agnostic predicate planner.
//!
//! Data flows leaves-first:
//!
//! raw query string / search params
//!   → [`codec::parse_search_params`] → [`codec::NormalizedQuery`]
//!   → [`mutate`] (UI-driven updates) → [`codec::stringify_query`]
//!
//! and independently:
//!
//! normalized query / search params
//!   → [`filter::resolve_filters`] → [`filter::FilterSpec`]
//!   → [`plan::build_descriptor`] → [`plan::QueryDescriptor`]
//!   → a [`source::DataSource`]
//!
//! Every stage is a pure function over immutable values.
#![warn(unreachable_pub)]

pub mod active;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod filter;
pub mod mutate;
pub mod plan;
pub mod predicate;
pub mod source;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::QueryError;

///
/// CONSTANTS
///

/// Page size applied when the query does not carry a usable `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Upper clamp for the requested page size.
pub const MAX_PAGE_SIZE: u32 = 60;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No executors, sources, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        codec::{NormalizedQuery, QueryValue, SearchParams},
        filter::{FilterSpec, Gender, PriceBand, SortKey},
        plan::{OrderDirection, QueryDescriptor},
        predicate::{Predicate, Value},
    };
}

//! ## Crate layout
//! - `codec`: URL query string parsing and serialization.
//! - `mutate`: pure query mutators (set, toggle, remove).
//! - `filter`: typed filter resolution with price bands and page policy.
//! - `plan`: backend-agnostic query descriptors and their fingerprints.
//! - `predicate`: predicate AST and the reference evaluator.
//! - `source`: the data source contract, an in-memory catalog, and sessions.
//! - `active` / `display`: listing-page chips, sort labels, price spans.
//! - `config`: TOML-loaded catalog policy.
//!
//! The `prelude` module carries the types most call sites need.

pub use storefront_query_core as core;

pub use storefront_query_core::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, QueryError, active, codec, config, display, filter, mutate,
    plan, predicate, source,
};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
    pub use crate::core::{
        QueryError,
        active::{ActiveFilter, active_filters, clear_filters},
        codec::{QueryCodec, build_url, parse_search_params, stringify_query},
        config::{CatalogConfig, ConfigError},
        filter::{FilterResolver, resolve_filters},
        mutate::{get_values, is_query_empty, remove_keys, set_value, toggle_value},
        plan::build_descriptor,
        source::{CatalogSession, DataSource, Page},
    };
}

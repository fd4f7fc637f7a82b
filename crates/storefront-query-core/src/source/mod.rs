//! Data sources: anything that can answer a [`QueryDescriptor`].
//!
//! The core never executes queries itself; a source receives the descriptor
//! and returns one page of rows plus the unpaged match count.

mod memory;
mod session;


pub use memory::{Image, InMemoryCatalog, Product, ProductSummary, Variant};
pub use session::CatalogSession;

use crate::plan::QueryDescriptor;
use serde::{Deserialize, Serialize};

///
/// Page
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub rows: Vec<T>,

    /// Matches before offset/limit were applied.
    pub total_count: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub const fn new(rows: Vec<T>, total_count: usize) -> Self {
        Self { rows, total_count }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

///
/// DataSource
///

pub trait DataSource {
    type Row;
    type Error: std::error::Error;

    fn fetch(&self, descriptor: &QueryDescriptor) -> Result<Page<Self::Row>, Self::Error>;
}

impl<S: DataSource + ?Sized> DataSource for &S {
    type Row = S::Row;
    type Error = S::Error;

    fn fetch(&self, descriptor: &QueryDescriptor) -> Result<Page<Self::Row>, Self::Error> {
        (**self).fetch(descriptor)
    }
}

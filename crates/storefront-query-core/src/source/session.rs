use super::{DataSource, Page};
use crate::{
    codec::{QueryCodec, QueryInput},
    config::CatalogConfig,
    filter::{FilterResolver, FilterSpec},
    plan::{QueryDescriptor, build_descriptor},
};

///
/// CatalogSession
///
/// Explicit handle binding one data source to one listing policy. Build it
/// once at startup and pass it to whatever serves listing requests; there is
/// no process-global connection.
///

#[derive(Clone, Debug)]
pub struct CatalogSession<S> {
    source: S,
    codec: QueryCodec,
    resolver: FilterResolver,
}

impl<S: DataSource> CatalogSession<S> {
    #[must_use]
    pub fn new(source: S, config: &CatalogConfig) -> Self {
        Self {
            source,
            codec: config.codec(),
            resolver: config.resolver(),
        }
    }

    #[must_use]
    pub fn with_defaults(source: S) -> Self {
        Self::new(source, &CatalogConfig::default())
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub const fn codec(&self) -> &QueryCodec {
        &self.codec
    }

    /// Consume the session, handing the source back for teardown.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    #[must_use]
    pub fn resolve<'a>(&self, input: impl Into<QueryInput<'a>>) -> FilterSpec {
        self.resolver.resolve(&self.codec.parse(input))
    }

    #[must_use]
    pub fn plan<'a>(&self, input: impl Into<QueryInput<'a>>) -> QueryDescriptor {
        build_descriptor(&self.resolve(input))
    }

    /// Resolve, plan and fetch one listing page.
    pub fn list<'a>(&self, input: impl Into<QueryInput<'a>>) -> Result<Page<S::Row>, S::Error> {
        let descriptor = self.plan(input);
        let page = self.source.fetch(&descriptor)?;

        tracing::debug!(
            fingerprint = %descriptor.fingerprint(),
            total_count = page.total_count,
            rows = page.len(),
            "listed catalog page"
        );

        Ok(page)
    }
}

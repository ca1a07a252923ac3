use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::query::{query_with, FilterSet, SearchQuery, SortSpec};
use crate::record::ColorRecord;
use crate::similarity::{similar, Reference, Similar};

/// A query and similarity engine with a fixed configuration.
///
/// The engine holds no catalog and no state besides its configuration. Its
/// methods are the free functions [`query`](crate::query) and
/// [`similar`](crate::similar) with parameters taken from the configuration.
///
/// ```
/// # use swatchbook::{Catalog, ColorRecord, Engine, EngineConfig, Rgb};
/// let config = EngineConfig::from_toml_str("[similarity]\nlimit = 1\nthreshold = 0.0\n")?;
/// let engine = Engine::new(config);
///
/// let catalog = Catalog::from_records([
///     ColorRecord::from_rgb(Rgb::new(255, 0, 0)),
///     ColorRecord::from_rgb(Rgb::new(0, 255, 0)),
///     ColorRecord::from_rgb(Rgb::new(0, 0, 255)),
/// ]).catalog;
/// assert_eq!(engine.similar(Rgb::new(255, 0, 0), &catalog).len(), 1);
/// # Ok::<(), swatchbook::error::ConfigError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create a new engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Access the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the query pipeline.
    ///
    /// Without a sort specification, the configured default sort applies. If
    /// the configuration has none either, the sort stage is skipped and
    /// results are ordered by search relevance.
    pub fn query<'a>(
        &self,
        catalog: &'a Catalog,
        search_query: &SearchQuery,
        filters: &FilterSet,
        spec: Option<SortSpec>,
    ) -> Vec<&'a ColorRecord> {
        query_with(
            catalog,
            search_query,
            filters,
            spec.or(self.config.query.sort),
            &self.config.search,
        )
    }

    /// Rank the catalog's records by similarity to the reference.
    pub fn similar<'a, R: Into<Reference>>(
        &self,
        reference: R,
        catalog: &'a Catalog,
    ) -> Vec<Similar<'a>> {
        similar(reference, catalog, &self.config.similarity)
    }
}

//! Searching, filtering, and sorting a catalog.
//!
//! Each stage consumes a view, i.e., a vector of references to catalog
//! records, and produces another view. None of the stages changes the
//! catalog. [`query`] runs all three stages in order: search, filter, sort.

mod filter;
mod search;
mod sort;

pub use filter::{filter, FilterSet};
pub use search::{search, FieldWeights, SearchQuery};
pub use sort::{sort, SortField, SortOrder, SortSpec};

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::record::ColorRecord;

/// Run the query pipeline over the catalog.
///
/// The result depends only on the arguments. In particular, it does not
/// depend on earlier queries.
///
/// ```
/// # use swatchbook::{query, Catalog, Category, FilterSet, SearchQuery, SortSpec};
/// let catalog = Catalog::from_json_str(r##"{ "colors": [
///     { "hex": "#FF0000", "rgb": { "r": 255, "g": 0, "b": 0 }, "chinese": "红", "category": "红色系" },
///     { "hex": "#0000FF", "rgb": { "r": 0, "g": 0, "b": 255 }, "chinese": "蓝", "category": "蓝色系" }
/// ]}"##)?.catalog;
///
/// let filters = FilterSet::new().with_category(Category::Blue);
/// let view = query(&catalog, &SearchQuery::default(), &filters, SortSpec::default());
/// assert_eq!(view.len(), 1);
/// assert_eq!(view[0].chinese(), "蓝");
/// # Ok::<(), swatchbook::error::IngestionError>(())
/// ```
pub fn query<'a>(
    catalog: &'a Catalog,
    search_query: &SearchQuery,
    filters: &FilterSet,
    spec: SortSpec,
) -> Vec<&'a ColorRecord> {
    query_with(
        catalog,
        search_query,
        filters,
        Some(spec),
        &SearchConfig::default(),
    )
}

/// Run the query pipeline over the catalog with the given search
/// configuration.
///
/// Without a sort specification, the sort stage is skipped and the result
/// retains the search stage's order, i.e., descending relevance with ties in
/// catalog order.
pub fn query_with<'a>(
    catalog: &'a Catalog,
    search_query: &SearchQuery,
    filters: &FilterSet,
    spec: Option<SortSpec>,
    config: &SearchConfig,
) -> Vec<&'a ColorRecord> {
    let view = search(catalog.view(), search_query, config);
    let view = filter(view, filters);
    match spec {
        Some(spec) => sort(view, spec),
        None => view,
    }
}

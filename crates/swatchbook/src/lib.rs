//! # Swatchbook
//!
//! Swatchbook searches, filters, sorts, and extends a catalog of named color
//! swatches, i.e., 24-bit colors with Chinese and English names, a color
//! family, tags, and optionally a traditional Chinese color name (国风).
//!
//!
//! ## 1. Overview
//!
//! Swatchbook's main abstractions are:
//!
//!   * [`ColorRecord`] is a **catalog entry**. It combines a 24-bit [`Rgb`]
//!     color with its names, [`Category`], and tags. It also caches the
//!     derived [`Hsl`] coordinates, brightness, and contrast color.
//!   * [`Catalog`] is an **immutable, ordered collection** of color records
//!     with unique hex colors. It is created once from a JSON catalog
//!     document and then only borrowed.
//!   * [`query`] runs the **query pipeline** over a catalog. It consists of
//!     three stages, [`search`] for a [`SearchQuery`], [`filter`] by a
//!     [`FilterSet`], and [`sort`] by a [`SortSpec`]. The result is a view,
//!     i.e., a vector of record references.
//!   * [`similar`] ranks a catalog's records by **similarity** to a
//!     reference color, using weighted HSL differences.
//!   * [`SchemeType::generate`] derives **color schemes**, such as the
//!     complementary or triadic colors, from a base color.
//!   * [`Engine`] bundles query and similarity ranking with an
//!     [`EngineConfig`] loaded from TOML.
//!
//! All of these are pure functions of their inputs. In particular, queries
//! never depend on earlier queries, and a catalog can be shared between
//! threads.
//!
//!
//! ## 2. Example
//!
//! ```
//! # use swatchbook::{query, similar, Catalog, FilterSet, SchemeType, SearchQuery, SimilarityConfig, SortSpec};
//! let ingestion = Catalog::from_json_str(r##"{ "colors": [
//!     { "hex": "#E60012", "rgb": { "r": 230, "g": 0, "b": 18 },
//!       "chinese": "中国红", "english": "China Red", "category": "红色系",
//!       "tags": ["经典"], "guofeng": "朱红" },
//!     { "hex": "#C04851", "rgb": { "r": 192, "g": 72, "b": 81 },
//!       "chinese": "玉红", "english": "Jade Red", "category": "红色系",
//!       "tags": ["古典"], "guofeng": null },
//!     { "hex": "#1661AB", "rgb": { "r": 22, "g": 97, "b": 171 },
//!       "chinese": "靛青", "english": "Indigo", "category": "蓝色系" }
//! ]}"##)?;
//! let catalog = ingestion.catalog;
//!
//! // 1. Query the catalog
//! let mut filters = FilterSet::default();
//! filters.set("hasGuofeng", "true");
//! let view = query(&catalog, &SearchQuery::new("red"), &filters, SortSpec::default());
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].chinese(), "中国红");
//!
//! // 2. Find similar colors
//! let ranking = similar(view[0], &catalog, &SimilarityConfig::default());
//! assert_eq!(ranking[0].record.english(), "Jade Red");
//!
//! // 3. Derive a scheme
//! let scheme = SchemeType::Complementary.generate(view[0].rgb());
//! assert_eq!(scheme[0].hsl().h(), 175);
//! # Ok::<(), swatchbook::error::IngestionError>(())
//! ```
//!
//!
//! ## 3. Optional Features
//!
//!   - **`f64`** selects the eponymous type as floating point type [`Float`]
//!     instead of `f32`. This feature is enabled by default.
//!
//!
//! ## 4. Logging
//!
//! Swatchbook logs through [`tracing`](https://docs.rs/tracing). Skipped
//! records and ignored filter or sort parameters are logged as warnings, and
//! catalog construction is logged at debug level. Swatchbook never installs a
//! subscriber.

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

mod catalog;
mod color;
mod config;
mod core;
mod engine;
pub mod error;
mod ingest;
mod query;
mod record;
mod scheme;
mod similarity;

pub use catalog::{Catalog, CatalogStats};
pub use color::{convert_color, Hsl, Rgb};
pub use config::{EngineConfig, QueryConfig, SearchConfig, SimilarityConfig};
pub use core::ColorFormat;
pub use engine::Engine;
pub use ingest::{normalize, Ingestion, RawRecord, RawRgb, SkippedRecord};
pub use query::{
    filter, query, query_with, search, sort, FieldWeights, FilterSet, SearchQuery, SortField,
    SortOrder, SortSpec,
};
pub use record::{Category, ColorRecord, UNNAMED_CHINESE, UNNAMED_ENGLISH};
pub use scheme::{generate_scheme, SchemeColor, SchemeRole, SchemeType};
pub use similarity::{similar, Reference, Similar, SimilarityWeights};

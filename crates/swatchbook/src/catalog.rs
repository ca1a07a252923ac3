//! The immutable catalog of color records.

use std::collections::{BTreeSet, HashMap};
use std::io::Read;

use serde::Serialize;

use crate::color::Rgb;
use crate::error::{IngestionError, SkipReason};
use crate::ingest::{collect, ingest_value, Ingestion};
use crate::record::{Category, ColorRecord};

/// An ordered collection of color records with unique hex colors.
///
/// A catalog is created once, by ingesting a catalog document or collecting
/// color records, and never changes afterwards. Since queries only borrow
/// records, a catalog can be shared between threads without coordination.
///
/// ```
/// # use swatchbook::Catalog;
/// let ingestion = Catalog::from_json_str(r##"{
///     "colors": [
///         { "hex": "#C04851", "rgb": { "r": 192, "g": 72, "b": 81 },
///           "chinese": "玉红", "category": "红色系", "guofeng": "玉红" },
///         { "hex": "#C04851", "rgb": { "r": 192, "g": 72, "b": 81 } }
///     ]
/// }"##)?;
/// assert_eq!(ingestion.catalog.len(), 1);
/// assert_eq!(ingestion.skipped.len(), 1);
/// assert!(ingestion.catalog.get("c04851").is_some());
/// # Ok::<(), swatchbook::error::IngestionError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<ColorRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Ingest the catalog document in the given string.
    pub fn from_json_str(json: &str) -> Result<Ingestion, IngestionError> {
        ingest_value(serde_json::from_str(json)?)
    }

    /// Ingest the catalog document produced by the given reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Ingestion, IngestionError> {
        ingest_value(serde_json::from_reader(reader)?)
    }

    /// Ingest an already parsed catalog document.
    pub fn from_json_value(document: serde_json::Value) -> Result<Ingestion, IngestionError> {
        ingest_value(document)
    }

    /// Collect the given color records into a catalog, skipping records whose
    /// hex colors duplicate earlier records.
    pub fn from_records<I>(records: I) -> Ingestion
    where
        I: IntoIterator<Item = ColorRecord>,
    {
        collect(records.into_iter().map(Ok))
    }

    /// Add the record to this catalog, unless its hex color is taken.
    pub(crate) fn push(&mut self, record: ColorRecord) -> Result<(), SkipReason> {
        if self.index.contains_key(record.hex()) {
            return Err(SkipReason::DuplicateHex(record.hex().to_owned()));
        }

        self.index.insert(record.hex().to_owned(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Determine whether this catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Get the records in catalog order.
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    /// Get an iterator over the records in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, ColorRecord> {
        self.records.iter()
    }

    /// Get all records as a view, i.e., a vector of references in catalog
    /// order.
    pub fn view(&self) -> Vec<&ColorRecord> {
        self.records.iter().collect()
    }

    /// Look up the record with the given hex color.
    ///
    /// The hex color may use either case and need not start with `#`. A
    /// malformed hex color is not in the catalog.
    pub fn get(&self, hex: &str) -> Option<&ColorRecord> {
        let key = hex.parse::<Rgb>().ok()?.to_string();
        self.index.get(&key).map(|index| &self.records[*index])
    }

    /// Get the position in catalog order of the record with the given hex
    /// color.
    pub fn position(&self, hex: &str) -> Option<usize> {
        let key = hex.parse::<Rgb>().ok()?.to_string();
        self.index.get(&key).copied()
    }

    /// Get the categories used by this catalog's records in declaration
    /// order.
    pub fn categories(&self) -> Vec<Category> {
        self.records
            .iter()
            .map(ColorRecord::category)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Get the tags used by this catalog's records in lexicographic order.
    pub fn tags(&self) -> Vec<&str> {
        self.records
            .iter()
            .flat_map(|r| r.tags().iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Count this catalog's records, the records in the given view, and the
    /// catalog's records with traditional names. The latter does not depend on
    /// the view.
    pub fn stats(&self, view: &[&ColorRecord]) -> CatalogStats {
        CatalogStats {
            total: self.len(),
            filtered: view.len(),
            with_guofeng: self.records.iter().filter(|r| r.guofeng().is_some()).count(),
        }
    }
}

impl AsRef<[ColorRecord]> for Catalog {
    fn as_ref(&self) -> &[ColorRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ColorRecord;
    type IntoIter = std::slice::Iter<'a, ColorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Record counts for a catalog and one of its views.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    /// The number of records in the catalog.
    pub total: usize,
    /// The number of records in the view.
    pub filtered: usize,
    /// The number of records in the catalog with a traditional name.
    pub with_guofeng: usize,
}

//! Turning catalog documents into catalogs.
//!
//! A catalog document is a JSON object with a `colors` array. Each array
//! element is normalized into a [`ColorRecord`] on its own. Elements that
//! cannot be normalized are skipped and reported, whereas a document without
//! a `colors` array fails ingestion as a whole.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::color::Rgb;
use crate::error::{IngestionError, SkipReason};
use crate::record::{present, Category, ColorRecord, UNNAMED_CHINESE, UNNAMED_ENGLISH};

/// The RGB coordinates of a raw record, before range checking.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RawRgb {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

/// A raw catalog record, exactly as found in a catalog document.
///
/// Every field is optional, since only [`normalize`] decides what makes a
/// record usable.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub hex: Option<String>,
    pub rgb: Option<RawRgb>,
    pub chinese: Option<String>,
    pub english: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub guofeng: Option<String>,
    pub pantone: Option<String>,
}

impl TryFrom<Value> for RawRecord {
    type Error = SkipReason;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(SkipReason::Malformed);
        }
        serde_json::from_value(value).map_err(|_| SkipReason::Malformed)
    }
}

fn to_channel(value: i64) -> Result<u8, SkipReason> {
    u8::try_from(value).map_err(|_| SkipReason::OutOfRange(value))
}

/// Normalize a raw record into a color record.
///
/// The record must have a well-formed `hex` and `rgb` coordinates within
/// `0..=255`. Absent names become the sentinel names, absent or unknown
/// categories become [`Category::Other`], duplicate tags are dropped, and
/// `null`, empty, or `"null"` traditional names and Pantone codes mean
/// absent.
///
/// ```
/// # use swatchbook::{normalize, Category, RawRecord, RawRgb};
/// let raw = RawRecord {
///     hex: Some("#1661ab".into()),
///     rgb: Some(RawRgb { r: 22, g: 97, b: 171 }),
///     chinese: Some("靛青".into()),
///     category: Some("蓝色系".into()),
///     guofeng: Some("null".into()),
///     ..Default::default()
/// };
/// let record = normalize(raw)?;
/// assert_eq!(record.hex(), "#1661AB");
/// assert_eq!(record.english(), "Unnamed");
/// assert_eq!(record.category(), Category::Blue);
/// assert_eq!(record.guofeng(), None);
/// # Ok::<(), swatchbook::error::SkipReason>(())
/// ```
pub fn normalize(raw: RawRecord) -> Result<ColorRecord, SkipReason> {
    let hex: Rgb = raw
        .hex
        .as_deref()
        .ok_or(SkipReason::MissingHex)?
        .parse()
        .map_err(SkipReason::MalformedHex)?;
    let RawRgb { r, g, b } = raw.rgb.ok_or(SkipReason::MissingRgb)?;
    let rgb = Rgb::new(to_channel(r)?, to_channel(g)?, to_channel(b)?);

    let category = raw
        .category
        .as_deref()
        .and_then(Category::from_name)
        .unwrap_or(Category::Other);

    let mut record = ColorRecord::with_hex(hex, rgb)
        .with_names(
            raw.chinese.unwrap_or_else(|| UNNAMED_CHINESE.to_owned()),
            raw.english.unwrap_or_else(|| UNNAMED_ENGLISH.to_owned()),
        )
        .with_category(category)
        .with_tags(raw.tags.unwrap_or_default());
    record.set_optional_names(present(raw.guofeng), present(raw.pantone));
    Ok(record)
}

// ====================================================================================================================

/// A raw record that did not make it into the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRecord {
    /// The record's index in the document's `colors` array.
    pub index: usize,
    /// The reason for skipping the record.
    pub reason: SkipReason,
}

/// The result of ingesting a catalog document.
#[derive(Clone, Debug)]
pub struct Ingestion {
    pub catalog: Catalog,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Deserialize)]
struct RawCatalog {
    colors: Vec<Value>,
}

/// Ingest an already parsed catalog document.
pub(crate) fn ingest_value(document: Value) -> Result<Ingestion, IngestionError> {
    if !document.is_object() {
        return Err(IngestionError::Shape(serde::de::Error::custom(
            "catalog document is not a JSON object",
        )));
    }

    let RawCatalog { colors } = serde_json::from_value(document)?;
    let records = colors
        .into_iter()
        .map(|value| RawRecord::try_from(value).and_then(normalize));
    Ok(collect(records))
}

/// Collect normalized records into a catalog, reporting every failure by
/// index. The first record with a given hex color wins.
pub(crate) fn collect<I>(records: I) -> Ingestion
where
    I: IntoIterator<Item = Result<ColorRecord, SkipReason>>,
{
    let mut catalog = Catalog::default();
    let mut skipped = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let outcome = record.and_then(|record| catalog.push(record));
        if let Err(reason) = outcome {
            warn!(index, %reason, "skipping catalog record");
            skipped.push(SkippedRecord { index, reason });
        }
    }

    debug!(
        colors = catalog.len(),
        skipped = skipped.len(),
        "built color catalog"
    );
    Ingestion { catalog, skipped }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::{ingest_value, normalize, RawRecord, RawRgb};
    use crate::error::{ColorFormatError, IngestionError, SkipReason};
    use crate::record::Category;

    fn raw(hex: &str, r: i64, g: i64, b: i64) -> RawRecord {
        RawRecord {
            hex: Some(hex.to_owned()),
            rgb: Some(RawRgb { r, g, b }),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize() -> Result<(), SkipReason> {
        let record = normalize(RawRecord {
            chinese: Some(" ".to_owned()),
            english: Some("Vermilion".to_owned()),
            category: Some("red".to_owned()),
            tags: Some(vec!["古典".to_owned(), "古典".to_owned()]),
            pantone: Some(String::new()),
            ..raw("ff4c00", 255, 76, 0)
        })?;

        assert_eq!(record.hex(), "#FF4C00");
        assert_eq!(record.chinese(), "未命名");
        assert_eq!(record.english(), "Vermilion");
        assert_eq!(record.category(), Category::Red);
        assert_eq!(record.tags(), ["古典"]);
        assert_eq!(record.pantone(), None);
        Ok(())
    }

    #[test]
    fn test_normalize_failures() {
        assert_eq!(
            normalize(RawRecord::default()),
            Err(SkipReason::MissingHex)
        );
        assert_eq!(
            normalize(RawRecord {
                rgb: None,
                ..raw("#000000", 0, 0, 0)
            }),
            Err(SkipReason::MissingRgb)
        );
        assert_eq!(
            normalize(raw("#0000", 0, 0, 0)),
            Err(SkipReason::MalformedHex(ColorFormatError::UnexpectedCharacters))
        );
        assert_eq!(
            normalize(raw("#000000", 0, 256, 0)),
            Err(SkipReason::OutOfRange(256))
        );
        assert_eq!(
            normalize(raw("#000000", -1, 0, 0)),
            Err(SkipReason::OutOfRange(-1))
        );
        assert_eq!(
            normalize(RawRecord {
                category: Some("青色系".to_owned()),
                ..raw("#000000", 0, 0, 0)
            })
            .map(|r| r.category()),
            Ok(Category::Other)
        );
    }

    #[test]
    fn test_ingest() -> Result<(), IngestionError> {
        let document = json!({
            "colors": [
                { "hex": "#FF0000", "rgb": { "r": 255, "g": 0, "b": 0 }, "chinese": "红" },
                { "hex": "#00FF00" },
                "not a record",
                { "hex": "#ff0000", "rgb": { "r": 255, "g": 0, "b": 0 }, "chinese": "又红" },
                { "hex": "#0000FF", "rgb": { "r": 0, "g": 0, "b": 255 }, "tags": [1, 2] },
                { "hex": "#FFFFFF", "rgb": { "r": 255, "g": 255, "b": 255 }, "guofeng": null },
            ]
        });

        let ingestion = ingest_value(document)?;
        assert_eq!(ingestion.catalog.len(), 2);
        assert_eq!(ingestion.catalog.records()[0].chinese(), "红");

        let skipped: Vec<_> = ingestion
            .skipped
            .iter()
            .map(|s| (s.index, s.reason.clone()))
            .collect();
        assert_eq!(
            skipped,
            vec![
                (1, SkipReason::MissingRgb),
                (2, SkipReason::Malformed),
                (3, SkipReason::DuplicateHex("#FF0000".to_owned())),
                (4, SkipReason::Malformed),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_ingest_shape() {
        assert!(matches!(
            ingest_value(json!([])),
            Err(IngestionError::Shape(_))
        ));
        assert!(matches!(
            ingest_value(json!({ "colours": [] })),
            Err(IngestionError::Shape(_))
        ));
        assert!(matches!(
            ingest_value(json!({ "colors": {} })),
            Err(IngestionError::Shape(_))
        ));
    }
}

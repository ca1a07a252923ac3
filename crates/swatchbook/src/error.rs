//! Utility module with swatchbook's errors.

use thiserror::Error;

/// An erroneous color format.
///
/// Similarity ranking, scheme generation, catalog lookup, and format
/// conversion all accept colors as hexadecimal strings. Each of them fails
/// with this error if the string does not describe a 24-bit color, without
/// affecting any catalog.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    /// A color that does not have exactly six hexadecimal digits after the
    /// optional `#`. For example, `#FFF` has too few digits, whereas
    /// `#💩0000` has the right number of bytes but not of characters.
    #[error("color should have 6 hexadecimal digits with optional `#` prefix")]
    UnexpectedCharacters,

    /// A color with six characters, at least one of which is not a
    /// hexadecimal digit. For example, `#00GG00`.
    #[error("color should consist of hexadecimal digits but does not")]
    MalformedHex,

    /// A conversion target other than `hex`, `rgb`, `hsl`, `cmyk`, `lab`, or
    /// `oklab`.
    #[error("color format should be `hex`, `rgb`, `hsl`, `cmyk`, `lab`, or `oklab`")]
    UnknownFormat,
}

// ====================================================================================================================

/// An error that aborts catalog ingestion.
///
/// Ingestion is all or nothing. If the document as a whole is unusable, no
/// catalog is produced. Individual unusable records are not errors; they are
/// reported as [`SkippedRecord`](crate::SkippedRecord)s instead.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The document could not be read.
    #[error("could not read catalog document")]
    Io(#[source] std::io::Error),

    /// The document is not valid JSON.
    #[error("catalog document is not valid JSON")]
    Syntax(#[source] serde_json::Error),

    /// The document is valid JSON but not an object with a `colors` array.
    #[error("catalog document should be an object with a `colors` array")]
    Shape(#[source] serde_json::Error),
}

impl From<serde_json::Error> for IngestionError {
    fn from(value: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match value.classify() {
            Category::Io => Self::Io(value.into()),
            Category::Syntax | Category::Eof => Self::Syntax(value),
            Category::Data => Self::Shape(value),
        }
    }
}

impl From<std::io::Error> for IngestionError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// The reason for skipping a raw catalog record.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// The record is not a JSON object or has fields of the wrong type.
    #[error("record should be an object with well-typed fields")]
    Malformed,

    /// The record has no `hex` field.
    #[error("record has no hex color")]
    MissingHex,

    /// The record has no `rgb` field.
    #[error("record has no rgb coordinates")]
    MissingRgb,

    /// The record's `hex` field is not a 24-bit color.
    #[error("record has malformed hex color: {0}")]
    MalformedHex(ColorFormatError),

    /// One of the record's `rgb` coordinates lies outside `0..=255`.
    #[error("record has rgb coordinate {0} outside 0..=255")]
    OutOfRange(i64),

    /// Another record with the same hex color came first.
    #[error("record duplicates hex color {0}")]
    DuplicateHex(String),
}

// ====================================================================================================================

/// An unknown color scheme type.
///
/// Valid scheme types are `complementary`, `triadic`, `analogous`,
/// `split-complementary`, `tetradic`, and `monochromatic`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown color scheme type `{name}`")]
pub struct SchemeTypeError {
    pub name: String,
}

impl SchemeTypeError {
    /// Create a new scheme type error.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}

// ====================================================================================================================

/// An unrecognized sort field or order.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SortFieldError {
    #[error("sort field should be `name`, `english`, `category`, `hue`, `brightness`, `saturation`, or `lightness` but is `{0}`")]
    UnknownField(String),

    #[error("sort order should be `asc` or `desc` but is `{0}`")]
    UnknownOrder(String),
}

/// An unrecognized filter key or value.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FilterKeyError {
    #[error("filter key should be `category`, `tags`, or `guofeng` but is `{0}`")]
    UnknownKey(String),

    #[error("filter `{key}` does not accept value `{value}`")]
    InvalidValue { key: String, value: String },
}

// ====================================================================================================================

/// An error while loading the engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration file")]
    Io(#[from] std::io::Error),

    #[error("could not parse configuration")]
    Parse(#[from] toml::de::Error),

    #[error("configuration parameter `{parameter}` {reason}")]
    Invalid {
        parameter: &'static str,
        reason: &'static str,
    },
}

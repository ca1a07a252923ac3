use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SortFieldError;
use crate::record::ColorRecord;

/// The field to sort by.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// The Chinese name, falling back on the English name.
    #[default]
    Name,
    English,
    /// The category label.
    Category,
    Hue,
    Brightness,
    Saturation,
    Lightness,
}

impl SortField {
    /// Get this field's name.
    pub const fn name(&self) -> &'static str {
        use SortField::*;

        match *self {
            Name => "name",
            English => "english",
            Category => "category",
            Hue => "hue",
            Brightness => "brightness",
            Saturation => "saturation",
            Lightness => "lightness",
        }
    }

    /// Determine whether this field is textual.
    pub const fn is_textual(&self) -> bool {
        matches!(*self, Self::Name | Self::English | Self::Category)
    }
}

impl std::str::FromStr for SortField {
    type Err = SortFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use SortField::*;

        match s.trim() {
            "name" | "chinese" => Ok(Name),
            "english" => Ok(English),
            "category" => Ok(Category),
            "hue" => Ok(Hue),
            "brightness" => Ok(Brightness),
            "saturation" => Ok(Saturation),
            "lightness" => Ok(Lightness),
            _ => Err(SortFieldError::UnknownField(s.to_owned())),
        }
    }
}

/// The sort direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Get the opposite direction.
    #[must_use = "method returns a new order and does not mutate original value"]
    pub const fn reversed(&self) -> Self {
        match *self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match *self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = SortFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(SortFieldError::UnknownOrder(s.to_owned())),
        }
    }
}

/// A sort field and direction, by default by name and ascending.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    /// The sort key.
    pub field: SortField,
    /// The direction.
    pub order: SortOrder,
}

impl SortSpec {
    /// Create a new sort specification.
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Parse field and order names.
    pub fn parse(field: &str, order: &str) -> Result<Self, SortFieldError> {
        Ok(Self::new(field.parse()?, order.parse()?))
    }

    /// Parse field and order names, falling back on sorting by name and
    /// ascending with a warning.
    pub fn parse_lenient(field: &str, order: &str) -> Self {
        Self::parse(field, order).unwrap_or_else(|error| {
            warn!(%error, "falling back on default sort");
            Self::default()
        })
    }

    /// Get the same field with the opposite direction.
    #[must_use = "method returns a new sort specification and does not mutate original value"]
    pub const fn toggled(&self) -> Self {
        Self::new(self.field, self.order.reversed())
    }
}

// ====================================================================================================================

/// A record's sort key. Absent names are `None`.
enum Key<'a> {
    Text(Option<&'a str>),
    Number(u16),
}

fn key(record: &ColorRecord, field: SortField) -> Key<'_> {
    use SortField::*;

    match field {
        Name => Key::Text(record.name()),
        English => Key::Text(record.english_name()),
        Category => Key::Text(Some(record.category().label())),
        Hue => Key::Number(record.hsl().h()),
        Brightness => Key::Number(record.brightness() as u16),
        Saturation => Key::Number(record.hsl().s() as u16),
        Lightness => Key::Number(record.hsl().l() as u16),
    }
}

/// Chinese collation, or code point order if that is not available.
struct Collation(Option<Collator>);

impl Collation {
    fn chinese() -> Self {
        match Collator::try_new(&locale!("zh").into(), CollatorOptions::new()) {
            Ok(collator) => Self(Some(collator)),
            Err(error) => {
                warn!(?error, "zh collation unavailable, sorting by code point");
                Self(None)
            }
        }
    }

    fn compare(&self, s1: &str, s2: &str) -> Ordering {
        match &self.0 {
            Some(collator) => collator.compare(s1, s2),
            None => s1.cmp(s2),
        }
    }
}

/// Sort the view.
///
/// The sort is stable. Textual fields use Chinese collation, i.e., pinyin
/// order, whereas numeric fields compare as integers. Records without a name
/// come last in either direction.
pub fn sort<'a>(mut view: Vec<&'a ColorRecord>, spec: SortSpec) -> Vec<&'a ColorRecord> {
    let collation = if spec.field.is_textual() {
        Collation::chinese()
    } else {
        Collation(None)
    };

    view.sort_by(|r1, r2| match (key(r1, spec.field), key(r2, spec.field)) {
        (Key::Text(Some(s1)), Key::Text(Some(s2))) => spec.order.apply(collation.compare(s1, s2)),
        (Key::Text(Some(_)), Key::Text(None)) => Ordering::Less,
        (Key::Text(None), Key::Text(Some(_))) => Ordering::Greater,
        (Key::Number(n1), Key::Number(n2)) => spec.order.apply(n1.cmp(&n2)),
        _ => Ordering::Equal,
    });
    view
}

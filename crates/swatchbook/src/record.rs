//! Catalog records and their categories.

use serde::{Deserialize, Serialize, Serializer};

use crate::color::{Hsl, Rgb};

/// The Chinese name of records without one.
pub const UNNAMED_CHINESE: &str = "未命名";

/// The English name of records without one.
pub const UNNAMED_ENGLISH: &str = "Unnamed";

/// A color category.
///
/// Catalogs sort their swatches into ten color families. Records without a
/// category or with an unrecognized one belong to [`Category::Other`]. Serde
/// uses the Chinese labels found in catalog documents but also accepts the
/// English names when deserializing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "红色系", alias = "red")]
    Red,
    #[serde(rename = "橙色系", alias = "orange")]
    Orange,
    #[serde(rename = "黄色系", alias = "yellow")]
    Yellow,
    #[serde(rename = "绿色系", alias = "green")]
    Green,
    #[serde(rename = "蓝色系", alias = "blue")]
    Blue,
    #[serde(rename = "紫色系", alias = "purple")]
    Purple,
    #[serde(rename = "粉色系", alias = "pink")]
    Pink,
    #[serde(rename = "灰色系", alias = "gray")]
    Gray,
    #[serde(rename = "黑白系", alias = "black-white")]
    BlackWhite,
    #[serde(rename = "棕色系", alias = "brown")]
    Brown,
    #[serde(rename = "其他", alias = "other")]
    Other,
}

impl Category {
    /// The number of categories, including [`Category::Other`].
    pub const COUNT: usize = 11;

    /// Get an iterator over all categories in declaration order.
    pub fn all() -> impl Iterator<Item = Category> {
        use Category::*;

        [
            Red, Orange, Yellow, Green, Blue, Purple, Pink, Gray, BlackWhite, Brown, Other,
        ]
        .into_iter()
    }

    /// Get this category's Chinese label, e.g., `红色系`.
    pub const fn label(&self) -> &'static str {
        use Category::*;

        match *self {
            Red => "红色系",
            Orange => "橙色系",
            Yellow => "黄色系",
            Green => "绿色系",
            Blue => "蓝色系",
            Purple => "紫色系",
            Pink => "粉色系",
            Gray => "灰色系",
            BlackWhite => "黑白系",
            Brown => "棕色系",
            Other => "其他",
        }
    }

    /// Get this category's English name, e.g., `red`.
    pub const fn english(&self) -> &'static str {
        use Category::*;

        match *self {
            Red => "red",
            Orange => "orange",
            Yellow => "yellow",
            Green => "green",
            Blue => "blue",
            Purple => "purple",
            Pink => "pink",
            Gray => "gray",
            BlackWhite => "black-white",
            Brown => "brown",
            Other => "other",
        }
    }

    /// Look up the category with the given Chinese label or English name.
    ///
    /// English names are matched case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().find(|c| c.label() == name || c.english().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ====================================================================================================================

/// Normalize an optional name: trimmed, with empty strings and the literal
/// `null` meaning absent.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty() && v != "null")
}

fn serialize_hex<S: Serializer>(color: &Rgb, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(color)
}

/// A catalog record.
///
/// A record describes one named color swatch. It is immutable: the derived
/// attributes, i.e., HSL coordinates, brightness, and contrast color, are
/// computed from the RGB coordinates exactly once, when the record is created.
/// Associations such as favorites or scheme membership are tracked
/// elsewhere, by [`ColorRecord::hex`].
///
/// Records are created by [`normalize`](crate::normalize) during ingestion or
/// directly from a 24-bit color:
///
/// ```
/// # use swatchbook::{Category, ColorRecord, Rgb};
/// let record = ColorRecord::from_rgb(Rgb::new(0xe6, 0x00, 0x12))
///     .with_names("中国红", "China Red")
///     .with_category(Category::Red)
///     .with_guofeng("朱红");
/// assert_eq!(record.hex(), "#E60012");
/// assert_eq!(record.hsl().h(), 355);
/// assert_eq!(record.guofeng(), Some("朱红"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorRecord {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    chinese: String,
    english: String,
    category: Category,
    tags: Vec<String>,
    guofeng: Option<String>,
    pantone: Option<String>,
    brightness: u8,
    #[serde(serialize_with = "serialize_hex")]
    contrast: Rgb,
}

impl ColorRecord {
    /// Create a new record for the given color, without names, tags, or
    /// traditional name, in category [`Category::Other`].
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self::with_hex(rgb, rgb)
    }

    /// Create a new record with the given key color and coordinates.
    ///
    /// Catalog documents carry both. The key determines the record's identity
    /// and all derived attributes follow from the coordinates.
    pub(crate) fn with_hex(hex: Rgb, rgb: Rgb) -> Self {
        Self {
            hex: hex.to_string(),
            rgb,
            hsl: rgb.to_hsl(),
            chinese: UNNAMED_CHINESE.to_owned(),
            english: UNNAMED_ENGLISH.to_owned(),
            category: Category::Other,
            tags: Vec::new(),
            guofeng: None,
            pantone: None,
            brightness: rgb.brightness(),
            contrast: rgb.contrast(),
        }
    }

    /// Replace the display names. Empty names fall back to the sentinel
    /// names.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn with_names<S: Into<String>, T: Into<String>>(mut self, chinese: S, english: T) -> Self {
        self.chinese = present(Some(chinese.into())).unwrap_or_else(|| UNNAMED_CHINESE.to_owned());
        self.english = present(Some(english.into())).unwrap_or_else(|| UNNAMED_ENGLISH.to_owned());
        self
    }

    /// Replace the category.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Replace the tags. Empty and duplicate tags are dropped; the remaining
    /// tags keep their order.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.clear();
        for tag in tags {
            let tag = tag.into();
            let tag = tag.trim();
            if !tag.is_empty() && !self.tags.iter().any(|t| t == tag) {
                self.tags.push(tag.to_owned());
            }
        }
        self
    }

    /// Replace the traditional name. Empty strings and `null` mean no name.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn with_guofeng<S: Into<String>>(mut self, guofeng: S) -> Self {
        self.guofeng = present(Some(guofeng.into()));
        self
    }

    /// Replace the Pantone code. Empty strings and `null` mean no code.
    #[must_use = "method returns a new record and does not mutate original value"]
    pub fn with_pantone<S: Into<String>>(mut self, pantone: S) -> Self {
        self.pantone = present(Some(pantone.into()));
        self
    }

    pub(crate) fn set_optional_names(&mut self, guofeng: Option<String>, pantone: Option<String>) {
        self.guofeng = present(guofeng);
        self.pantone = present(pantone);
    }

    /// Get the canonical hexadecimal color `#RRGGBB`, which is this record's
    /// key.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Get the RGB coordinates.
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Get the rounded HSL coordinates.
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    /// Get the Chinese name, which may be [`UNNAMED_CHINESE`].
    pub fn chinese(&self) -> &str {
        &self.chinese
    }

    /// Get the English name, which may be [`UNNAMED_ENGLISH`].
    pub fn english(&self) -> &str {
        &self.english
    }

    /// Get the Chinese name if there is one, the English name otherwise, or
    /// `None` if the record has neither.
    pub fn name(&self) -> Option<&str> {
        self.chinese_name().or_else(|| self.english_name())
    }

    /// Get the Chinese name unless it is the sentinel.
    pub fn chinese_name(&self) -> Option<&str> {
        Some(self.chinese.as_str()).filter(|n| *n != UNNAMED_CHINESE)
    }

    /// Get the English name unless it is the sentinel.
    pub fn english_name(&self) -> Option<&str> {
        Some(self.english.as_str()).filter(|n| *n != UNNAMED_ENGLISH)
    }

    /// Get the color family.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Get the tags in first-seen order, without duplicates.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Determine whether this record carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Get the traditional name, if any.
    pub fn guofeng(&self) -> Option<&str> {
        self.guofeng.as_deref()
    }

    /// Get the Pantone code, if any.
    pub fn pantone(&self) -> Option<&str> {
        self.pantone.as_deref()
    }

    /// Get the luma `0..=255`.
    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Get the more legible text color, black or white.
    pub fn contrast(&self) -> Rgb {
        self.contrast
    }
}

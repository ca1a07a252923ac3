use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::FilterKeyError;
use crate::record::{Category, ColorRecord};

/// A conjunction of exact predicates over color records.
///
/// A record passes if it belongs to the category (when set), carries at
/// least one of the tags (when there are any), and has a traditional name
/// (when required). The default filter set passes every record.
///
/// ```
/// # use swatchbook::{Category, FilterSet};
/// let mut filters = FilterSet::default();
/// filters.set("category", "蓝色系");
/// filters.set("tags", "经典");
/// filters.set("tags", "经典");
/// filters.set("hasGuofeng", "true");
/// assert_eq!(filters.category, Some(Category::Blue));
/// assert!(filters.tags.is_empty());
/// assert!(filters.guofeng_only);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    /// The only category to keep, if any.
    pub category: Option<Category>,
    /// Keep records with at least one of these tags, unless empty.
    pub tags: Vec<String>,
    /// Keep only records with a traditional name.
    pub guofeng_only: bool,
}

impl FilterSet {
    /// Create a new filter set that passes every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the given category.
    #[must_use = "method returns a new filter set and does not mutate original value"]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Add the given tag to the accepted tags.
    #[must_use = "method returns a new filter set and does not mutate original value"]
    pub fn with_tag<S: Into<String>>(mut self, tag: S) -> Self {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    /// Require a traditional name.
    #[must_use = "method returns a new filter set and does not mutate original value"]
    pub fn with_guofeng_only(mut self) -> Self {
        self.guofeng_only = true;
        self
    }

    /// Determine whether this filter set passes every record.
    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.tags.is_empty() && !self.guofeng_only
    }

    /// Add the tag if absent or remove it if present.
    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(index) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(index);
        } else {
            self.tags.push(tag.to_owned());
        }
    }

    /// Update this filter set by key and value.
    ///
    /// The keys are:
    ///
    ///   * `category` with a category label or English name, or the empty
    ///     string for any category;
    ///   * `tags` or `tag`, which toggles the given tag;
    ///   * `guofeng`, `hasGuofeng`, or `guofeng_only` with `true` or `false`.
    pub fn try_set(&mut self, key: &str, value: &str) -> Result<(), FilterKeyError> {
        let invalid = || FilterKeyError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        };

        match key {
            "category" => {
                let value = value.trim();
                self.category = if value.is_empty() || value == "all" {
                    None
                } else {
                    Some(Category::from_name(value).ok_or_else(invalid)?)
                };
            }
            "tags" | "tag" => {
                let tag = value.trim();
                if tag.is_empty() {
                    return Err(invalid());
                }
                self.toggle_tag(tag);
            }
            "guofeng" | "hasGuofeng" | "guofeng_only" => {
                self.guofeng_only = match value.trim() {
                    "true" | "1" => true,
                    "false" | "0" | "" => false,
                    _ => return Err(invalid()),
                };
            }
            _ => return Err(FilterKeyError::UnknownKey(key.to_owned())),
        }

        Ok(())
    }

    /// Update this filter set by key and value, ignoring unknown keys and
    /// invalid values with a warning.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Err(error) = self.try_set(key, value) {
            warn!(%error, "ignoring filter update");
        }
    }

    /// Reset this filter set so that it passes every record.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Determine whether the record passes this filter set.
    pub fn matches(&self, record: &ColorRecord) -> bool {
        if let Some(category) = self.category {
            if record.category() != category {
                return false;
            }
        }

        if !self.tags.is_empty() && !self.tags.iter().any(|t| record.has_tag(t)) {
            return false;
        }

        !self.guofeng_only || record.guofeng().is_some()
    }
}

/// Filter the view, keeping passing records in view order.
pub fn filter<'a>(mut view: Vec<&'a ColorRecord>, filters: &FilterSet) -> Vec<&'a ColorRecord> {
    if !filters.is_empty() {
        view.retain(|record| filters.matches(record));
    }
    view
}

#[cfg(test)]
mod test {
    use super::{filter, FilterSet};
    use crate::catalog::Catalog;
    use crate::color::Rgb;
    use crate::error::FilterKeyError;
    use crate::record::{Category, ColorRecord};

    fn sample() -> Catalog {
        Catalog::from_records([
            ColorRecord::from_rgb(Rgb::new(200, 0, 0))
                .with_category(Category::Red)
                .with_tags(["经典"])
                .with_guofeng("朱红"),
            ColorRecord::from_rgb(Rgb::new(0, 0, 200))
                .with_category(Category::Blue)
                .with_tags(["经典"]),
            ColorRecord::from_rgb(Rgb::new(210, 0, 0))
                .with_category(Category::Red)
                .with_tags(["现代"])
                .with_guofeng("null"),
            ColorRecord::from_rgb(Rgb::new(220, 0, 0))
                .with_category(Category::Red)
                .with_tags(["现代", "经典"]),
        ])
        .catalog
    }

    fn hexes(view: &[&ColorRecord]) -> Vec<String> {
        view.iter().map(|r| r.hex().to_owned()).collect()
    }

    #[test]
    fn test_filter() {
        let catalog = sample();

        assert_eq!(filter(catalog.view(), &FilterSet::new()).len(), 4);

        let red_classics = FilterSet::new()
            .with_category(Category::Red)
            .with_tag("经典");
        assert_eq!(
            hexes(&filter(catalog.view(), &red_classics)),
            vec!["#C80000", "#DC0000"]
        );

        let traditional = FilterSet::new().with_guofeng_only();
        assert_eq!(hexes(&filter(catalog.view(), &traditional)), vec!["#C80000"]);

        let either = FilterSet::new().with_tag("现代").with_tag("不存在");
        assert_eq!(
            hexes(&filter(catalog.view(), &either)),
            vec!["#D20000", "#DC0000"]
        );
    }

    #[test]
    fn test_idempotence() {
        let catalog = sample();
        let filters = FilterSet::new().with_tag("经典");

        let once = filter(catalog.view(), &filters);
        let twice = filter(once.clone(), &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set() {
        let mut filters = FilterSet::new();
        assert_eq!(filters.try_set("category", "red"), Ok(()));
        assert_eq!(filters.category, Some(Category::Red));
        assert_eq!(filters.try_set("category", ""), Ok(()));
        assert_eq!(filters.category, None);

        assert_eq!(
            filters.try_set("color", "red"),
            Err(FilterKeyError::UnknownKey("color".to_owned()))
        );
        assert_eq!(
            filters.try_set("guofeng", "maybe"),
            Err(FilterKeyError::InvalidValue {
                key: "guofeng".to_owned(),
                value: "maybe".to_owned()
            })
        );

        filters.set("tags", "现代");
        filters.set("tags", "经典");
        filters.set("tags", "现代");
        filters.set("unknown", "whatever");
        assert_eq!(filters.tags, vec!["经典"]);

        filters.clear();
        assert!(filters.is_empty(), "cleared filters should be empty");
    }
}

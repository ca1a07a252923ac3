use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::record::ColorRecord;
use crate::Float;

/// A free-text search query.
///
/// Queries are case-insensitive and split into white-space separated tokens.
/// A query without tokens matches every record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery {
    text: String,
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self { text: text.into() }
    }

    /// Access the query text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Determine whether this query matches everything.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn tokens(&self) -> Vec<Vec<char>> {
        self.text
            .split_whitespace()
            .map(|token| token.to_lowercase().chars().collect())
            .collect()
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SearchQuery {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// The relative weight of each searchable field.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    /// The Chinese name, default 0.3.
    pub chinese: Float,
    /// The English name, default 0.3.
    pub english: Float,
    /// The canonical hex color, default 0.2.
    pub hex: Float,
    /// The traditional name, default 0.2.
    pub guofeng: Float,
    /// Each tag, default 0.1.
    pub tags: Float,
    /// The category label and English name, default 0.1.
    pub category: Float,
    /// The Pantone code, default 0.1.
    pub pantone: Float,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            chinese: 0.3,
            english: 0.3,
            hex: 0.2,
            guofeng: 0.2,
            tags: 0.1,
            category: 0.1,
            pantone: 0.1,
        }
    }
}

impl FieldWeights {
    pub(crate) fn iter(&self) -> impl Iterator<Item = (&'static str, Float)> {
        [
            ("chinese", self.chinese),
            ("english", self.english),
            ("hex", self.hex),
            ("guofeng", self.guofeng),
            ("tags", self.tags),
            ("category", self.category),
            ("pantone", self.pantone),
        ]
        .into_iter()
    }
}

// ====================================================================================================================

/// Compute the smallest edit distance between the pattern and any substring
/// of the text.
///
/// This is the dynamic program for edit distance with a free starting point
/// in the text, i.e., the top row is all zeros, keeping only one column.
fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    let mut column: Vec<usize> = (0..=pattern.len()).collect();
    let mut best = pattern.len();

    for &t in text {
        let mut diagonal = column[0];
        column[0] = 0;

        for (index, &p) in pattern.iter().enumerate() {
            let left = column[index + 1];
            let substitution = diagonal + usize::from(p != t);
            column[index + 1] = substitution.min(left + 1).min(column[index] + 1);
            diagonal = left;
        }

        best = best.min(column[pattern.len()]);
    }

    best
}

/// Determine how well a token matches a field value.
///
/// A token that occurs in the value scores 1.0 at the start and 0.9
/// elsewhere. Otherwise, a token may be misspelled by up to a quarter of its
/// characters, scoring at most 0.9 and less for every edit.
fn token_quality(token: &[char], value: &[char]) -> Float {
    if token.is_empty() {
        return 1.0;
    } else if value.starts_with(token) {
        return 1.0;
    } else if value.windows(token.len()).any(|w| w == token) {
        return 0.9;
    }

    let budget = token.len() / 4;
    if budget == 0 {
        return 0.0;
    }

    let distance = substring_distance(token, value);
    if distance <= budget {
        0.9 * (1.0 - distance as Float / token.len() as Float)
    } else {
        0.0
    }
}

/// Collect a record's searchable values for the named field. Sentinel names
/// are not searchable.
fn field_values<'a>(record: &'a ColorRecord, field: &str) -> Vec<&'a str> {
    match field {
        "chinese" => record.chinese_name().into_iter().collect(),
        "english" => record.english_name().into_iter().collect(),
        "hex" => vec![record.hex()],
        "guofeng" => record.guofeng().into_iter().collect(),
        "tags" => record.tags().iter().map(String::as_str).collect(),
        "category" => vec![record.category().label(), record.category().english()],
        "pantone" => record.pantone().into_iter().collect(),
        _ => Vec::new(),
    }
}

/// A compiled search query.
pub(crate) struct Matcher<'c> {
    tokens: Vec<Vec<char>>,
    config: &'c SearchConfig,
}

impl<'c> Matcher<'c> {
    pub fn new(query: &SearchQuery, config: &'c SearchConfig) -> Self {
        Self {
            tokens: query.tokens(),
            config,
        }
    }

    /// Determine the record's relevance, if it matches at all.
    ///
    /// Each token is scored by the field it matches best, so that different
    /// tokens may match different fields. A record matches if the mean token
    /// quality clears the tolerance. Its relevance is the mean of the largest
    /// weighted quality per token.
    pub fn relevance(&self, record: &ColorRecord) -> Option<Float> {
        let fields: Vec<(Float, Vec<Vec<char>>)> = self
            .config
            .weights
            .iter()
            .map(|(field, weight)| {
                let values = field_values(record, field)
                    .into_iter()
                    .map(|value| value.to_lowercase().chars().collect())
                    .collect();
                (weight, values)
            })
            .collect();

        let mut quality = 0.0;
        let mut relevance = 0.0;
        for token in &self.tokens {
            let mut best_quality: Float = 0.0;
            let mut best_relevance: Float = 0.0;
            for (weight, values) in &fields {
                let q = values
                    .iter()
                    .map(|value| token_quality(token, value))
                    .fold(0.0, Float::max);
                best_quality = best_quality.max(q);
                best_relevance = best_relevance.max(weight * q);
            }
            quality += best_quality;
            relevance += best_relevance;
        }

        let count = self.tokens.len() as Float;
        let quality = quality / count;
        (quality > 0.0 && quality >= 1.0 - self.config.tolerance).then_some(relevance / count)
    }
}

/// Search the view for the given query.
///
/// An empty query returns the view unchanged. Otherwise, the result contains
/// the matching records by descending relevance, with equally relevant
/// records in view order.
pub fn search<'a>(
    view: Vec<&'a ColorRecord>,
    query: &SearchQuery,
    config: &SearchConfig,
) -> Vec<&'a ColorRecord> {
    if query.is_empty() {
        return view;
    }

    let matcher = Matcher::new(query, config);
    let mut matches: Vec<(Float, &'a ColorRecord)> = view
        .into_iter()
        .filter_map(|record| matcher.relevance(record).map(|score| (score, record)))
        .collect();

    matches.sort_by(|(s1, _), (s2, _)| s2.total_cmp(s1));
    matches.into_iter().map(|(_, record)| record).collect()
}

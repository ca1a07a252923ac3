//! Ranking catalog records by their similarity to a reference color.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::color::{Hsl, Rgb};
use crate::config::SimilarityConfig;
use crate::error::ColorFormatError;
use crate::record::ColorRecord;
use crate::Float;

/// The weights of hue, saturation, and lightness differences.
///
/// Weights deserialize from either a preset name, `balanced` or
/// `saturation-leaning`, or a table with `hue`, `saturation`, and
/// `lightness` entries.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WeightsRepr")]
pub struct SimilarityWeights {
    /// The weight of the hue difference in degrees.
    pub hue: Float,
    /// The weight of the saturation difference in percent.
    pub saturation: Float,
    /// The weight of the lightness difference in percent.
    pub lightness: Float,
}

impl SimilarityWeights {
    /// The default weights, 0.6 for hue and 0.2 each for saturation and
    /// lightness.
    pub const BALANCED: Self = Self::new(0.6, 0.2, 0.2);

    /// Alternative weights, 0.6 for hue, 0.25 for saturation, and 0.15 for
    /// lightness.
    pub const SATURATION_LEANING: Self = Self::new(0.6, 0.25, 0.15);

    /// Create new weights.
    pub const fn new(hue: Float, saturation: Float, lightness: Float) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "balanced" => Some(Self::BALANCED),
            "saturation-leaning" => Some(Self::SATURATION_LEANING),
            _ => None,
        }
    }

    /// Score the similarity of two colors between 0 and 100.
    ///
    /// The hue difference is measured around the color wheel and hence never
    /// exceeds 180 degrees. The weighted sum of differences is subtracted
    /// from 100, and the result is clamped to `0..=100`. The score is
    /// symmetric and 100 for identical coordinates.
    pub fn score(&self, hsl1: Hsl, hsl2: Hsl) -> Float {
        let hue = (hsl1.h() % 360).abs_diff(hsl2.h() % 360);
        let hue = hue.min(360 - hue) as Float;
        let saturation = hsl1.s().abs_diff(hsl2.s()) as Float;
        let lightness = hsl1.l().abs_diff(hsl2.l()) as Float;

        let distance = self.hue.mul_add(
            hue,
            self.saturation.mul_add(saturation, self.lightness * lightness),
        );
        (100.0 - distance).clamp(0.0, 100.0)
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self::BALANCED
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WeightsRepr {
    Preset(String),
    Explicit {
        hue: Float,
        saturation: Float,
        lightness: Float,
    },
}

impl TryFrom<WeightsRepr> for SimilarityWeights {
    type Error = String;

    fn try_from(value: WeightsRepr) -> Result<Self, Self::Error> {
        match value {
            WeightsRepr::Preset(name) => Self::preset(&name)
                .ok_or_else(|| format!("unknown similarity weights preset `{}`", name)),
            WeightsRepr::Explicit {
                hue,
                saturation,
                lightness,
            } => Ok(Self::new(hue, saturation, lightness)),
        }
    }
}

// ====================================================================================================================

/// The color to compare catalog records against.
///
/// A reference created from a record excludes that record from the ranking.
/// A reference created from a color excludes the record with the same hex
/// color, if the catalog has one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reference {
    hex: String,
    hsl: Hsl,
}

impl From<&ColorRecord> for Reference {
    fn from(value: &ColorRecord) -> Self {
        Self {
            hex: value.hex().to_owned(),
            hsl: value.hsl(),
        }
    }
}

impl From<Rgb> for Reference {
    fn from(value: Rgb) -> Self {
        Self {
            hex: value.to_string(),
            hsl: value.to_hsl(),
        }
    }
}

impl std::str::FromStr for Reference {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Rgb>().map(Self::from)
    }
}

/// A catalog record and its similarity score.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Similar<'a> {
    /// The ranked record.
    pub record: &'a ColorRecord,
    /// The score between 0 and 100.
    pub score: Float,
}

/// The slack when comparing scores against the cutoff. Weighted sums of
/// integer differences are inexact, and a score that is exactly at the cutoff
/// may come out a few ulps below it.
const SCORE_TOLERANCE: Float = 1e-4;

/// Rank the catalog's records by similarity to the reference.
///
/// Records scoring below `threshold · 100` are dropped, while records scoring
/// exactly `threshold · 100` are kept. The remaining
/// records are ordered by descending score, with equal scores in catalog
/// order, and truncated to `limit`.
///
/// ```
/// # use swatchbook::{similar, Catalog, ColorRecord, Rgb, SimilarityConfig};
/// let catalog = Catalog::from_records([
///     ColorRecord::from_rgb(Rgb::new(255, 0, 0)),
///     ColorRecord::from_rgb(Rgb::new(250, 10, 10)),
///     ColorRecord::from_rgb(Rgb::new(0, 0, 255)),
/// ]).catalog;
///
/// let ranking = similar(&catalog.records()[0], &catalog, &SimilarityConfig::default());
/// assert_eq!(ranking.len(), 1);
/// assert_eq!(ranking[0].record.hex(), "#FA0A0A");
/// ```
pub fn similar<'a, R: Into<Reference>>(
    reference: R,
    catalog: &'a Catalog,
    config: &SimilarityConfig,
) -> Vec<Similar<'a>> {
    let reference = reference.into();
    let cutoff = config.threshold.mul_add(100.0, -SCORE_TOLERANCE);

    let mut ranking: Vec<Similar<'a>> = catalog
        .iter()
        .filter(|record| record.hex() != reference.hex)
        .map(|record| Similar {
            record,
            score: config.weights.score(reference.hsl, record.hsl()),
        })
        .filter(|candidate| candidate.score >= cutoff)
        .collect();

    ranking.sort_by(|s1, s2| s2.score.total_cmp(&s1.score));
    ranking.truncate(config.limit);
    ranking
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{similar, Reference, SimilarityWeights};
    use crate::catalog::Catalog;
    use crate::color::{Hsl, Rgb};
    use crate::config::SimilarityConfig;
    use crate::error::ColorFormatError;
    use crate::record::ColorRecord;
    use crate::Float;

    #[test]
    fn test_score() {
        let weights = SimilarityWeights::default();
        let red = Hsl::new(0, 100, 50);
        let close = |score: Float, expected: Float| (score - expected).abs() < 1e-4;

        assert_eq!(weights.score(red, red), 100.0);
        assert!(
            close(weights.score(red, Hsl::new(350, 100, 50)), 94.0),
            "hue should wrap around"
        );
        assert_eq!(weights.score(red, Hsl::new(180, 100, 50)), 0.0);
        assert!(close(weights.score(red, Hsl::new(30, 80, 40)), 76.0), "balanced");

        let leaning = SimilarityWeights::SATURATION_LEANING;
        assert!(close(leaning.score(red, Hsl::new(30, 80, 40)), 75.5), "leaning");

        // Out-of-range hues are reduced, never underflow
        assert_eq!(
            weights.score(Hsl::new(400, 50, 50), Hsl::new(0, 50, 50)),
            weights.score(Hsl::new(40, 50, 50), Hsl::new(0, 50, 50))
        );
        let hsl = serde_json::from_str::<Hsl>(r#"{"h":400,"s":50,"l":50}"#);
        assert!(hsl.is_err(), "hue 400 should be rejected");
    }

    #[test]
    fn test_symmetry() {
        let weights = SimilarityWeights::default();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..1_000 {
            let mut random_hsl = || {
                Hsl::new(
                    rng.random_range(0..360),
                    rng.random_range(0..=100),
                    rng.random_range(0..=100),
                )
            };
            let hsl1 = random_hsl();
            let hsl2 = random_hsl();

            assert_eq!(weights.score(hsl1, hsl1), 100.0);
            assert_eq!(weights.score(hsl1, hsl2), weights.score(hsl2, hsl1));
        }
    }

    #[test]
    fn test_similar() {
        let catalog = Catalog::from_records([
            ColorRecord::from_rgb(Rgb::new(255, 0, 0)),
            ColorRecord::from_rgb(Rgb::new(0, 0, 255)),
            ColorRecord::from_rgb(Rgb::new(255, 0, 42)),
            ColorRecord::from_rgb(Rgb::new(255, 42, 0)),
            ColorRecord::from_rgb(Rgb::new(230, 0, 0)),
        ])
        .catalog;
        let config = SimilarityConfig::default();

        let ranking = similar(&catalog.records()[0], &catalog, &config);
        let hexes: Vec<_> = ranking.iter().map(|s| s.record.hex()).collect();
        assert_eq!(hexes, vec!["#E60000", "#FF002A", "#FF2A00"]);
        assert!(ranking.iter().all(|s| s.score >= 60.0), "scores should clear the cutoff");

        // A color not in the catalog excludes nothing
        let ranking = similar(Rgb::new(254, 0, 0), &catalog, &config);
        assert_eq!(ranking[0].record.hex(), "#FF0000");
        assert_eq!(ranking[0].score, 100.0);

        let reference: Result<Reference, _> = "#e60000".parse();
        let ranking = reference.map(|r| similar(r, &catalog, &config).len());
        assert_eq!(ranking, Ok(3));
        assert_eq!(
            "#e6000".parse::<Reference>(),
            Err(ColorFormatError::UnexpectedCharacters)
        );

        let config = SimilarityConfig {
            limit: 1,
            ..SimilarityConfig::default()
        };
        assert_eq!(similar(&catalog.records()[0], &catalog, &config).len(), 1);

        let config = SimilarityConfig {
            threshold: 1.0,
            ..SimilarityConfig::default()
        };
        assert!(
            similar(&catalog.records()[0], &catalog, &config).is_empty(),
            "only identical colors score 100"
        );
    }

    #[test]
    fn test_cutoff() {
        // Against black, #F790A5 is hsl(348, 87, 77), so the distance is
        // 0.6·12 + 0.2·87 + 0.2·77 = 40 exactly, but not in floating point
        let catalog = Catalog::from_records([
            ColorRecord::from_rgb(Rgb::new(0, 0, 0)),
            ColorRecord::from_rgb(Rgb::new(0xf7, 0x90, 0xa5)),
            ColorRecord::from_rgb(Rgb::new(0xf7, 0x90, 0xa6)), // hsl(347, 87, 77)
        ])
        .catalog;
        assert_eq!(catalog.records()[1].hsl(), Hsl::new(348, 87, 77));

        let ranking = similar(&catalog.records()[0], &catalog, &SimilarityConfig::default());
        let hexes: Vec<_> = ranking.iter().map(|s| s.record.hex()).collect();
        assert_eq!(hexes, vec!["#F790A5"]);
        assert!(
            (ranking[0].score - 60.0).abs() < 1e-4,
            "score should be 60 but is {}",
            ranking[0].score
        );
    }
}

//! Engine configuration via TOML files.
//!
//! Every parameter has a default, so an empty document is a valid
//! configuration:
//!
//! ```toml
//! [search]
//! tolerance = 0.4
//! weights = { chinese = 0.3, english = 0.3, hex = 0.2, guofeng = 0.2 }
//!
//! [similarity]
//! limit = 6
//! threshold = 0.6
//! weights = "balanced"
//!
//! [query]
//! sort = { field = "name", order = "asc" }  # omit for relevance order
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::query::{FieldWeights, SortSpec};
use crate::similarity::SimilarityWeights;
use crate::Float;

/// Search parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How much a match may deviate from perfect, between 0 and 1. A record
    /// matches if its match quality is at least `1 - tolerance`.
    pub tolerance: Float,
    pub weights: FieldWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tolerance: 0.4,
            weights: FieldWeights::default(),
        }
    }
}

/// Similarity ranking parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// The maximum number of ranked records.
    pub limit: usize,
    /// The minimum score as a fraction of 100, between 0 and 1.
    pub threshold: Float,
    pub weights: SimilarityWeights,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            limit: 6,
            threshold: 0.6,
            weights: SimilarityWeights::default(),
        }
    }
}

/// Query pipeline parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// The sort applied when the caller does not specify one. If absent,
    /// results are ordered by search relevance.
    pub sort: Option<SortSpec>,
}

/// The complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub search: SearchConfig,
    pub similarity: SimilarityConfig,
    pub query: QueryConfig,
}

fn check_fraction(value: Float, parameter: &'static str) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            parameter,
            reason: "should be between 0 and 1",
        })
    }
}

fn check_weight(value: Float, parameter: &'static str) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            parameter,
            reason: "should be a non-negative number",
        })
    }
}

impl EngineConfig {
    /// Load the configuration from the TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse and validate the configuration in the TOML string.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fraction(self.search.tolerance, "search.tolerance")?;
        for (field, weight) in self.search.weights.iter() {
            check_weight(weight, field)?;
        }

        check_fraction(self.similarity.threshold, "similarity.threshold")?;
        let SimilarityWeights {
            hue,
            saturation,
            lightness,
        } = self.similarity.weights;
        check_weight(hue, "similarity.weights.hue")?;
        check_weight(saturation, "similarity.weights.saturation")?;
        check_weight(lightness, "similarity.weights.lightness")
    }
}

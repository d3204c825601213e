//! Risk scoring weights.
//!
//! The score is additive: a severity component, a pattern-type weight, and two
//! capped counters (missing dimensions, affected files). With the defaults the
//! maximum attainable score is 10.0.

use serde::{Deserialize, Serialize};

fn default_high_severity() -> f64 {
    4.0
}

fn default_medium_severity() -> f64 {
    2.0
}

fn default_low_severity() -> f64 {
    0.0
}

fn default_pattern_a() -> f64 {
    3.0
}

fn default_pattern_b() -> f64 {
    1.5
}

fn default_pattern_c() -> f64 {
    0.0
}

fn default_per_dimension() -> f64 {
    0.5
}

fn default_dimension_cap() -> f64 {
    2.0
}

fn default_per_file() -> f64 {
    0.25
}

fn default_file_cap() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Data-loss component for HIGH severity issues
    #[serde(default = "default_high_severity")]
    pub high_severity: f64,

    #[serde(default = "default_medium_severity")]
    pub medium_severity: f64,

    #[serde(default = "default_low_severity")]
    pub low_severity: f64,

    /// Pattern-type weight for input granularity loss
    #[serde(default = "default_pattern_a")]
    pub pattern_a: f64,

    /// Pattern-type weight for cross-level accessor usage
    #[serde(default = "default_pattern_b")]
    pub pattern_b: f64,

    /// Pattern-type weight for validation/storage inconsistency
    #[serde(default = "default_pattern_c")]
    pub pattern_c: f64,

    #[serde(default = "default_per_dimension")]
    pub per_dimension: f64,

    #[serde(default = "default_dimension_cap")]
    pub dimension_cap: f64,

    #[serde(default = "default_per_file")]
    pub per_file: f64,

    #[serde(default = "default_file_cap")]
    pub file_cap: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            high_severity: default_high_severity(),
            medium_severity: default_medium_severity(),
            low_severity: default_low_severity(),
            pattern_a: default_pattern_a(),
            pattern_b: default_pattern_b(),
            pattern_c: default_pattern_c(),
            per_dimension: default_per_dimension(),
            dimension_cap: default_dimension_cap(),
            per_file: default_per_file(),
            file_cap: default_file_cap(),
        }
    }
}

impl ScoringWeights {
    /// Every weight must be finite and non-negative, otherwise scores could
    /// go negative or NaN and break ordering.
    pub fn validate(&self) -> Result<(), String> {
        let named = [
            ("high_severity", self.high_severity),
            ("medium_severity", self.medium_severity),
            ("low_severity", self.low_severity),
            ("pattern_a", self.pattern_a),
            ("pattern_b", self.pattern_b),
            ("pattern_c", self.pattern_c),
            ("per_dimension", self.per_dimension),
            ("dimension_cap", self.dimension_cap),
            ("per_file", self.per_file),
            ("file_cap", self.file_cap),
        ];

        named
            .iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
            .map_or(Ok(()), |(name, value)| {
                Err(format!(
                    "scoring weight '{name}' must be a non-negative number, got {value}"
                ))
            })
    }

    /// Highest score these weights can produce.
    pub fn max_score(&self) -> f64 {
        let severity = self
            .high_severity
            .max(self.medium_severity)
            .max(self.low_severity);
        let pattern = self.pattern_a.max(self.pattern_b).max(self.pattern_c);
        severity + pattern + self.dimension_cap + self.file_cap
    }
}

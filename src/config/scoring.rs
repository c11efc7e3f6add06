//! Scoring configuration for the campaign health score
//!
//! This module contains all scoring-related policy constants:
//! - Component weights (PTP, connection, active backlog, cost)
//! - Benchmarks at which a component earns a perfect sub-score
//! - Grade cut-offs

use serde::{Deserialize, Serialize};

/// Component weights of the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Weight for the PTP rate component (0.0-1.0)
    #[serde(default = "default_ptp_weight")]
    pub ptp: f64,

    /// Weight for the connection rate component (0.0-1.0)
    #[serde(default = "default_connection_weight")]
    pub connection: f64,

    /// Weight for the active backlog component (0.0-1.0)
    #[serde(default = "default_active_weight")]
    pub active: f64,

    /// Weight for the cost efficiency component (0.0-1.0)
    #[serde(default = "default_cost_weight")]
    pub cost: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            ptp: default_ptp_weight(),
            connection: default_connection_weight(),
            active: default_active_weight(),
            cost: default_cost_weight(),
        }
    }
}

impl ScoringWeights {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    pub fn sum(&self) -> f64 {
        self.ptp + self.connection + self.active + self.cost
    }

    /// Validate each weight and that they sum to 1.0 (small tolerance for floating point)
    pub fn validate(&self) -> Result<(), String> {
        for validation in [
            Self::validate_weight(self.ptp, "PTP"),
            Self::validate_weight(self.connection, "Connection"),
            Self::validate_weight(self.active, "Active"),
            Self::validate_weight(self.cost, "Cost"),
        ] {
            validation?;
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Scoring weights must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }
        Ok(())
    }

    /// Normalize weights to ensure they sum to exactly 1.0
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.ptp /= sum;
            self.connection /= sum;
            self.active /= sum;
            self.cost /= sum;
        }
    }
}

/// Benchmarks: the metric value that earns a perfect component sub-score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringBenchmarks {
    /// PTP rate (%) that earns a perfect PTP sub-score
    #[serde(default = "default_ptp_benchmark")]
    pub ptp_pct: f64,

    /// Connection rate (%) that earns a perfect connection sub-score
    #[serde(default = "default_connection_benchmark")]
    pub connection_rate: f64,

    /// Active share (%) above which the backlog penalty starts
    #[serde(default = "default_active_benchmark")]
    pub active_pct: f64,

    /// Cost per PTP at or below which cost efficiency is perfect
    #[serde(default = "default_cost_benchmark")]
    pub cost_per_ptp: f64,
}

impl Default for ScoringBenchmarks {
    fn default() -> Self {
        Self {
            ptp_pct: default_ptp_benchmark(),
            connection_rate: default_connection_benchmark(),
            active_pct: default_active_benchmark(),
            cost_per_ptp: default_cost_benchmark(),
        }
    }
}

impl ScoringBenchmarks {
    pub fn validate(&self) -> Result<(), String> {
        let positive = [
            (self.ptp_pct, "ptp_pct"),
            (self.connection_rate, "connection_rate"),
            (self.cost_per_ptp, "cost_per_ptp"),
        ];
        for (value, name) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(format!("Benchmark {} must be a positive number", name));
            }
        }
        if !(0.0..100.0).contains(&self.active_pct) {
            return Err("Benchmark active_pct must be in [0, 100)".to_string());
        }
        Ok(())
    }
}

/// Grade cut-offs on the 0-10 score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeThresholds {
    /// Minimum score graded Strong
    #[serde(default = "default_strong_threshold")]
    pub strong: f64,

    /// Minimum score graded Needs Optimization
    #[serde(default = "default_needs_optimization_threshold")]
    pub needs_optimization: f64,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            strong: default_strong_threshold(),
            needs_optimization: default_needs_optimization_threshold(),
        }
    }
}

impl GradeThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if self.needs_optimization > self.strong {
            return Err(format!(
                "Grade threshold needs_optimization ({}) must not exceed strong ({})",
                self.needs_optimization, self.strong
            ));
        }
        Ok(())
    }
}

/// Score calculator policy
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: ScoringWeights,

    #[serde(default)]
    pub benchmarks: ScoringBenchmarks,

    #[serde(default)]
    pub grades: GradeThresholds,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.weights.validate()?;
        self.benchmarks.validate()?;
        self.grades.validate()
    }
}

pub fn default_ptp_weight() -> f64 {
    0.40
}
pub fn default_connection_weight() -> f64 {
    0.30
}
pub fn default_active_weight() -> f64 {
    0.15
}
pub fn default_cost_weight() -> f64 {
    0.15
}

pub fn default_ptp_benchmark() -> f64 {
    25.0
}
pub fn default_connection_benchmark() -> f64 {
    60.0
}
pub fn default_active_benchmark() -> f64 {
    50.0
}
pub fn default_cost_benchmark() -> f64 {
    150.0
}

pub fn default_strong_threshold() -> f64 {
    7.0
}
pub fn default_needs_optimization_threshold() -> f64 {
    4.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_are_valid() {
        assert!(ScoringWeights::default().validate().is_ok());
    }

    #[test]
    fn test_weights_out_of_range_rejected() {
        let weights = ScoringWeights {
            ptp: 1.2,
            ..Default::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.contains("PTP"));
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let weights = ScoringWeights {
            ptp: 0.5,
            connection: 0.5,
            active: 0.5,
            cost: 0.5,
        };
        let err = weights.validate().unwrap_err();
        assert!(err.contains("sum to 2.000"));
    }

    #[test]
    fn test_normalize_rescales() {
        let mut weights = ScoringWeights {
            ptp: 0.5,
            connection: 0.5,
            active: 0.5,
            cost: 0.5,
        };
        weights.normalize();
        assert!((weights.sum() - 1.0).abs() < 1e-12);
        assert!((weights.ptp - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_inverted_grade_thresholds_rejected() {
        let grades = GradeThresholds {
            strong: 3.0,
            needs_optimization: 5.0,
        };
        assert!(grades.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: ScoringConfig = toml::from_str("[benchmarks]\ncost_per_ptp = 200.0\n").unwrap();
        assert_eq!(config.benchmarks.cost_per_ptp, 200.0);
        assert_eq!(config.benchmarks.ptp_pct, 25.0);
        assert_eq!(config.weights, ScoringWeights::default());
    }
}

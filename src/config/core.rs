use serde::{Deserialize, Serialize};

use super::scoring::ScoringConfig;
use super::thresholds::{KpiConfig, LeverThresholds, RiskThresholds};

/// Root configuration structure for recoveriq
///
/// Every field falls back to the built-in policy when omitted, so an empty
/// `.recoveriq.toml` reproduces the default dashboard exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RecoverIqConfig {
    /// KPI aggregation thresholds
    #[serde(default)]
    pub kpi: KpiConfig,

    /// Score weights, benchmarks and grade cut-offs
    #[serde(default)]
    pub scoring: ScoringConfig,

    /// Risk rule thresholds
    #[serde(default)]
    pub risk: RiskThresholds,

    /// Lever guards
    #[serde(default)]
    pub levers: LeverThresholds,

    /// Output preferences
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl RecoverIqConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.scoring.validate()?;
        if !(self.kpi.outlier_sigma.is_finite() && self.kpi.outlier_sigma >= 0.0) {
            return Err("kpi.outlier_sigma must be a non-negative number".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "terminal", "json" or "markdown"
    pub default_format: Option<String>,
}

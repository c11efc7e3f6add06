use serde::{Deserialize, Serialize};

/// Thresholds used while aggregating the KPI set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiConfig {
    /// Leads with more attempts than this and zero connections are over-attempted
    #[serde(default = "default_overattempt_min_attempts")]
    pub overattempt_min_attempts: u32,

    /// Spend above `mean + outlier_sigma * std` counts as a cost outlier
    #[serde(default = "default_outlier_sigma")]
    pub outlier_sigma: f64,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            overattempt_min_attempts: default_overattempt_min_attempts(),
            outlier_sigma: default_outlier_sigma(),
        }
    }
}

/// Risk evaluator rule thresholds
///
/// Each rule fires independently; the first `max_findings` firing rules are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// PTP rate (%) below which the campaign is flagged
    #[serde(default = "default_min_ptp_pct")]
    pub min_ptp_pct: f64,

    /// Not-evaluated share (%) above which the idle pool is flagged
    #[serde(default = "default_max_not_eval_pct")]
    pub max_not_eval_pct: f64,

    /// Over-attempted share (%) above which dead-end dialing is flagged
    #[serde(default = "default_max_overattempted_pct")]
    pub max_overattempted_pct: f64,

    /// Connection rate (%) below which list quality is flagged
    #[serde(default = "default_min_connection_rate")]
    pub min_connection_rate: f64,

    /// Active share (%) above which the backlog is flagged
    #[serde(default = "default_max_active_pct")]
    pub max_active_pct: f64,

    #[serde(default = "default_max_findings")]
    pub max_findings: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            min_ptp_pct: default_min_ptp_pct(),
            max_not_eval_pct: default_max_not_eval_pct(),
            max_overattempted_pct: default_max_overattempted_pct(),
            min_connection_rate: default_min_connection_rate(),
            max_active_pct: default_max_active_pct(),
            max_findings: default_max_findings(),
        }
    }
}

/// Lever recommender guards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeverThresholds {
    /// Connection rate (%) the dial-time lever aims for
    #[serde(default = "default_target_connection_rate")]
    pub target_connection_rate: f64,

    /// Not-evaluated lead count above which re-engagement is recommended
    #[serde(default = "default_min_not_eval_count")]
    pub min_not_eval_count: usize,

    #[serde(default = "default_max_levers")]
    pub max_levers: usize,
}

impl Default for LeverThresholds {
    fn default() -> Self {
        Self {
            target_connection_rate: default_target_connection_rate(),
            min_not_eval_count: default_min_not_eval_count(),
            max_levers: default_max_levers(),
        }
    }
}

// Default KPI values
fn default_overattempt_min_attempts() -> u32 {
    12
}
fn default_outlier_sigma() -> f64 {
    2.0
}

// Default risk rule values
fn default_min_ptp_pct() -> f64 {
    15.0
}
fn default_max_not_eval_pct() -> f64 {
    15.0
}
fn default_max_overattempted_pct() -> f64 {
    5.0
}
fn default_min_connection_rate() -> f64 {
    30.0
}
fn default_max_active_pct() -> f64 {
    70.0
}
fn default_max_findings() -> usize {
    4
}

// Default lever values
fn default_target_connection_rate() -> f64 {
    50.0
}
fn default_min_not_eval_count() -> usize {
    20
}
fn default_max_levers() -> usize {
    3
}

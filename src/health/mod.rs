//! Health indicators: a traffic-light status per headline metric, plus how far
//! each metric is toward its benchmark.

use crate::config::RecoverIqConfig;
use crate::core::{safe_pct, serialize_2dp};
use crate::metrics::KpiSet;
use crate::scoring::CampaignScore;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Good,
    Warning,
    Critical,
}

impl HealthStatus {
    /// Classify `value` against a good and a warning threshold.
    ///
    /// With `inverted` set, lower values are better.
    pub fn classify(value: f64, good: f64, warning: f64, inverted: bool) -> Self {
        let meets = |threshold: f64| {
            if inverted {
                value <= threshold
            } else {
                value >= threshold
            }
        };
        if meets(good) {
            Self::Good
        } else if meets(warning) {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Good => "#3fb950",
            Self::Warning => "#d29922",
            Self::Critical => "#f85149",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Share of the benchmark reached, 0-100; inverted metrics report the remainder
pub fn benchmark_attainment(value: f64, benchmark: f64, inverted: bool) -> f64 {
    let attained = if benchmark == 0.0 {
        0.0
    } else {
        safe_pct(value, benchmark).min(100.0)
    };
    if inverted {
        100.0 - attained
    } else {
        attained
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthIndicator {
    pub name: String,
    #[serde(serialize_with = "serialize_2dp")]
    pub value: f64,
    /// Unit suffix used when rendering the value ("%", "/10") or currency prefix
    pub unit: String,
    pub status: HealthStatus,
    /// Benchmark attainment, when the metric has a benchmark bar
    pub attainment: Option<f64>,
}

impl HealthIndicator {
    pub fn display_value(&self) -> String {
        match self.unit.as_str() {
            "₹" => format!("₹{:.0}", self.value),
            "/10" => format!("{:.1}/10", self.value),
            unit => format!("{:.1}{}", self.value, unit),
        }
    }
}

struct IndicatorRule {
    name: &'static str,
    value: f64,
    unit: &'static str,
    good: f64,
    warning: f64,
    inverted: bool,
    benchmark: Option<f64>,
}

impl IndicatorRule {
    fn into_indicator(self) -> HealthIndicator {
        HealthIndicator {
            name: self.name.to_string(),
            value: self.value,
            unit: self.unit.to_string(),
            status: HealthStatus::classify(self.value, self.good, self.warning, self.inverted),
            attainment: self
                .benchmark
                .map(|bench| benchmark_attainment(self.value, bench, self.inverted)),
        }
    }
}

/// Attempt efficiency (%) regarded as healthy
const GOOD_ATTEMPT_EFFICIENCY: f64 = 50.0;
/// Attempt efficiency (%) below which the dialer is flagged
const WARNING_ATTEMPT_EFFICIENCY: f64 = 30.0;

/// Health indicators in display order
pub fn assess_health(
    kpis: &KpiSet,
    score: &CampaignScore,
    config: &RecoverIqConfig,
) -> Vec<HealthIndicator> {
    let benchmarks = &config.scoring.benchmarks;
    let risk = &config.risk;

    [
        IndicatorRule {
            name: "PTP Rate",
            value: kpis.ptp_pct,
            unit: "%",
            good: benchmarks.ptp_pct,
            warning: risk.min_ptp_pct,
            inverted: false,
            benchmark: Some(benchmarks.ptp_pct),
        },
        IndicatorRule {
            name: "Connection Rate",
            value: kpis.connection_rate,
            unit: "%",
            good: config.levers.target_connection_rate,
            warning: risk.min_connection_rate,
            inverted: false,
            benchmark: Some(benchmarks.connection_rate),
        },
        IndicatorRule {
            name: "Cost per PTP",
            value: kpis.cost_per_ptp,
            unit: "₹",
            good: benchmarks.cost_per_ptp,
            warning: 2.0 * benchmarks.cost_per_ptp,
            inverted: true,
            benchmark: Some(benchmarks.cost_per_ptp),
        },
        IndicatorRule {
            name: "Active Backlog",
            value: kpis.active_pct,
            unit: "%",
            good: benchmarks.active_pct,
            warning: risk.max_active_pct,
            inverted: true,
            benchmark: Some(benchmarks.active_pct),
        },
        IndicatorRule {
            name: "Attempt Efficiency",
            value: kpis.attempt_efficiency,
            unit: "%",
            good: GOOD_ATTEMPT_EFFICIENCY,
            warning: WARNING_ATTEMPT_EFFICIENCY,
            inverted: false,
            benchmark: None,
        },
        IndicatorRule {
            name: "Score",
            value: score.value,
            unit: "/10",
            good: config.scoring.grades.strong,
            warning: config.scoring.grades.needs_optimization,
            inverted: false,
            benchmark: None,
        },
    ]
    .into_iter()
    .map(IndicatorRule::into_indicator)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::calculate_score;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_higher_is_better() {
        assert_eq!(HealthStatus::classify(25.0, 25.0, 15.0, false), HealthStatus::Good);
        assert_eq!(HealthStatus::classify(20.0, 25.0, 15.0, false), HealthStatus::Warning);
        assert_eq!(HealthStatus::classify(14.9, 25.0, 15.0, false), HealthStatus::Critical);
    }

    #[test]
    fn test_classify_inverted() {
        assert_eq!(HealthStatus::classify(150.0, 150.0, 300.0, true), HealthStatus::Good);
        assert_eq!(HealthStatus::classify(299.0, 150.0, 300.0, true), HealthStatus::Warning);
        assert_eq!(HealthStatus::classify(301.0, 150.0, 300.0, true), HealthStatus::Critical);
    }

    #[test]
    fn test_benchmark_attainment() {
        assert_eq!(benchmark_attainment(12.5, 25.0, false), 50.0);
        assert_eq!(benchmark_attainment(50.0, 25.0, false), 100.0);
        assert_eq!(benchmark_attainment(75.0, 150.0, true), 50.0);
        assert_eq!(benchmark_attainment(300.0, 150.0, true), 0.0);
        assert_eq!(benchmark_attainment(10.0, 0.0, false), 0.0);
    }

    #[test]
    fn test_assess_health_order_and_status() {
        let config = RecoverIqConfig::default();
        let kpis = KpiSet {
            ptp_pct: 21.0,
            connection_rate: 55.0,
            cost_per_ptp: 320.0,
            active_pct: 54.0,
            attempt_efficiency: 28.0,
            ..Default::default()
        };
        let score = calculate_score(&kpis, &config.scoring);
        let health = assess_health(&kpis, &score, &config);

        let names: Vec<&str> = health.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "PTP Rate",
                "Connection Rate",
                "Cost per PTP",
                "Active Backlog",
                "Attempt Efficiency",
                "Score",
            ]
        );
        let statuses: Vec<HealthStatus> = health.iter().map(|h| h.status).collect();
        assert_eq!(
            statuses[..5],
            [
                HealthStatus::Warning,
                HealthStatus::Good,
                HealthStatus::Critical,
                HealthStatus::Warning,
                HealthStatus::Critical,
            ]
        );
        assert_eq!(health[2].display_value(), "₹320");
        assert_eq!(health[4].attainment, None);
    }
}

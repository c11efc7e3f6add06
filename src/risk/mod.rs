//! Risk evaluator: ordered threshold rules over the KPI set.
//!
//! Rules are independent; every rule that fires contributes one finding, in
//! rule order, and the list is truncated to `max_findings`. When nothing fires
//! a single all-clear finding is emitted instead.

use crate::config::{KpiConfig, RiskThresholds};
use crate::core::{format_amount, group_thousands};
use crate::metrics::KpiSet;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub title: String,
    pub body: String,
    pub severity: Severity,
}

impl RiskFinding {
    fn new(severity: Severity, title: &str, body: String) -> Self {
        Self {
            title: title.to_string(),
            body,
            severity,
        }
    }

    pub fn all_clear() -> Self {
        Self::new(
            Severity::Low,
            ALL_CLEAR_TITLE,
            "All key metrics are within acceptable thresholds. \
             Continue monitoring performance indicators."
                .to_string(),
        )
    }

    pub fn is_all_clear(&self) -> bool {
        self.title == ALL_CLEAR_TITLE
    }
}

pub const ALL_CLEAR_TITLE: &str = "No Critical Risks Detected";

/// The risk rules in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskRule {
    LowPtpRate,
    NotEvaluatedPool,
    OverAttempted,
    CostOutliers,
    LowConnectionRate,
    ActiveBacklog,
}

impl RiskRule {
    pub const ORDERED: [RiskRule; 6] = [
        RiskRule::LowPtpRate,
        RiskRule::NotEvaluatedPool,
        RiskRule::OverAttempted,
        RiskRule::CostOutliers,
        RiskRule::LowConnectionRate,
        RiskRule::ActiveBacklog,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::LowPtpRate => "Critical PTP Rate",
            Self::NotEvaluatedPool => "High Not-Evaluated Pool",
            Self::OverAttempted => "Over-Attempted Zero-Connection Leads",
            Self::CostOutliers => "Cost Outlier Leads",
            Self::LowConnectionRate => "Low Connection Rate",
            Self::ActiveBacklog => "Excessive Active Lead Backlog",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::LowPtpRate | Self::NotEvaluatedPool | Self::LowConnectionRate => Severity::High,
            Self::OverAttempted | Self::CostOutliers => Severity::Medium,
            Self::ActiveBacklog => Severity::Low,
        }
    }

    pub fn fires(&self, kpis: &KpiSet, thresholds: &RiskThresholds) -> bool {
        match self {
            Self::LowPtpRate => kpis.ptp_pct < thresholds.min_ptp_pct,
            Self::NotEvaluatedPool => kpis.not_eval_pct > thresholds.max_not_eval_pct,
            Self::OverAttempted => kpis.overattempted_pct > thresholds.max_overattempted_pct,
            Self::CostOutliers => kpis.cost_outliers > 0,
            Self::LowConnectionRate => kpis.connection_rate < thresholds.min_connection_rate,
            Self::ActiveBacklog => kpis.active_pct > thresholds.max_active_pct,
        }
    }

    /// Finding text quoting the values that triggered the rule
    fn body(&self, kpis: &KpiSet, thresholds: &RiskThresholds, kpi_config: &KpiConfig) -> String {
        match self {
            Self::LowPtpRate => format!(
                "PTP rate {:.1}% is below the {:.0}% baseline. Only {} of {} leads converted. \
                 Review script quality and targeting logic.",
                kpis.ptp_pct,
                thresholds.min_ptp_pct,
                count(kpis.ptp_count),
                count(kpis.total)
            ),
            Self::NotEvaluatedPool => format!(
                "{:.1}% of leads ({}) remain Not Evaluated: recoverable revenue sitting idle. \
                 Prioritize re-routing to retry queues.",
                kpis.not_eval_pct,
                count(kpis.not_eval_count)
            ),
            Self::OverAttempted => format!(
                "{} leads ({:.1}%) have >{} attempts with zero connections and keep burning spend. \
                 Flag for exclusion or human escalation.",
                count(kpis.overattempted),
                kpis.overattempted_pct,
                kpi_config.overattempt_min_attempts
            ),
            Self::CostOutliers => format!(
                "{} leads exceed ₹{} (mean + {}σ). \
                 Audit for ROI, they distort the overall Cost-per-PTP metric.",
                count(kpis.cost_outliers),
                format_amount(kpis.outlier_threshold(kpi_config.outlier_sigma)),
                kpi_config.outlier_sigma
            ),
            Self::LowConnectionRate => format!(
                "Only {:.1}% of leads connecting. Below {:.0}% signals list quality issues \
                 or poor call timing. Validate contact data.",
                kpis.connection_rate, thresholds.min_connection_rate
            ),
            Self::ActiveBacklog => format!(
                "{:.1}% of leads still 'active': capacity constraints or insufficient \
                 follow-through velocity.",
                kpis.active_pct
            ),
        }
    }

    pub fn evaluate(
        &self,
        kpis: &KpiSet,
        thresholds: &RiskThresholds,
        kpi_config: &KpiConfig,
    ) -> Option<RiskFinding> {
        self.fires(kpis, thresholds).then(|| {
            RiskFinding::new(
                self.severity(),
                self.title(),
                self.body(kpis, thresholds, kpi_config),
            )
        })
    }
}

fn count(value: usize) -> String {
    group_thousands(value as i64)
}

/// Evaluate every rule in order and keep the first `max_findings` that fire
pub fn evaluate_risks(
    kpis: &KpiSet,
    thresholds: &RiskThresholds,
    kpi_config: &KpiConfig,
) -> Vec<RiskFinding> {
    let mut findings: Vec<RiskFinding> = RiskRule::ORDERED
        .iter()
        .filter_map(|rule| {
            let finding = rule.evaluate(kpis, thresholds, kpi_config);
            if finding.is_some() {
                log::debug!("Risk rule fired: {}", rule.title());
            }
            finding
        })
        .collect();

    if findings.is_empty() {
        return vec![RiskFinding::all_clear()];
    }

    findings.truncate(thresholds.max_findings.max(1));
    findings
}

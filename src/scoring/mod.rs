//! Composite campaign health score (0-10) with grade and component breakdown.
//!
//! Each component earns a sub-score on a 0-10 scale measured against its
//! benchmark, capped at 10 *before* the weight is applied. The weighted
//! contributions are summed and rounded to one decimal.

use crate::config::ScoringConfig;
use crate::core::{round_to, safe_ratio};
use crate::metrics::KpiSet;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Upper bound of every component sub-score and of the composite score
pub const MAX_SUB_SCORE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Strong,
    #[serde(rename = "Needs Optimization")]
    NeedsOptimization,
    #[serde(rename = "At Risk")]
    AtRisk,
}

impl Grade {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Strong => "Strong",
            Self::NeedsOptimization => "Needs Optimization",
            Self::AtRisk => "At Risk",
        }
    }

    /// Display color, fixed per grade
    pub fn color(&self) -> &'static str {
        match self {
            Self::Strong => "#3fb950",
            Self::NeedsOptimization => "#d29922",
            Self::AtRisk => "#f85149",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    PtpRate,
    ConnectionRate,
    ActiveBacklog,
    CostEfficiency,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::PtpRate,
        ComponentKind::ConnectionRate,
        ComponentKind::ActiveBacklog,
        ComponentKind::CostEfficiency,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::PtpRate => "PTP Rate",
            Self::ConnectionRate => "Connection Rate",
            Self::ActiveBacklog => "Active Lead Mgmt",
            Self::CostEfficiency => "Cost Efficiency",
        }
    }
}

/// One weighted component of the composite score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub kind: ComponentKind,
    /// Display name including the weight, e.g. "PTP Rate (40%)"
    pub name: String,
    pub weight: f64,
    /// Capped 0-10 sub-score before weighting
    pub sub_score: f64,
    /// `sub_score * weight`
    pub contribution: f64,
    /// `MAX_SUB_SCORE * weight`
    pub max_contribution: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CampaignScore {
    /// Composite score rounded to one decimal, within [0, 10]
    pub value: f64,
    pub grade: Grade,
    pub color: &'static str,
    /// Component display name to weighted contribution, in component order
    #[serde(serialize_with = "serialize_contributions")]
    pub components: Vec<ScoreComponent>,
    pub max_scores: Vec<f64>,
}

impl CampaignScore {
    pub fn component(&self, kind: ComponentKind) -> Option<&ScoreComponent> {
        self.components.iter().find(|c| c.kind == kind)
    }
}

fn serialize_contributions<S>(components: &[ScoreComponent], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(components.len()))?;
    for component in components {
        map.serialize_entry(&component.name, &round_to(component.contribution, 2))?;
    }
    map.end()
}

/// Computes the composite score from a KPI set under a scoring policy
pub struct CampaignScorer<'a> {
    config: &'a ScoringConfig,
}

impl<'a> CampaignScorer<'a> {
    pub fn new(config: &'a ScoringConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, kpis: &KpiSet) -> CampaignScore {
        let components: Vec<ScoreComponent> = ComponentKind::ALL
            .iter()
            .map(|&kind| self.component(kind, kpis))
            .collect();

        let raw: f64 = components.iter().map(|c| c.contribution).sum();
        let value = round_to(raw.clamp(0.0, MAX_SUB_SCORE), 1);
        let grade = self.grade_for(value);

        log::debug!("Campaign score {:.1} graded {}", value, grade);

        CampaignScore {
            value,
            grade,
            color: grade.color(),
            max_scores: components.iter().map(|c| c.max_contribution).collect(),
            components,
        }
    }

    pub fn grade_for(&self, value: f64) -> Grade {
        let grades = &self.config.grades;
        if value >= grades.strong {
            Grade::Strong
        } else if value >= grades.needs_optimization {
            Grade::NeedsOptimization
        } else {
            Grade::AtRisk
        }
    }

    fn component(&self, kind: ComponentKind, kpis: &KpiSet) -> ScoreComponent {
        let weights = &self.config.weights;
        let (weight, sub_score) = match kind {
            ComponentKind::PtpRate => (weights.ptp, self.ptp_sub_score(kpis.ptp_pct)),
            ComponentKind::ConnectionRate => (
                weights.connection,
                self.connection_sub_score(kpis.connection_rate),
            ),
            ComponentKind::ActiveBacklog => (weights.active, self.active_sub_score(kpis.active_pct)),
            ComponentKind::CostEfficiency => (weights.cost, self.cost_sub_score(kpis.cost_per_ptp)),
        };

        ScoreComponent {
            kind,
            name: format!("{} ({:.0}%)", kind.title(), weight * 100.0),
            weight,
            sub_score,
            contribution: sub_score * weight,
            max_contribution: MAX_SUB_SCORE * weight,
        }
    }

    /// Linear toward the benchmark, capped at 10
    pub fn ptp_sub_score(&self, ptp_pct: f64) -> f64 {
        capped(safe_ratio(ptp_pct, self.config.benchmarks.ptp_pct) * MAX_SUB_SCORE)
    }

    pub fn connection_sub_score(&self, connection_rate: f64) -> f64 {
        capped(safe_ratio(connection_rate, self.config.benchmarks.connection_rate) * MAX_SUB_SCORE)
    }

    /// Full marks up to the benchmark share, falling linearly to 0 at 100% active
    pub fn active_sub_score(&self, active_pct: f64) -> f64 {
        let benchmark = self.config.benchmarks.active_pct;
        let penalty =
            (safe_ratio(active_pct - benchmark, 100.0 - benchmark) * MAX_SUB_SCORE).max(0.0);
        (MAX_SUB_SCORE - penalty).max(0.0)
    }

    /// Benchmark cost over actual cost, capped at 10; zero when there is no cost per PTP
    pub fn cost_sub_score(&self, cost_per_ptp: f64) -> f64 {
        if cost_per_ptp > 0.0 {
            capped(self.config.benchmarks.cost_per_ptp / cost_per_ptp * MAX_SUB_SCORE)
        } else {
            0.0
        }
    }
}

fn capped(sub_score: f64) -> f64 {
    sub_score.clamp(0.0, MAX_SUB_SCORE)
}

/// Score a KPI set with the given policy
pub fn calculate_score(kpis: &KpiSet, config: &ScoringConfig) -> CampaignScore {
    CampaignScorer::new(config).score(kpis)
}

//! Five-stage conversion funnel with drop-off ranking.
//!
//! The stages are presented as a pipeline even though PTP (a disposition) and
//! Completed (a state) are not subsets of the stage before them. Counts are
//! reported exactly as the KPI set holds them, so a drop-off can be negative.

use crate::core::{group_thousands, round_to, safe_pct};
use crate::health::HealthStatus;
use crate::metrics::KpiSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Drop-off share (%) above which a transition is flagged critical
pub const CRITICAL_DROP_PCT: f64 = 55.0;
/// Drop-off share (%) above which a transition is flagged as a warning
pub const WARNING_DROP_PCT: f64 = 30.0;

pub const STAGE_NAMES: [&str; 5] = ["Total Leads", "Attempted", "Connected", "PTP", "Completed"];
/// Short stage names used in transition labels
pub const STAGE_LABELS: [&str; 5] = ["Total", "Attempted", "Connected", "PTP", "Completed"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunnelStage {
    pub stage: String,
    pub count: usize,
}

/// Transition between two adjacent stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropOff {
    /// e.g. "Connected → PTP"
    pub label: String,
    pub from: usize,
    pub to: usize,
    /// `from - to`; negative when the later stage outnumbers the earlier one
    pub lost: i64,
    #[serde(serialize_with = "crate::core::serialize_2dp")]
    pub pct: f64,
    pub severity: HealthStatus,
}

impl DropOff {
    fn between(labels: (&str, &str), from: &FunnelStage, to: &FunnelStage) -> Self {
        let lost = from.count as i64 - to.count as i64;
        let pct = safe_pct(lost as f64, from.count as f64);
        Self {
            label: format!("{} → {}", labels.0, labels.1),
            from: from.count,
            to: to.count,
            lost,
            pct,
            severity: drop_severity(pct),
        }
    }
}

impl fmt::Display for DropOff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} loses {} leads ({:.0}%)",
            self.label,
            group_thousands(self.lost),
            self.pct
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Funnel {
    pub stages: Vec<FunnelStage>,
    /// Adjacent transitions in stage order
    pub drop_offs: Vec<DropOff>,
    /// Transition with the highest drop-off share
    pub critical_leak: DropOff,
    /// Transition with the second highest drop-off share
    pub secondary_leak: DropOff,
}

impl Funnel {
    /// One-line summary of the two worst transitions
    pub fn leak_summary(&self) -> String {
        format!(
            "Critical drop-off: {}. Secondary leak: {}.",
            self.critical_leak, self.secondary_leak
        )
    }

    pub fn stage_count(&self, stage: &str) -> Option<usize> {
        self.stages
            .iter()
            .find(|s| s.stage == stage)
            .map(|s| s.count)
    }

    /// Share of the first stage that reached `stage`, 0-100
    pub fn share_of_initial(&self, stage: &FunnelStage) -> f64 {
        let initial = self.stages.first().map_or(0, |s| s.count);
        round_to(safe_pct(stage.count as f64, initial as f64), 2)
    }
}

pub fn drop_severity(pct: f64) -> HealthStatus {
    if pct > CRITICAL_DROP_PCT {
        HealthStatus::Critical
    } else if pct > WARNING_DROP_PCT {
        HealthStatus::Warning
    } else {
        HealthStatus::Good
    }
}

/// Build the funnel and rank its drop-offs from a KPI set
pub fn build_funnel(kpis: &KpiSet) -> Funnel {
    let counts = [
        kpis.total,
        kpis.attempted_leads,
        kpis.connected_leads,
        kpis.ptp_count,
        kpis.completed_leads,
    ];
    let stages: Vec<FunnelStage> = STAGE_NAMES
        .iter()
        .zip(counts)
        .map(|(name, count)| FunnelStage {
            stage: (*name).to_string(),
            count,
        })
        .collect();

    let drop_offs: Vec<DropOff> = stages
        .windows(2)
        .zip(STAGE_LABELS.windows(2))
        .map(|(pair, labels)| DropOff::between((labels[0], labels[1]), &pair[0], &pair[1]))
        .collect();

    // Stable sort keeps stage order among ties
    let mut ranked: Vec<&DropOff> = drop_offs.iter().collect();
    ranked.sort_by(|a, b| b.pct.total_cmp(&a.pct));
    let critical_leak = ranked[0].clone();
    let secondary_leak = ranked[1].clone();

    log::debug!(
        "Funnel leaks: critical '{}' ({:.1}%), secondary '{}' ({:.1}%)",
        critical_leak.label,
        critical_leak.pct,
        secondary_leak.label,
        secondary_leak.pct
    );

    Funnel {
        stages,
        drop_offs,
        critical_leak,
        secondary_leak,
    }
}

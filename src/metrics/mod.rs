//! Metrics aggregation: the KPI set derived once per lead table.
//!
//! Every percentage is on a 0-100 scale and every ratio goes through the
//! zero-denominator guard, so a degenerate but non-empty table (no PTPs, no
//! connections) still yields a complete KPI set. Values are kept at full
//! precision; rounding happens only when serialized or rendered.

pub mod spend;

use crate::config::KpiConfig;
use crate::core::{
    safe_pct, safe_ratio, serialize_2dp, Disposition, Error, LeadState, LeadTable, Result,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use spend::{mean, sample_std_dev, SpendStats};

/// The full KPI set for one lead table. Immutable once computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiSet {
    pub total: usize,

    pub ptp_count: usize,
    #[serde(serialize_with = "serialize_2dp")]
    pub ptp_pct: f64,

    pub connected_leads: usize,
    #[serde(serialize_with = "serialize_2dp")]
    pub connection_rate: f64,

    pub attempted_leads: usize,

    pub active_count: usize,
    #[serde(serialize_with = "serialize_2dp")]
    pub active_pct: f64,

    #[serde(serialize_with = "serialize_2dp")]
    pub total_spend: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub cost_per_ptp: f64,

    #[serde(serialize_with = "serialize_2dp")]
    pub avg_attempts: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub avg_attempts_connected: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub avg_attempts_not_connected: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub attempt_efficiency: f64,

    pub completed_leads: usize,

    pub not_eval_count: usize,
    #[serde(serialize_with = "serialize_2dp")]
    pub not_eval_pct: f64,

    pub overattempted: usize,
    #[serde(serialize_with = "serialize_2dp")]
    pub overattempted_pct: f64,

    #[serde(serialize_with = "serialize_2dp")]
    pub spend_mean: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub spend_std: f64,
    pub cost_outliers: usize,

    #[serde(serialize_with = "serialize_2dp")]
    pub cost_per_connection: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub cost_per_lead: f64,
    #[serde(serialize_with = "serialize_2dp")]
    pub cost_per_attempt: f64,

    pub total_attempted_calls: u64,
    pub total_connected_calls: u64,

    /// Count per disposition label, unknown labels included
    pub disposition_counts: BTreeMap<String, usize>,
}

impl KpiSet {
    /// Spend threshold above which a lead counts as a cost outlier
    pub fn outlier_threshold(&self, sigma: f64) -> f64 {
        self.spend_mean + sigma * self.spend_std
    }

    /// Dispositions ordered by count (descending), ties by label
    pub fn dispositions_by_count(&self) -> Vec<(&str, usize)> {
        let mut ordered: Vec<(&str, usize)> = self
            .disposition_counts
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ordered
    }
}

#[derive(Default)]
struct Tally {
    ptp: usize,
    connected: usize,
    attempted: usize,
    active: usize,
    completed: usize,
    not_evaluated: usize,
    overattempted: usize,
    attempts_connected: u64,
    attempts_not_connected: u64,
    total_attempts: u64,
    total_connections: u64,
    unknown_labels: usize,
    dispositions: BTreeMap<String, usize>,
}

/// Compute the KPI set for a lead table.
///
/// Fails with [`Error::EmptyInput`] on a table with no rows; never fails otherwise.
pub fn compute_kpis(table: &LeadTable, config: &KpiConfig) -> Result<KpiSet> {
    if table.is_empty() {
        return Err(Error::EmptyInput);
    }

    let tally = tally_leads(table, config);
    let total = table.len();
    let total_f = total as f64;

    let spend_values: Vec<f64> = table.iter().map(|lead| lead.spend).collect();
    let spend = SpendStats::from_values(&spend_values);
    let outlier_threshold = spend.mean + config.outlier_sigma * spend.std_dev;
    let cost_outliers = spend_values
        .iter()
        .filter(|&&value| value > outlier_threshold)
        .count();

    if tally.unknown_labels > 0 {
        log::debug!(
            "{} leads carry a disposition or state outside the known set",
            tally.unknown_labels
        );
    }

    let not_connected = total - tally.connected;

    Ok(KpiSet {
        total,
        ptp_count: tally.ptp,
        ptp_pct: safe_pct(tally.ptp as f64, total_f),
        connected_leads: tally.connected,
        connection_rate: safe_pct(tally.connected as f64, total_f),
        attempted_leads: tally.attempted,
        active_count: tally.active,
        active_pct: safe_pct(tally.active as f64, total_f),
        total_spend: spend.total,
        cost_per_ptp: safe_ratio(spend.total, tally.ptp as f64),
        avg_attempts: safe_ratio(tally.total_attempts as f64, total_f),
        avg_attempts_connected: safe_ratio(
            tally.attempts_connected as f64,
            tally.connected as f64,
        ),
        avg_attempts_not_connected: safe_ratio(
            tally.attempts_not_connected as f64,
            not_connected as f64,
        ),
        attempt_efficiency: safe_pct(tally.connected as f64, tally.attempted as f64),
        completed_leads: tally.completed,
        not_eval_count: tally.not_evaluated,
        not_eval_pct: safe_pct(tally.not_evaluated as f64, total_f),
        overattempted: tally.overattempted,
        overattempted_pct: safe_pct(tally.overattempted as f64, total_f),
        spend_mean: spend.mean,
        spend_std: spend.std_dev,
        cost_outliers,
        cost_per_connection: safe_ratio(spend.total, tally.connected as f64),
        cost_per_lead: safe_ratio(spend.total, total_f),
        cost_per_attempt: safe_ratio(spend.total, tally.attempted as f64),
        total_attempted_calls: tally.total_attempts,
        total_connected_calls: tally.total_connections,
        disposition_counts: tally.dispositions,
    })
}

fn tally_leads(table: &LeadTable, config: &KpiConfig) -> Tally {
    table.iter().fold(Tally::default(), |mut tally, lead| {
        let attempts = u64::from(lead.attempted_calls);

        match lead.disposition {
            Disposition::Ptp => tally.ptp += 1,
            Disposition::NotEvaluated => tally.not_evaluated += 1,
            _ => {}
        }
        match lead.state {
            LeadState::Active => tally.active += 1,
            LeadState::Completed => tally.completed += 1,
            _ => {}
        }
        if !lead.disposition.is_known() || !lead.state.is_known() {
            tally.unknown_labels += 1;
        }

        if lead.is_connected() {
            tally.connected += 1;
            tally.attempts_connected += attempts;
        } else {
            tally.attempts_not_connected += attempts;
            if lead.attempted_calls > config.overattempt_min_attempts {
                tally.overattempted += 1;
            }
        }
        if lead.is_attempted() {
            tally.attempted += 1;
        }

        tally.total_attempts += attempts;
        tally.total_connections += u64::from(lead.connected_calls);
        *tally
            .dispositions
            .entry(lead.disposition.as_str().to_string())
            .or_insert(0) += 1;
        tally
    })
}

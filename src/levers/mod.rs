//! Lever recommender: up to three prioritized optimization levers.

use crate::config::{KpiConfig, LeverThresholds};
use crate::core::{format_amount, group_thousands};
use crate::metrics::KpiSet;
use serde::{Deserialize, Serialize};

/// Quantified impact estimate attached to a lever
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LeverImpact {
    /// Connection-rate gap to the target and the connections it represents
    ExtraConnections { gap_pp: f64, connections: u64 },
    /// PTPs projected from re-engaging not-evaluated leads
    IncrementalPtps { leads: usize, ptps: u64 },
    /// Spend reclaimable by pruning over-attempted leads
    ReclaimableSpend { leads: usize, amount: f64 },
    /// Fallback lever; no computed figures
    Qualitative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lever {
    pub title: String,
    pub body: String,
    pub impact: LeverImpact,
}

pub const FALLBACK_TITLE: &str = "Score-Based Lead Prioritisation";

fn dial_time_lever(kpis: &KpiSet, thresholds: &LeverThresholds) -> Option<Lever> {
    if kpis.connection_rate >= thresholds.target_connection_rate {
        return None;
    }
    let gap = thresholds.target_connection_rate - kpis.connection_rate;
    let connections = (gap / 100.0 * kpis.total as f64).floor() as u64;
    Some(Lever {
        title: "Dial-Time Optimization".to_string(),
        body: format!(
            "Connection rate is {:.1}%. Shifting AI outreach to peak windows \
             (10am–12pm, 4pm–6pm IST) could recover {}+ connections, an estimated \
             +{:.0}pp connection rate.",
            kpis.connection_rate,
            group_thousands(connections as i64),
            gap
        ),
        impact: LeverImpact::ExtraConnections {
            gap_pp: gap,
            connections,
        },
    })
}

fn re_engage_lever(kpis: &KpiSet, thresholds: &LeverThresholds) -> Option<Lever> {
    let leads = kpis.not_eval_count;
    if leads <= thresholds.min_not_eval_count {
        return None;
    }
    let ptps = (leads as f64 * kpis.ptp_pct / 100.0).floor() as u64;
    Some(Lever {
        title: "Re-Engage Not-Evaluated Leads".to_string(),
        body: format!(
            "{} leads sit unscored. Applying the current PTP rate ({:.1}%) projects {} \
             incremental PTPs with minimal marginal cost. Route to a 3-attempt retry sequence.",
            group_thousands(leads as i64),
            kpis.ptp_pct,
            group_thousands(ptps as i64)
        ),
        impact: LeverImpact::IncrementalPtps { leads, ptps },
    })
}

fn prune_lever(kpis: &KpiSet, kpi_config: &KpiConfig) -> Option<Lever> {
    let leads = kpis.overattempted;
    if leads == 0 {
        return None;
    }
    let amount = leads as f64 * kpis.spend_mean;
    Some(Lever {
        title: "Prune Dead-End Leads & Reallocate Spend".to_string(),
        body: format!(
            "Capping retries at {} on {} zero-connection leads reclaims ~₹{} in AI dial spend. \
             Reallocate to fresh high-propensity segments.",
            kpi_config.overattempt_min_attempts,
            group_thousands(leads as i64),
            format_amount(amount)
        ),
        impact: LeverImpact::ReclaimableSpend { leads, amount },
    })
}

fn fallback_lever() -> Lever {
    Lever {
        title: FALLBACK_TITLE.to_string(),
        body: "Implement propensity scoring to rank leads by PTP likelihood before dialling. \
               Focusing the first 60% of attempts on the top 30% of leads typically reduces \
               Cost per PTP by 20–35%."
            .to_string(),
        impact: LeverImpact::Qualitative,
    }
}

/// Recommend levers in priority order, padded with the fallback when short
pub fn recommend_levers(
    kpis: &KpiSet,
    thresholds: &LeverThresholds,
    kpi_config: &KpiConfig,
) -> Vec<Lever> {
    let mut levers: Vec<Lever> = [
        dial_time_lever(kpis, thresholds),
        re_engage_lever(kpis, thresholds),
        prune_lever(kpis, kpi_config),
    ]
    .into_iter()
    .flatten()
    .collect();

    for lever in &levers {
        log::debug!("Lever recommended: {}", lever.title);
    }

    if levers.len() < thresholds.max_levers {
        levers.push(fallback_lever());
    }
    levers.truncate(thresholds.max_levers);
    levers
}

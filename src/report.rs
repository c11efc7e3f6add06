use crate::config::RecoverIqConfig;
use crate::core::{LeadTable, Result};
use crate::funnel::{build_funnel, Funnel};
use crate::health::{assess_health, HealthIndicator};
use crate::levers::{recommend_levers, Lever};
use crate::metrics::{compute_kpis, KpiSet};
use crate::risk::{evaluate_risks, RiskFinding};
use crate::scoring::{calculate_score, CampaignScore};
use serde::Serialize;

/// Everything derived from one lead table. Rebuilt from scratch on every load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub kpis: KpiSet,
    pub score: CampaignScore,
    pub funnel: Funnel,
    pub risks: Vec<RiskFinding>,
    pub levers: Vec<Lever>,
    pub health: Vec<HealthIndicator>,
}

impl DashboardReport {
    pub fn from_kpis(kpis: KpiSet, config: &RecoverIqConfig) -> Self {
        let score = calculate_score(&kpis, &config.scoring);
        let funnel = build_funnel(&kpis);
        let risks = evaluate_risks(&kpis, &config.risk, &config.kpi);
        let levers = recommend_levers(&kpis, &config.levers, &config.kpi);
        let health = assess_health(&kpis, &score, config);

        log::info!(
            "Campaign score {:.1}/10 ({}) over {} leads: {} risk finding(s), {} lever(s)",
            score.value,
            score.grade,
            kpis.total,
            risks.len(),
            levers.len()
        );

        Self {
            kpis,
            score,
            funnel,
            risks,
            levers,
            health,
        }
    }
}

/// Run the full pipeline over a lead table.
///
/// Fails only when the table is empty.
pub fn build_report(table: &LeadTable, config: &RecoverIqConfig) -> Result<DashboardReport> {
    let kpis = compute_kpis(table, &config.kpi)?;
    Ok(DashboardReport::from_kpis(kpis, config))
}

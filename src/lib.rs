// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod funnel;
pub mod health;
pub mod io;
pub mod levers;
pub mod metrics;
pub mod output;
pub mod report;
pub mod risk;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{Disposition, Error, Lead, LeadState, LeadTable, Result};

pub use crate::config::{
    KpiConfig, LeverThresholds, RecoverIqConfig, RiskThresholds, ScoringConfig,
};

pub use crate::metrics::{compute_kpis, KpiSet};

pub use crate::scoring::{calculate_score, CampaignScore, Grade, ScoreComponent};

pub use crate::funnel::{build_funnel, DropOff, Funnel, FunnelStage};

pub use crate::risk::{evaluate_risks, RiskFinding, Severity};

pub use crate::levers::{recommend_levers, Lever, LeverImpact};

pub use crate::health::{assess_health, HealthIndicator, HealthStatus};

pub use crate::report::{build_report, DashboardReport};

pub use crate::io::{generate_demo_leads, load_leads_csv, read_leads_csv};

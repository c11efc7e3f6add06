// Sub-modules
mod core;
mod loader;
mod scoring;
mod thresholds;

// Re-export scoring types
pub use scoring::{
    default_active_benchmark, default_active_weight, default_connection_benchmark,
    default_connection_weight, default_cost_benchmark, default_cost_weight,
    default_needs_optimization_threshold, default_ptp_benchmark, default_ptp_weight,
    default_strong_threshold, GradeThresholds, ScoringBenchmarks, ScoringConfig, ScoringWeights,
};

// Re-export threshold types
pub use thresholds::{KpiConfig, LeverThresholds, RiskThresholds};

// Re-export core types
pub use core::{OutputConfig, RecoverIqConfig};

// Re-export loader functions
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Commented default config written by `recoveriq init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# RecoverIQ Configuration
#
# Every value below is the built-in default. Delete a line to keep the default.

[kpi]
# Leads with more attempts than this and zero connections are over-attempted
overattempt_min_attempts = 12
# Spend above mean + outlier_sigma * std is a cost outlier
outlier_sigma = 2.0

[scoring.weights]
ptp = 0.40
connection = 0.30
active = 0.15
cost = 0.15

[scoring.benchmarks]
ptp_pct = 25.0
connection_rate = 60.0
active_pct = 50.0
cost_per_ptp = 150.0

[scoring.grades]
strong = 7.0
needs_optimization = 4.0

[risk]
min_ptp_pct = 15.0
max_not_eval_pct = 15.0
max_overattempted_pct = 5.0
min_connection_rate = 30.0
max_active_pct = 70.0
max_findings = 4

[levers]
target_connection_rate = 50.0
min_not_eval_count = 20
max_levers = 3

[output]
default_format = "terminal"
"#;

// Export modules for library usage
pub mod assessment;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod metrics;
pub mod output;
pub mod projection;
pub mod scoring;
pub mod session;
pub mod tracker;

// Re-export commonly used types
pub use crate::core::{
    BudgetAllocation, Checkpoint, FunnelStage, Metric, ScenarioProjection, ScenarioTier,
    WeightedCategory,
};

pub use crate::errors::{MetricsError, Result};

pub use crate::scoring::{compute_weighted_score, HealthStatus, ScoreBreakdown};

pub use crate::metrics::{
    compute_funnel, compute_progress, stage_conversion_rates, FunnelRow, StageConversion,
};

pub use crate::projection::{
    compare_scenarios, compute_projection, financial_roi, project_scenario, ProjectionSettings,
    Roi, Scenario, ScenarioOutcome,
};

pub use crate::config::GrowthmapConfig;
pub use crate::session::{Overrides, Section, SessionState};

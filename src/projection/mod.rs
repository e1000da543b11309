//! Growth projection engine.
//!
//! Trajectories follow a staged adoption curve (slow start, acceleration,
//! plateau) rather than a straight line, and scenario constants pin the
//! intermediate checkpoints where real estimates exist. Each checkpoint is
//! then priced: cumulative spend, royalty revenue and financial ROI.

pub mod curve;
pub mod financials;
pub mod scenario;

pub use curve::{adoption_fraction, compute_projection};
pub use financials::{
    cumulative_investment, estimated_revenue, financial_roi, months_elapsed, Roi, DAYS_PER_MONTH,
};
pub use scenario::{
    compare_scenarios, project_scenario, ProjectionRow, ProjectionSettings, Scenario,
    ScenarioOutcome,
};

use super::curve::compute_projection;
use super::financials::{cumulative_investment, estimated_revenue, financial_roi, Roi};
use crate::core::{BudgetAllocation, Checkpoint, Metric, ScenarioProjection, ScenarioTier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Shared projection parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectionSettings {
    /// Revenue per stream, in the same currency as the budgets
    #[serde(default = "default_royalty_rate")]
    pub royalty_rate: f64,

    /// Days at which every trajectory is reported
    #[serde(default = "default_checkpoints")]
    pub checkpoints: Vec<u32>,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            royalty_rate: default_royalty_rate(),
            checkpoints: default_checkpoints(),
        }
    }
}

pub fn default_royalty_rate() -> f64 {
    0.003
}

pub fn default_checkpoints() -> Vec<u32> {
    vec![0, 30, 60, 90]
}

/// A budget tier with its spend and pinned trajectory estimates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub tier: ScenarioTier,

    /// Display name; defaults to the tier label
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub monthly_amount: f64,

    #[serde(default)]
    pub channel_splits: BTreeMap<String, f64>,

    /// Share of the target gain the curve fallback reaches by the horizon
    #[serde(default = "default_multiplier")]
    pub multiplier: f64,

    /// Estimated monthly listeners at specific days
    #[serde(default)]
    pub listeners: Vec<Checkpoint>,

    /// Estimated cumulative streams at specific days
    #[serde(default)]
    pub streams: Vec<Checkpoint>,
}

fn default_multiplier() -> f64 {
    1.0
}

impl Scenario {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.tier.label().to_string())
    }

    pub fn budget(&self) -> BudgetAllocation {
        BudgetAllocation {
            scenario_name: self.display_name(),
            monthly_amount: self.monthly_amount,
            channel_splits: self.channel_splits.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectionRow {
    pub day: u32,
    pub listeners: f64,
    pub streams: f64,
    pub investment: f64,
    pub revenue: f64,
    pub roi: Roi,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScenarioOutcome {
    pub tier: ScenarioTier,
    pub name: String,
    pub budget: BudgetAllocation,
    pub rows: Vec<ProjectionRow>,
}

impl ScenarioOutcome {
    pub fn final_row(&self) -> Option<&ProjectionRow> {
        self.rows.last()
    }
}

/// Curve projection with the pinned estimates substituted where they exist.
///
/// Day 0 always carries the metric's current value, even if a pin says otherwise.
fn pinned_trajectory(
    name: &str,
    metric: &Metric,
    pinned: &[Checkpoint],
    days: &[u32],
    multiplier: f64,
) -> ScenarioProjection {
    let checkpoints = compute_projection(metric.current, metric.target, days, multiplier)
        .into_iter()
        .map(|point| match pinned.iter().find(|p| p.day == point.day) {
            Some(pin) if point.day > 0 => Checkpoint::new(point.day, pin.value),
            _ => point,
        })
        .collect();

    ScenarioProjection {
        scenario_name: name.to_string(),
        checkpoints,
    }
}

/// Reporting days plus every day either trajectory has an estimate for
fn reporting_days(scenario: &Scenario, settings: &ProjectionSettings) -> Vec<u32> {
    let mut days: Vec<u32> = settings
        .checkpoints
        .iter()
        .copied()
        .chain(scenario.listeners.iter().map(|c| c.day))
        .chain(scenario.streams.iter().map(|c| c.day))
        .collect();
    days.sort_unstable();
    days.dedup();
    days
}

/// Project one scenario's listeners and streams, then price every checkpoint
pub fn project_scenario(
    scenario: &Scenario,
    listeners: &Metric,
    streams: &Metric,
    settings: &ProjectionSettings,
) -> ScenarioOutcome {
    let name = scenario.display_name();
    let days = reporting_days(scenario, settings);
    let listener_path =
        pinned_trajectory(&name, listeners, &scenario.listeners, &days, scenario.multiplier);
    let stream_path =
        pinned_trajectory(&name, streams, &scenario.streams, &days, scenario.multiplier);

    let rows = listener_path
        .checkpoints
        .iter()
        .map(|point| {
            let stream_count = stream_path.value_at(point.day).unwrap_or(streams.current);
            let investment = cumulative_investment(scenario.monthly_amount, point.day);
            let revenue = estimated_revenue(stream_count, settings.royalty_rate);
            ProjectionRow {
                day: point.day,
                listeners: point.value,
                streams: stream_count,
                investment,
                revenue,
                roi: financial_roi(revenue, investment),
            }
        })
        .collect();

    log::debug!(
        "Projected scenario '{}' (monthly {:.2}) across {} checkpoints",
        name,
        scenario.monthly_amount,
        listener_path.checkpoints.len()
    );

    ScenarioOutcome {
        tier: scenario.tier,
        name,
        budget: scenario.budget(),
        rows,
    }
}

/// Every scenario projected, listed in ascending investment order
pub fn compare_scenarios(
    scenarios: &[Scenario],
    listeners: &Metric,
    streams: &Metric,
    settings: &ProjectionSettings,
) -> Vec<ScenarioOutcome> {
    let mut ordered: Vec<&Scenario> = scenarios.iter().collect();
    ordered.sort_by(|a, b| {
        a.monthly_amount
            .total_cmp(&b.monthly_amount)
            .then(a.tier.cmp(&b.tier))
    });

    ordered
        .into_iter()
        .map(|scenario| project_scenario(scenario, listeners, streams, settings))
        .collect()
}

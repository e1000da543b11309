use serde::{Deserialize, Serialize};

use super::defaults::{default_funnel, default_kpis, default_metrics, default_platforms, default_tasks};
use super::presets::default_scenarios;
use super::scoring::default_categories;
use crate::core::{FunnelStage, Metric, WeightedCategory};
use crate::errors::{MetricsError, Result};
use crate::metrics::progress::{KpiRow, Platform};
use crate::projection::{ProjectionSettings, Scenario};
use crate::tracker::Task;

/// Root configuration structure: the record store every pass reads from.
///
/// Each section falls back to the built-in audit figures when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GrowthmapConfig {
    /// Named metrics with their current value and 90-day target
    #[serde(default = "default_metrics")]
    pub metrics: Vec<Metric>,

    /// Brand-health categories for the composite score
    #[serde(default = "default_categories")]
    pub categories: Vec<WeightedCategory>,

    /// Ordered audience funnel
    #[serde(default = "default_funnel")]
    pub funnel: Vec<FunnelStage>,

    /// KPI dashboard rows
    #[serde(default = "default_kpis")]
    pub kpis: Vec<KpiRow>,

    /// Social platforms for growth-rate reporting
    #[serde(default = "default_platforms")]
    pub platforms: Vec<Platform>,

    /// Royalty rate and reporting checkpoints
    #[serde(default)]
    pub projection: ProjectionSettings,

    /// Budget scenarios
    #[serde(default = "default_scenarios")]
    pub scenarios: Vec<Scenario>,

    /// Action-plan task tracker
    #[serde(default = "default_tasks")]
    pub tasks: Vec<Task>,
}

impl Default for GrowthmapConfig {
    fn default() -> Self {
        Self {
            metrics: default_metrics(),
            categories: default_categories(),
            funnel: default_funnel(),
            kpis: default_kpis(),
            platforms: default_platforms(),
            projection: ProjectionSettings::default(),
            scenarios: default_scenarios(),
            tasks: default_tasks(),
        }
    }
}

impl GrowthmapConfig {
    pub fn metric(&self, name: &str) -> Result<&Metric> {
        find_metric(&self.metrics, name)
    }

    /// Add every built-in metric the file left out, keeping the file's own
    /// records (and their order) first
    pub fn with_default_metrics(mut self) -> Self {
        let missing: Vec<Metric> = default_metrics()
            .into_iter()
            .filter(|d| !self.metrics.iter().any(|m| m.name == d.name))
            .collect();
        self.metrics.extend(missing);
        self
    }
}

/// Lookup by name in any metric set (e.g. one with overrides applied)
pub fn find_metric<'a>(metrics: &'a [Metric], name: &str) -> Result<&'a Metric> {
    metrics
        .iter()
        .find(|m| m.name == name)
        .ok_or_else(|| MetricsError::UnknownMetric(name.to_string()))
}

//! Explicit per-invocation UI state.
//!
//! The selected section and every operator override travel in a
//! [`SessionState`] value handed to the recomputation pass. Nothing here is
//! persisted.

use crate::config::defaults::{CRITICAL_ISSUE_COUNT, SPOTIFY_LISTENERS};
use crate::core::Metric;
use crate::errors::{MetricsError, Result};
use crate::tracker::TaskStatus;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Summary,
    Kpis,
    Funnel,
    Scenarios,
    Assessment,
    Tasks,
}

/// Inclusive bounds an override must fall within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub min: f64,
    pub max: f64,
}

impl InputBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn check(&self, name: &str, value: f64) -> Result<f64> {
        if value.is_finite() && (self.min..=self.max).contains(&value) {
            Ok(value)
        } else {
            Err(MetricsError::out_of_range(name, value, self.min, self.max))
        }
    }
}

/// Range of the "current listeners" number input
pub const LISTENER_INPUT_BOUNDS: InputBounds = InputBounds::new(0.0, 1000.0);
pub const METRIC_INPUT_BOUNDS: InputBounds = InputBounds::new(0.0, 10_000_000.0);
pub const SLIDER_BOUNDS: InputBounds = InputBounds::new(0.0, 100.0);

pub fn override_bounds(metric: &str) -> InputBounds {
    if metric == SPOTIFY_LISTENERS {
        LISTENER_INPUT_BOUNDS
    } else {
        METRIC_INPUT_BOUNDS
    }
}

/// Operator-supplied replacements for metric `current` values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Overrides {
    values: BTreeMap<String, f64>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an override after checking it against the input's bounds
    pub fn set(&mut self, metric: impl Into<String>, value: f64) -> Result<()> {
        let metric = metric.into();
        let value = override_bounds(&metric).check(&metric, value)?;
        self.values.insert(metric, value);
        Ok(())
    }

    pub fn get(&self, metric: &str) -> Option<f64> {
        self.values.get(metric).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Metrics with overrides substituted; an override for an unknown metric is an error
    pub fn apply(&self, metrics: &[Metric]) -> Result<Vec<Metric>> {
        if let Some(unknown) = self
            .values
            .keys()
            .find(|name| !metrics.iter().any(|m| &m.name == *name))
        {
            return Err(MetricsError::UnknownMetric(unknown.clone()));
        }

        Ok(metrics
            .iter()
            .map(|m| match self.get(&m.name) {
                Some(current) => m.clone().with_current(current),
                None => m.clone(),
            })
            .collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub section: Section,
    pub overrides: Overrides,
    /// Fix-progress slider per critical issue, each 0-100
    pub issue_progress: Vec<u8>,
    /// Tracker statuses keyed by task name
    pub task_statuses: BTreeMap<String, TaskStatus>,
}

impl SessionState {
    pub fn new(section: Section) -> Self {
        Self {
            section,
            ..Default::default()
        }
    }

    pub fn with_override(mut self, metric: impl Into<String>, value: f64) -> Result<Self> {
        self.overrides.set(metric, value)?;
        Ok(self)
    }

    /// One slider per critical issue; issues left out stay at 0
    pub fn with_issue_progress(mut self, values: &[u32]) -> Result<Self> {
        if values.len() > CRITICAL_ISSUE_COUNT {
            return Err(MetricsError::out_of_range(
                "issue slider count",
                values.len() as f64,
                0.0,
                CRITICAL_ISSUE_COUNT as f64,
            ));
        }
        self.issue_progress = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                SLIDER_BOUNDS
                    .check(&format!("issue {} progress", i + 1), f64::from(v))
                    .map(|_| v as u8)
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(self)
    }

    pub fn with_task_status(mut self, task: impl Into<String>, status: TaskStatus) -> Self {
        self.task_statuses.insert(task.into(), status);
        self
    }
}

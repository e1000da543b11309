//! Value records shared by every calculator.
//!
//! Everything here is an immutable value built fresh per recomputation pass
//! from the record store plus optional operator overrides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Metric {
    pub name: String,
    pub current: f64,
    pub target: f64,
}

impl Metric {
    pub fn new(name: impl Into<String>, current: f64, target: f64) -> Self {
        Self {
            name: name.into(),
            current,
            target,
        }
    }

    /// Replace the current value for this session only
    pub fn with_current(self, current: f64) -> Self {
        Self { current, ..self }
    }

    pub fn progress(&self) -> f64 {
        crate::metrics::progress::compute_progress(self.current, self.target)
    }
}

/// A sub-score (0-10) with its contribution weight (0-1)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeightedCategory {
    pub name: String,
    pub score: f64,
    pub weight: f64,
}

impl WeightedCategory {
    pub fn new(name: impl Into<String>, score: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            score,
            weight,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunnelStage {
    pub label: String,
    pub count: u64,
}

impl FunnelStage {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Checkpoint {
    pub day: u32,
    pub value: f64,
}

impl Checkpoint {
    pub fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }
}

/// Budget tiers in ascending investment order
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioTier {
    Organic,
    Entry,
    Standard,
    Growth,
}

impl ScenarioTier {
    pub const ALL: [ScenarioTier; 4] = [
        ScenarioTier::Organic,
        ScenarioTier::Entry,
        ScenarioTier::Standard,
        ScenarioTier::Growth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Organic => "Organic",
            Self::Entry => "Entry Budget",
            Self::Standard => "Standard Budget",
            Self::Growth => "Growth Budget",
        }
    }
}

impl fmt::Display for ScenarioTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named trajectory of (day, value) checkpoints
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScenarioProjection {
    pub scenario_name: String,
    pub checkpoints: Vec<Checkpoint>,
}

impl ScenarioProjection {
    pub fn final_value(&self) -> Option<f64> {
        self.checkpoints.last().map(|c| c.value)
    }

    pub fn value_at(&self, day: u32) -> Option<f64> {
        self.checkpoints
            .iter()
            .find(|c| c.day == day)
            .map(|c| c.value)
    }

    /// Checkpoints must be ordered by non-decreasing day
    pub fn is_ordered(&self) -> bool {
        self.checkpoints.windows(2).all(|w| w[0].day <= w[1].day)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct BudgetAllocation {
    pub scenario_name: String,
    pub monthly_amount: f64,
    #[serde(default)]
    pub channel_splits: BTreeMap<String, f64>,
}

impl BudgetAllocation {
    pub fn split_total(&self) -> f64 {
        self.channel_splits.values().sum()
    }

    pub fn splits_balance(&self) -> bool {
        (self.split_total() - self.monthly_amount).abs() < 0.005
    }
}

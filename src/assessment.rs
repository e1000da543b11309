//! Outcome classification for the primary KPI (monthly listeners).

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessBand {
    MinimalProgress,
    SlowProgress,
    ModerateProgress,
    StrongProgress,
    TargetExceeded,
}

impl SuccessBand {
    pub fn from_listeners(listeners: u64) -> Self {
        match listeners {
            500.. => Self::TargetExceeded,
            300..=499 => Self::StrongProgress,
            100..=299 => Self::ModerateProgress,
            50..=99 => Self::SlowProgress,
            _ => Self::MinimalProgress,
        }
    }

    pub fn range_label(&self) -> &'static str {
        match self {
            Self::TargetExceeded => "500+ listeners",
            Self::StrongProgress => "300-499 listeners",
            Self::ModerateProgress => "100-299 listeners",
            Self::SlowProgress => "50-99 listeners",
            Self::MinimalProgress => "< 50 listeners",
        }
    }

    pub fn next_steps(&self) -> &'static str {
        match self {
            Self::TargetExceeded => "Ready for next phase",
            Self::StrongProgress => "On track, continue",
            Self::ModerateProgress => "Need strategy refinement",
            Self::SlowProgress => "Major overhaul needed",
            Self::MinimalProgress => "Fundamental issues to address",
        }
    }
}

impl fmt::Display for SuccessBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::TargetExceeded => "TARGET EXCEEDED",
            Self::StrongProgress => "STRONG PROGRESS",
            Self::ModerateProgress => "MODERATE PROGRESS",
            Self::SlowProgress => "SLOW PROGRESS",
            Self::MinimalProgress => "MINIMAL PROGRESS",
        };
        f.write_str(label)
    }
}

/// Post-90-day strategy, chosen from where the listener count landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTier {
    TargetAchieved,
    ModerateProgress,
    MinimalProgress,
}

impl StrategyTier {
    pub fn from_listeners(listeners: u64) -> Self {
        match listeners {
            500.. => Self::TargetAchieved,
            100..=499 => Self::ModerateProgress,
            _ => Self::MinimalProgress,
        }
    }

    /// Day-180 monthly listener target as an inclusive range
    pub fn day_180_target(&self) -> (u64, u64) {
        match self {
            Self::TargetAchieved => (1_500, 2_000),
            Self::ModerateProgress => (500, 1_000),
            Self::MinimalProgress => (200, 500),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TargetAchieved => "Target Achieved (500+ listeners)",
            Self::ModerateProgress => "Moderate Progress (100-499 listeners)",
            Self::MinimalProgress => "Minimal Progress (< 100 listeners)",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub listeners: u64,
    pub band: SuccessBand,
    pub next_steps: &'static str,
    pub strategy: StrategyTier,
    pub day_180_target: (u64, u64),
}

pub fn assess(listeners: u64) -> Assessment {
    let band = SuccessBand::from_listeners(listeners);
    let strategy = StrategyTier::from_listeners(listeners);
    Assessment {
        listeners,
        band,
        next_steps: band.next_steps(),
        strategy,
        day_180_target: strategy.day_180_target(),
    }
}

//! Budget scenario presets.
//!
//! Pinned checkpoint values are the audit's estimates for each tier; the
//! curve only fills days that have no estimate.

use crate::core::{Checkpoint, ScenarioTier};
use crate::projection::Scenario;
use std::collections::BTreeMap;

fn checkpoints(points: &[(u32, f64)]) -> Vec<Checkpoint> {
    points
        .iter()
        .map(|&(day, value)| Checkpoint::new(day, value))
        .collect()
}

fn splits(channels: &[(&str, f64)]) -> BTreeMap<String, f64> {
    channels
        .iter()
        .map(|&(name, amount)| (name.to_string(), amount))
        .collect()
}

pub fn default_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            tier: ScenarioTier::Organic,
            name: None,
            monthly_amount: 0.0,
            channel_splits: BTreeMap::new(),
            multiplier: 0.2,
            listeners: checkpoints(&[(30, 8.0), (60, 20.0), (90, 40.0)]),
            streams: checkpoints(&[(30, 1150.0), (60, 1400.0), (90, 1800.0)]),
        },
        Scenario {
            tier: ScenarioTier::Entry,
            name: None,
            monthly_amount: 50.0,
            channel_splits: splits(&[("instagram_reels", 30.0), ("facebook_ads", 20.0)]),
            multiplier: 0.5,
            listeners: checkpoints(&[(30, 30.0), (60, 110.0), (90, 200.0)]),
            streams: checkpoints(&[(30, 1600.0), (60, 3200.0), (90, 5500.0)]),
        },
        Scenario {
            tier: ScenarioTier::Standard,
            name: None,
            monthly_amount: 100.0,
            channel_splits: splits(&[
                ("instagram_reels", 60.0),
                ("facebook_ads", 25.0),
                ("playlist_pitching", 15.0),
            ]),
            multiplier: 0.8,
            listeners: checkpoints(&[(30, 60.0), (60, 220.0), (90, 400.0)]),
            streams: checkpoints(&[(30, 2200.0), (60, 5500.0), (90, 9800.0)]),
        },
        Scenario {
            tier: ScenarioTier::Growth,
            name: None,
            monthly_amount: 200.0,
            channel_splits: splits(&[
                ("instagram_reels", 100.0),
                ("facebook_ads", 40.0),
                ("tiktok_promote", 30.0),
                ("playlist_pitching", 30.0),
            ]),
            multiplier: 1.1,
            listeners: checkpoints(&[(30, 100.0), (60, 350.0), (90, 600.0)]),
            streams: checkpoints(&[(30, 3000.0), (60, 8500.0), (90, 16000.0)]),
        },
    ]
}

//! Property-based tests for the growth projection engine
//!
//! - Organic (unfunded) scenarios never yield a numeric ROI
//! - A degenerate projection with no checkpoints returns its start value
//! - Scenario comparisons are listed in ascending spend

use growthmap::config::presets::default_scenarios;
use growthmap::{
    compare_scenarios, compute_projection, project_scenario, Checkpoint, Metric,
    ProjectionSettings, Roi, Scenario, ScenarioTier,
};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn listeners() -> Metric {
    Metric::new("spotify_listeners", 2.0, 500.0)
}

fn streams() -> Metric {
    Metric::new("total_streams", 1000.0, 15000.0)
}

fn tier() -> impl Strategy<Value = ScenarioTier> {
    prop_oneof![
        Just(ScenarioTier::Organic),
        Just(ScenarioTier::Entry),
        Just(ScenarioTier::Standard),
        Just(ScenarioTier::Growth),
    ]
}

fn scenario() -> impl Strategy<Value = Scenario> {
    (tier(), 0u32..500, 0.0f64..2.0).prop_map(|(tier, amount, multiplier)| Scenario {
        tier,
        name: None,
        monthly_amount: amount as f64,
        channel_splits: BTreeMap::new(),
        multiplier,
        listeners: vec![],
        streams: vec![],
    })
}

#[test]
fn test_default_organic_scenario_roi_not_applicable() {
    let organic = &default_scenarios()[0];
    assert_eq!(organic.monthly_amount, 0.0);

    let outcome = project_scenario(organic, &listeners(), &streams(), &ProjectionSettings::default());
    for row in &outcome.rows {
        assert_eq!(row.roi, Roi::NotApplicable);
        assert!(row.revenue.is_finite());
    }
}

#[test]
fn test_default_growth_scenario_reports_negative_roi() {
    let growth = &default_scenarios()[3];
    let outcome = project_scenario(growth, &listeners(), &streams(), &ProjectionSettings::default());
    let last = outcome.final_row().unwrap();
    assert_eq!(last.day, 90);
    assert_eq!(last.listeners, 600.0);
    assert!(last.roi.ratio().unwrap() < 0.0);
}

#[test]
fn test_final_value_round_trip() {
    for scenario in default_scenarios() {
        let outcome = project_scenario(&scenario, &listeners(), &streams(), &ProjectionSettings::default());
        let last = outcome.final_row().unwrap().listeners;
        assert_eq!(compute_projection(last, 500.0, &[], 1.0), vec![Checkpoint::new(0, last)]);
    }
}

proptest! {
    #[test]
    fn prop_unfunded_roi_never_numeric(
        multiplier in 0.0f64..3.0,
        days in prop::collection::vec(0u32..365, 0..6),
        rate in 0.0f64..0.05,
    ) {
        let organic = Scenario {
            tier: ScenarioTier::Organic,
            name: None,
            monthly_amount: 0.0,
            channel_splits: BTreeMap::new(),
            multiplier,
            listeners: vec![],
            streams: vec![],
        };
        let settings = ProjectionSettings { royalty_rate: rate, checkpoints: days };
        let outcome = project_scenario(&organic, &listeners(), &streams(), &settings);
        for row in &outcome.rows {
            prop_assert_eq!(row.roi, Roi::NotApplicable);
        }
    }

    #[test]
    fn prop_paid_roi_is_finite(amount in 1u32..1000, rate in 0.0f64..0.05) {
        let paid = Scenario {
            tier: ScenarioTier::Entry,
            name: None,
            monthly_amount: amount as f64,
            channel_splits: BTreeMap::new(),
            multiplier: 1.0,
            listeners: vec![],
            streams: vec![],
        };
        let settings = ProjectionSettings { royalty_rate: rate, ..Default::default() };
        let outcome = project_scenario(&paid, &listeners(), &streams(), &settings);
        for row in outcome.rows.iter().filter(|r| r.day >= 30) {
            let ratio = row.roi.ratio();
            prop_assert!(ratio.is_some_and(f64::is_finite));
        }
    }

    #[test]
    fn prop_empty_projection_returns_start(start in 0.0f64..1e6, target in 0.0f64..1e6, m in 0.0f64..3.0) {
        let points = compute_projection(start, target, &[], m);
        prop_assert_eq!(points, vec![Checkpoint::new(0, start)]);
    }

    #[test]
    fn prop_day_zero_equals_start(
        start in 0.0f64..1e4,
        target in 0.0f64..1e4,
        days in prop::collection::vec(1u32..365, 0..6),
    ) {
        let points = compute_projection(start, target, &days, 1.0);
        prop_assert_eq!(points[0], Checkpoint::new(0, start));
        prop_assert!(points.windows(2).all(|w| w[0].day < w[1].day));
    }

    #[test]
    fn prop_comparison_ascending_spend(scenarios in prop::collection::vec(scenario(), 0..8)) {
        let outcomes = compare_scenarios(&scenarios, &listeners(), &streams(), &ProjectionSettings::default());
        prop_assert_eq!(outcomes.len(), scenarios.len());
        for pair in outcomes.windows(2) {
            prop_assert!(pair[0].budget.monthly_amount <= pair[1].budget.monthly_amount);
            if pair[0].budget.monthly_amount < pair[1].budget.monthly_amount {
                continue;
            }
            prop_assert!(pair[0].tier <= pair[1].tier);
        }
    }
}

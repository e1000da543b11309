//! Structural checks on a loaded record set.
//!
//! All problems are collected rather than stopping at the first one.

use super::core::GrowthmapConfig;
use std::collections::HashSet;

pub fn validate_config(config: &GrowthmapConfig) -> Vec<String> {
    let mut errors = Vec::new();
    errors.extend(validate_metrics(config));
    errors.extend(validate_kpi_links(config));
    errors.extend(validate_scenarios(config));
    errors.extend(validate_checkpoints(config));
    errors
}

fn validate_metrics(config: &GrowthmapConfig) -> Vec<String> {
    let mut seen = HashSet::new();
    config
        .metrics
        .iter()
        .flat_map(|m| {
            let mut found = Vec::new();
            if m.current < 0.0 || m.target < 0.0 {
                found.push(format!("metric '{}' must not be negative", m.name));
            }
            if !seen.insert(m.name.as_str()) {
                found.push(format!("metric '{}' is defined twice", m.name));
            }
            found
        })
        .collect()
}

fn validate_kpi_links(config: &GrowthmapConfig) -> Vec<String> {
    config
        .kpis
        .iter()
        .filter_map(|kpi| kpi.metric.as_deref().map(|name| (kpi, name)))
        .filter(|(_, name)| config.metric(name).is_err())
        .map(|(kpi, name)| format!("KPI '{}' links to unknown metric '{}'", kpi.name, name))
        .collect()
}

fn validate_scenarios(config: &GrowthmapConfig) -> Vec<String> {
    config
        .scenarios
        .iter()
        .flat_map(|scenario| {
            let name = scenario.display_name();
            let budget = scenario.budget();
            let mut found = Vec::new();
            if scenario.monthly_amount < 0.0 {
                found.push(format!("scenario '{}' has a negative monthly amount", name));
            }
            if !budget.splits_balance() {
                found.push(format!(
                    "scenario '{}' channel splits sum to {:.2}, expected {:.2}",
                    name,
                    budget.split_total(),
                    budget.monthly_amount
                ));
            }
            for (label, pins) in [("listeners", &scenario.listeners), ("streams", &scenario.streams)] {
                if !pins.windows(2).all(|w| w[0].day <= w[1].day) {
                    found.push(format!(
                        "scenario '{}' {} checkpoints are not ordered by day",
                        name, label
                    ));
                }
            }
            found
        })
        .collect()
}

fn validate_checkpoints(config: &GrowthmapConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let days = &config.projection.checkpoints;
    if !days.windows(2).all(|w| w[0] <= w[1]) {
        errors.push("projection checkpoints are not ordered by day".to_string());
    }
    if config.projection.royalty_rate < 0.0 {
        errors.push("royalty rate must not be negative".to_string());
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Checkpoint, Metric};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&GrowthmapConfig::default()).is_empty());
    }

    #[test]
    fn test_unbalanced_budget_is_reported() {
        let mut config = GrowthmapConfig::default();
        config.scenarios[1].monthly_amount = 75.0;
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Entry Budget"));
    }

    #[test]
    fn test_all_problems_are_collected() {
        let mut config = GrowthmapConfig::default();
        config.metrics.push(Metric::new("spotify_listeners", -1.0, 500.0));
        config.scenarios[2].listeners = vec![Checkpoint::new(60, 1.0), Checkpoint::new(30, 2.0)];
        config.projection.checkpoints = vec![0, 60, 30];
        let errors = validate_config(&config);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_dangling_kpi_link() {
        let mut config = GrowthmapConfig::default();
        config.metrics.retain(|m| m.name != "email_subscribers");
        let errors = validate_config(&config);
        assert_eq!(errors, vec!["KPI 'Email Subscribers' links to unknown metric 'email_subscribers'"]);
    }
}

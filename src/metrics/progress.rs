//! Clamped percentage-of-target calculations for progress bars and KPI tables.

use serde::{Deserialize, Serialize};

/// Percentage of `target` reached by `current`, clamped to 100.
///
/// A non-positive target yields 0 rather than dividing by zero.
pub fn compute_progress(current: f64, target: f64) -> f64 {
    if target > 0.0 {
        (current / target * 100.0).min(100.0)
    } else {
        0.0
    }
}

/// Followers gained per day since the account opened; 0 for a brand-new account
pub fn daily_growth_rate(followers: u64, days_active: u32) -> f64 {
    if days_active == 0 {
        return 0.0;
    }
    followers as f64 / days_active as f64
}

/// One line of the KPI dashboard as supplied by the operator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KpiRow {
    pub name: String,
    pub start: f64,
    pub target: f64,
    /// Defaults to `start` when the operator has not entered a value
    #[serde(default)]
    pub current: Option<f64>,
    /// Record-store metric whose current value feeds this row
    #[serde(default)]
    pub metric: Option<String>,
}

impl KpiRow {
    pub fn new(name: impl Into<String>, start: f64, target: f64) -> Self {
        Self {
            name: name.into(),
            start,
            target,
            current: None,
            metric: None,
        }
    }

    pub fn linked_to(self, metric: impl Into<String>) -> Self {
        Self {
            metric: Some(metric.into()),
            ..self
        }
    }

    pub fn current_value(&self) -> f64 {
        self.current.unwrap_or(self.start)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct KpiProgress {
    pub name: String,
    pub start: f64,
    pub target: f64,
    pub current: f64,
    pub progress: f64,
}

impl From<&KpiRow> for KpiProgress {
    fn from(row: &KpiRow) -> Self {
        let current = row.current_value();
        Self {
            name: row.name.clone(),
            start: row.start,
            target: row.target,
            current,
            progress: compute_progress(current, row.target),
        }
    }
}

pub fn kpi_dashboard(rows: &[KpiRow]) -> Vec<KpiProgress> {
    rows.iter().map(KpiProgress::from).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Platform {
    pub name: String,
    pub followers: u64,
    pub days_active: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PlatformGrowth {
    pub name: String,
    pub followers: u64,
    pub per_day: f64,
}

impl From<&Platform> for PlatformGrowth {
    fn from(platform: &Platform) -> Self {
        Self {
            name: platform.name.clone(),
            followers: platform.followers,
            per_day: daily_growth_rate(platform.followers, platform.days_active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_basic() {
        assert!((compute_progress(2.0, 500.0) - 0.4).abs() < 1e-9);
        assert_eq!(format!("{:.1}", compute_progress(33.0, 300.0)), "11.0");
    }

    #[test]
    fn test_progress_clamps_over_achievement() {
        assert_eq!(compute_progress(1200.0, 500.0), 100.0);
        assert_eq!(compute_progress(500.0, 500.0), 100.0);
    }

    #[test]
    fn test_progress_zero_target_falls_back() {
        assert_eq!(compute_progress(10.0, 0.0), 0.0);
        assert_eq!(compute_progress(10.0, -5.0), 0.0);
        assert_eq!(compute_progress(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_kpi_current_defaults_to_start() {
        let row = KpiRow::new("Email Subscribers", 0.0, 100.0);
        let progress = KpiProgress::from(&row);
        assert_eq!(progress.current, 0.0);
        assert_eq!(progress.progress, 0.0);
    }

    #[test]
    fn test_kpi_dashboard_uses_override() {
        let mut row = KpiRow::new("Spotify Monthly Listeners", 2.0, 500.0);
        row.current = Some(250.0);
        let rows = kpi_dashboard(&[row]);
        assert_eq!(rows[0].progress, 50.0);
    }

    #[test]
    fn test_daily_growth_rate() {
        assert_eq!(format!("{:.2}", daily_growth_rate(849, 1806)), "0.47");
        assert_eq!(daily_growth_rate(12, 0), 0.0);
    }
}

//! Composite brand-health score.
//!
//! The composite is a plain weighted sum. It is never divided by the weight
//! total, so a category set whose weights do not sum to 1.0 produces a
//! number that is not literally "out of 10". Published figures depend on
//! this, so the sum stays unnormalized.

use crate::core::WeightedCategory;
use serde::Serialize;
use std::fmt;

/// Sum of `score * weight` over all categories; 0 for an empty set
pub fn compute_weighted_score(categories: &[WeightedCategory]) -> f64 {
    categories.iter().map(|c| c.score * c.weight).sum()
}

/// Sum of weights, reported next to the score so an inconsistent set is visible
pub fn weight_total(categories: &[WeightedCategory]) -> f64 {
    categories.iter().map(|c| c.weight).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    CriticalIntervention,
    NeedsImprovement,
    Healthy,
    Strong,
}

impl HealthStatus {
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 4.0 => Self::CriticalIntervention,
            s if s < 6.0 => Self::NeedsImprovement,
            s if s < 8.0 => Self::Healthy,
            _ => Self::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CriticalIntervention => "Critical Intervention Required",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Healthy => "Healthy",
            Self::Strong => "Strong",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryContribution {
    pub name: String,
    pub score: f64,
    pub weight: f64,
    pub contribution: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub categories: Vec<CategoryContribution>,
    pub weight_total: f64,
    pub composite: f64,
    pub status: HealthStatus,
}

impl ScoreBreakdown {
    pub fn from_categories(categories: &[WeightedCategory]) -> Self {
        let composite = compute_weighted_score(categories);
        let total = weight_total(categories);
        if (total - 1.0).abs() > 0.001 && !categories.is_empty() {
            log::debug!("Category weights sum to {:.3}; composite is not normalized", total);
        }

        Self {
            categories: categories
                .iter()
                .map(|c| CategoryContribution {
                    name: c.name.clone(),
                    score: c.score,
                    weight: c.weight,
                    contribution: c.score * c.weight,
                })
                .collect(),
            weight_total: total,
            composite,
            status: HealthStatus::from_score(composite),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brand_categories() -> Vec<WeightedCategory> {
        vec![
            WeightedCategory::new("Content Quality", 9.0, 0.2),
            WeightedCategory::new("Brand Consistency", 8.0, 0.15),
            WeightedCategory::new("Audience Size", 1.0, 0.25),
            WeightedCategory::new("Engagement Rate", 2.0, 0.2),
            WeightedCategory::new("Streaming Performance", 1.0, 0.2),
        ]
    }

    #[test]
    fn test_brand_health_composite() {
        let score = compute_weighted_score(&brand_categories());
        assert!((score - 3.85).abs() < 1e-9);
        assert_eq!(format!("{:.1}", score), "3.9");
    }

    #[test]
    fn test_empty_categories_score_zero() {
        assert_eq!(compute_weighted_score(&[]), 0.0);
    }

    #[test]
    fn test_weights_are_not_renormalized() {
        let categories = vec![
            WeightedCategory::new("a", 10.0, 0.5),
            WeightedCategory::new("b", 10.0, 0.25),
        ];
        assert!((compute_weighted_score(&categories) - 7.5).abs() < 1e-9);
        assert!((weight_total(&categories) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(HealthStatus::from_score(3.85), HealthStatus::CriticalIntervention);
        assert_eq!(HealthStatus::from_score(4.0), HealthStatus::NeedsImprovement);
        assert_eq!(HealthStatus::from_score(7.99), HealthStatus::Healthy);
        assert_eq!(HealthStatus::from_score(8.0), HealthStatus::Strong);
    }

    #[test]
    fn test_breakdown_contributions_sum_to_composite() {
        let breakdown = ScoreBreakdown::from_categories(&brand_categories());
        let sum: f64 = breakdown.categories.iter().map(|c| c.contribution).sum();
        assert!((sum - breakdown.composite).abs() < 1e-9);
        assert_eq!(breakdown.status, HealthStatus::CriticalIntervention);
    }
}

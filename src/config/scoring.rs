//! Brand-health category weights
//!
//! Weights are expected to sum to 1.0 so the composite reads as "out of 10",
//! but the composite itself never enforces this. Validation here only
//! warns.

use crate::core::WeightedCategory;

// Pure function: Check if a weight is in valid range
pub fn is_valid_weight(weight: f64) -> bool {
    (0.0..=1.0).contains(&weight)
}

// Pure function: Check if a category score is in valid range
pub fn is_valid_score(score: f64) -> bool {
    (0.0..=10.0).contains(&score)
}

/// Problems worth warning about; none of them stop the composite being computed
pub fn category_warnings(categories: &[WeightedCategory]) -> Vec<String> {
    let mut warnings: Vec<String> = categories
        .iter()
        .flat_map(|c| {
            let mut found = Vec::new();
            if !is_valid_score(c.score) {
                found.push(format!("{} score {} is outside 0-10", c.name, c.score));
            }
            if !is_valid_weight(c.weight) {
                found.push(format!("{} weight {} is outside 0.0-1.0", c.name, c.weight));
            }
            found
        })
        .collect();

    let sum: f64 = categories.iter().map(|c| c.weight).sum();
    if !categories.is_empty() && (sum - 1.0).abs() > 0.001 {
        warnings.push(format!(
            "Category weights sum to {:.3}; the composite will not read as out of 10",
            sum
        ));
    }

    warnings
}

pub fn default_categories() -> Vec<WeightedCategory> {
    vec![
        WeightedCategory::new("Content Quality", 9.0, 0.20),
        WeightedCategory::new("Brand Consistency", 8.0, 0.15),
        WeightedCategory::new("Audience Size", 1.0, 0.25),
        WeightedCategory::new("Engagement Rate", 2.0, 0.20),
        WeightedCategory::new("Streaming Performance", 1.0, 0.20),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories_have_no_warnings() {
        assert!(category_warnings(&default_categories()).is_empty());
    }

    #[test]
    fn test_inconsistent_weights_warn() {
        let categories = vec![
            WeightedCategory::new("a", 5.0, 0.5),
            WeightedCategory::new("b", 12.0, 0.2),
        ];
        let warnings = category_warnings(&categories);
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("outside 0-10"));
        assert!(warnings[1].contains("sum to 0.700"));
    }
}

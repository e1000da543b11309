//! Audience funnel calculations.
//!
//! Two series are produced and they use different bases:
//! `pct_of_initial` divides by the first stage, while
//! [`stage_conversion_rates`] divides by the immediately preceding stage.
//! Neither is derived from the other.

use crate::core::FunnelStage;
use crate::errors::{MetricsError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FunnelRow {
    pub label: String,
    pub count: u64,
    pub pct_of_initial: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StageConversion {
    pub from: String,
    pub to: String,
    pub rate: f64,
}

/// Percentage of the first stage's count reached by every stage.
///
/// A funnel with no entrants is a configuration error, so an empty funnel
/// or a zero first stage fails instead of producing a fallback.
pub fn compute_funnel(stages: &[FunnelStage]) -> Result<Vec<FunnelRow>> {
    let initial = match stages.first() {
        Some(stage) if stage.count > 0 => stage.count as f64,
        Some(stage) => {
            return Err(MetricsError::division_by_zero(format!(
                "funnel stage '{}' has no entrants",
                stage.label
            )))
        }
        None => return Err(MetricsError::division_by_zero("funnel has no stages")),
    };

    Ok(stages
        .iter()
        .map(|stage| FunnelRow {
            label: stage.label.clone(),
            count: stage.count,
            pct_of_initial: stage.count as f64 / initial * 100.0,
        })
        .collect())
}

/// Conversion between each pair of adjacent stages
pub fn stage_conversion_rates(stages: &[FunnelStage]) -> Result<Vec<StageConversion>> {
    stages
        .windows(2)
        .map(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.count == 0 {
                return Err(MetricsError::division_by_zero(format!(
                    "conversion from empty stage '{}'",
                    prev.label
                )));
            }
            Ok(StageConversion {
                from: prev.label.clone(),
                to: next.label.clone(),
                rate: next.count as f64 / prev.count as f64 * 100.0,
            })
        })
        .collect()
}

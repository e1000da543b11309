use crate::core::Checkpoint;

/// Steepness of the logistic adoption curve
const CURVE_STEEPNESS: f64 = 10.0;

fn logistic(x: f64) -> f64 {
    1.0 / (1.0 + (-CURVE_STEEPNESS * (x - 0.5)).exp())
}

/// Share of the total gain realised at `elapsed` (0.0-1.0 of the horizon).
///
/// Rescaled so the curve passes exactly through 0 at the start and 1 at the
/// end of the horizon.
pub fn adoption_fraction(elapsed: f64) -> f64 {
    let x = elapsed.clamp(0.0, 1.0);
    let lo = logistic(0.0);
    let hi = logistic(1.0);
    (logistic(x) - lo) / (hi - lo)
}

/// Project `start` toward `target` across the given checkpoint days.
///
/// The total gain `target - start` is scaled by `scenario_multiplier` and
/// distributed along the adoption curve, with the last checkpoint as the
/// horizon. Day 0 is always present and equals `start`; an empty checkpoint
/// list therefore yields just `[(0, start)]`.
pub fn compute_projection(
    start: f64,
    target: f64,
    checkpoints: &[u32],
    scenario_multiplier: f64,
) -> Vec<Checkpoint> {
    let mut days: Vec<u32> = checkpoints.to_vec();
    days.push(0);
    days.sort_unstable();
    days.dedup();

    let horizon = days.last().copied().unwrap_or(0);
    let gain = (target - start) * scenario_multiplier;

    days.into_iter()
        .map(|day| {
            let value = if day == 0 || horizon == 0 {
                start
            } else {
                start + gain * adoption_fraction(day as f64 / horizon as f64)
            };
            Checkpoint::new(day, value)
        })
        .collect()
}

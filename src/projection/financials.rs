use serde::{Serialize, Serializer};
use std::fmt;

pub const DAYS_PER_MONTH: u32 = 30;

/// Whole months of spend completed by `day`
pub fn months_elapsed(day: u32) -> u32 {
    day / DAYS_PER_MONTH
}

pub fn cumulative_investment(monthly_amount: f64, day: u32) -> f64 {
    monthly_amount * months_elapsed(day) as f64
}

/// Royalty revenue for a cumulative stream count
pub fn estimated_revenue(cumulative_streams: f64, royalty_rate: f64) -> f64 {
    cumulative_streams * royalty_rate
}

/// Financial return on spend.
///
/// Negative values are expected for small catalogues and are reported as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Roi {
    Ratio(f64),
    /// No money has been invested yet
    NotApplicable,
}

impl Roi {
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Self::Ratio(r) => Some(*r),
            Self::NotApplicable => None,
        }
    }
}

impl fmt::Display for Roi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ratio(r) => write!(f, "{:.1}%", r * 100.0),
            Self::NotApplicable => f.write_str("N/A"),
        }
    }
}

impl Serialize for Roi {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Ratio(r) => serializer.serialize_f64(*r),
            Self::NotApplicable => serializer.serialize_str("n/a"),
        }
    }
}

/// `(revenue - investment) / investment`, or `NotApplicable` with nothing invested
pub fn financial_roi(revenue: f64, investment: f64) -> Roi {
    if investment > 0.0 {
        let ratio = (revenue - investment) / investment;
        if ratio.is_finite() {
            return Roi::Ratio(ratio);
        }
    }
    Roi::NotApplicable
}

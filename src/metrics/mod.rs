pub mod funnel;
pub mod progress;

pub use funnel::{compute_funnel, stage_conversion_rates, FunnelRow, StageConversion};
pub use progress::{
    compute_progress, daily_growth_rate, kpi_dashboard, KpiProgress, KpiRow, Platform,
    PlatformGrowth,
};

//! Built-in record set matching the published audit figures.

use crate::core::{FunnelStage, Metric};
use crate::metrics::progress::{KpiRow, Platform};
use crate::tracker::{Task, TaskStatus};

pub const SPOTIFY_LISTENERS: &str = "spotify_listeners";
pub const INSTAGRAM_FOLLOWERS: &str = "instagram_followers";
pub const YOUTUBE_SUBSCRIBERS: &str = "youtube_subscribers";
pub const TIKTOK_FOLLOWERS: &str = "tiktok_followers";
pub const FACEBOOK_FOLLOWERS: &str = "facebook_followers";
pub const EMAIL_SUBSCRIBERS: &str = "email_subscribers";
pub const TOTAL_STREAMS: &str = "total_streams";

/// Current values and 90-day targets
pub fn default_metrics() -> Vec<Metric> {
    vec![
        Metric::new(SPOTIFY_LISTENERS, 2.0, 500.0),
        Metric::new(INSTAGRAM_FOLLOWERS, 33.0, 300.0),
        Metric::new(YOUTUBE_SUBSCRIBERS, 849.0, 1000.0),
        Metric::new(TIKTOK_FOLLOWERS, 1.0, 500.0),
        Metric::new(FACEBOOK_FOLLOWERS, 3.0, 100.0),
        Metric::new(EMAIL_SUBSCRIBERS, 0.0, 100.0),
        Metric::new(TOTAL_STREAMS, 1000.0, 15000.0),
    ]
}

pub fn default_funnel() -> Vec<FunnelStage> {
    vec![
        FunnelStage::new("Discovery", 886),
        FunnelStage::new("Follow", 886),
        FunnelStage::new("Engage", 175),
        FunnelStage::new("Stream", 2),
    ]
}

pub fn default_kpis() -> Vec<KpiRow> {
    vec![
        KpiRow::new("Spotify Monthly Listeners", 2.0, 500.0).linked_to(SPOTIFY_LISTENERS),
        KpiRow::new("Instagram Followers", 33.0, 300.0).linked_to(INSTAGRAM_FOLLOWERS),
        KpiRow::new("TikTok Followers", 1.0, 500.0).linked_to(TIKTOK_FOLLOWERS),
        KpiRow::new("Email Subscribers", 0.0, 100.0).linked_to(EMAIL_SUBSCRIBERS),
        KpiRow::new("Total Streams (90 days)", 1000.0, 15000.0).linked_to(TOTAL_STREAMS),
    ]
}

pub fn default_platforms() -> Vec<Platform> {
    [
        ("YouTube", 849, 1806),
        ("Instagram", 33, 236),
        ("Facebook", 3, 300),
        ("TikTok", 1, 100),
        ("Twitter/X", 0, 240),
    ]
    .into_iter()
    .map(|(name, followers, days_active)| Platform {
        name: name.to_string(),
        followers,
        days_active,
    })
    .collect()
}

pub fn default_tasks() -> Vec<Task> {
    [
        "YouTube thumbnails redesigned",
        "Instagram bio updated",
        "Email list setup complete",
        "First 7 Reels scheduled",
        "Collaboration outreach sent",
        "First ad campaign launched",
    ]
    .into_iter()
    .map(|name| Task {
        name: name.to_string(),
        status: TaskStatus::NotStarted,
    })
    .collect()
}

/// Number of fix-progress sliders, one per critical issue
pub const CRITICAL_ISSUE_COUNT: usize = 7;

//! One synchronous recomputation pass for the selected section.
//!
//! Pure: takes the record store and the session, returns plain values for
//! the renderer. Nothing is cached between passes.

use crate::assessment::{assess, Assessment};
use crate::config::defaults::{
    CRITICAL_ISSUE_COUNT, INSTAGRAM_FOLLOWERS, SPOTIFY_LISTENERS, TOTAL_STREAMS, YOUTUBE_SUBSCRIBERS,
};
use crate::config::{find_metric, GrowthmapConfig};
use crate::core::Metric;
use crate::errors::{MetricsError, Result};
use crate::metrics::{
    compute_funnel, kpi_dashboard, stage_conversion_rates, FunnelRow, KpiProgress, KpiRow,
    PlatformGrowth, StageConversion,
};
use crate::projection::{compare_scenarios, ProjectionSettings, ScenarioOutcome};
use crate::scoring::ScoreBreakdown;
use crate::session::{Section, SessionState};
use crate::tracker::{remediation_progress, summarize_tasks, Task, TaskSummary};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    pub score: ScoreBreakdown,
    pub headline: Vec<KpiProgress>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KpiReport {
    pub primary: KpiProgress,
    pub rows: Vec<KpiProgress>,
    pub platforms: Vec<PlatformGrowth>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FunnelReport {
    pub stages: Vec<FunnelRow>,
    pub conversions: Vec<StageConversion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub settings: ProjectionSettings,
    pub outcomes: Vec<ScenarioOutcome>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskReport {
    pub tasks: Vec<Task>,
    pub summary: TaskSummary,
    pub remediation: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum SectionReport {
    Summary(SummaryReport),
    Kpis(KpiReport),
    Funnel(FunnelReport),
    Scenarios(ScenarioReport),
    Assessment(Assessment),
    Tasks(TaskReport),
}

pub fn recompute(config: &GrowthmapConfig, session: &SessionState) -> Result<SectionReport> {
    let metrics = session.overrides.apply(&config.metrics)?;
    log::debug!(
        "Recomputing {:?} with {} metric overrides",
        session.section,
        if session.overrides.is_empty() { "no" } else { "active" }
    );

    let report = match session.section {
        Section::Summary => SectionReport::Summary(summary(config, &metrics)?),
        Section::Kpis => SectionReport::Kpis(kpis(config, &metrics)?),
        Section::Funnel => SectionReport::Funnel(FunnelReport {
            stages: compute_funnel(&config.funnel)?,
            conversions: stage_conversion_rates(&config.funnel)?,
        }),
        Section::Scenarios => SectionReport::Scenarios(ScenarioReport {
            settings: config.projection.clone(),
            outcomes: compare_scenarios(
                &config.scenarios,
                find_metric(&metrics, SPOTIFY_LISTENERS)?,
                find_metric(&metrics, TOTAL_STREAMS)?,
                &config.projection,
            ),
        }),
        Section::Assessment => {
            let listeners = find_metric(&metrics, SPOTIFY_LISTENERS)?.current;
            SectionReport::Assessment(assess(listeners.max(0.0).round() as u64))
        }
        Section::Tasks => SectionReport::Tasks(tasks(config, session)?),
    };

    Ok(report)
}

fn metric_progress(metric: &Metric, label: &str) -> KpiProgress {
    KpiProgress {
        name: label.to_string(),
        start: metric.current,
        target: metric.target,
        current: metric.current,
        progress: metric.progress(),
    }
}

fn summary(config: &GrowthmapConfig, metrics: &[Metric]) -> Result<SummaryReport> {
    let headline = [
        (SPOTIFY_LISTENERS, "Spotify Monthly Listeners"),
        (INSTAGRAM_FOLLOWERS, "Instagram Followers"),
        (YOUTUBE_SUBSCRIBERS, "YouTube Subscribers"),
    ]
    .into_iter()
    .map(|(name, label)| find_metric(metrics, name).map(|m| metric_progress(m, label)))
    .collect::<Result<Vec<_>>>()?;

    Ok(SummaryReport {
        score: ScoreBreakdown::from_categories(&config.categories),
        headline,
    })
}

/// KPI rows with linked metrics' (possibly overridden) current values filled in
fn resolve_kpis(rows: &[KpiRow], metrics: &[Metric]) -> Result<Vec<KpiRow>> {
    rows.iter()
        .map(|row| match &row.metric {
            Some(name) => {
                let metric = find_metric(metrics, name)?;
                Ok(KpiRow {
                    current: Some(metric.current),
                    ..row.clone()
                })
            }
            None => Ok(row.clone()),
        })
        .collect()
}

fn kpis(config: &GrowthmapConfig, metrics: &[Metric]) -> Result<KpiReport> {
    let listeners = find_metric(metrics, SPOTIFY_LISTENERS)?;
    let start = find_metric(&config.metrics, SPOTIFY_LISTENERS)?.current;
    let primary = KpiProgress {
        name: "Spotify Monthly Listeners".to_string(),
        start,
        target: listeners.target,
        current: listeners.current,
        progress: listeners.progress(),
    };

    Ok(KpiReport {
        primary,
        rows: kpi_dashboard(&resolve_kpis(&config.kpis, metrics)?),
        platforms: config.platforms.iter().map(PlatformGrowth::from).collect(),
    })
}

fn tasks(config: &GrowthmapConfig, session: &SessionState) -> Result<TaskReport> {
    if let Some(unknown) = session
        .task_statuses
        .keys()
        .find(|name| !config.tasks.iter().any(|t| &t.name == *name))
    {
        return Err(MetricsError::UnknownTask(unknown.clone()));
    }

    let tasks: Vec<Task> = config
        .tasks
        .iter()
        .map(|task| Task {
            name: task.name.clone(),
            status: session
                .task_statuses
                .get(&task.name)
                .copied()
                .unwrap_or(task.status),
        })
        .collect();

    Ok(TaskReport {
        summary: summarize_tasks(&tasks),
        remediation: remediation_progress(&session.issue_progress, CRITICAL_ISSUE_COUNT),
        tasks,
    })
}

//! Completion figures for the operator's task tracker and issue-fix sliders.

use crate::metrics::progress::compute_progress;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    Planning,
    InProgress,
    Completed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "not_started" | "todo" => Ok(Self::NotStarted),
            "planning" => Ok(Self::Planning),
            "in_progress" | "doing" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            other => Err(format!("unknown task status '{}'", other)),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotStarted => "Not Started",
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub name: String,
    #[serde(default)]
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskSummary {
    pub total: usize,
    pub not_started: usize,
    pub planning: usize,
    pub in_progress: usize,
    pub completed: usize,
    pub completion: f64,
}

pub fn summarize_tasks(tasks: &[Task]) -> TaskSummary {
    let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();
    let completed = count(TaskStatus::Completed);
    TaskSummary {
        total: tasks.len(),
        not_started: count(TaskStatus::NotStarted),
        planning: count(TaskStatus::Planning),
        in_progress: count(TaskStatus::InProgress),
        completed,
        completion: compute_progress(completed as f64, tasks.len() as f64),
    }
}

/// Mean fix progress across `issue_count` issues (each 0-100).
///
/// Issues without a slider value count as 0; 0 with no issues.
pub fn remediation_progress(sliders: &[u8], issue_count: usize) -> f64 {
    let issues = issue_count.max(sliders.len());
    if issues == 0 {
        return 0.0;
    }
    sliders.iter().map(|&v| f64::from(v)).sum::<f64>() / issues as f64
}

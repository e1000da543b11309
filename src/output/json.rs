use crate::commands::SectionReport;
use anyhow::Result;

pub fn render_json(report: &SectionReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub mod json;
pub mod terminal;

use crate::cli::OutputFormat;
use crate::commands::SectionReport;
use crate::formatting::FormattingConfig;
use anyhow::Result;

pub use json::render_json;
pub use terminal::TerminalRenderer;

pub fn render(
    report: &SectionReport,
    format: OutputFormat,
    formatting: FormattingConfig,
) -> Result<String> {
    match format {
        OutputFormat::Terminal => Ok(TerminalRenderer::new(formatting).render(report)?),
        OutputFormat::Json => render_json(report),
    }
}

//! Terminal tables for each dashboard section.

use crate::assessment::{Assessment, SuccessBand};
use crate::commands::report::{
    FunnelReport, KpiReport, ScenarioReport, SummaryReport, TaskReport,
};
use crate::commands::SectionReport;
use crate::formatting::{ColoredFormatter, FormattingConfig, Tone};
use crate::metrics::KpiProgress;
use comfy_table::{presets, Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use std::fmt::{self, Write};

pub struct TerminalRenderer {
    formatter: ColoredFormatter,
    styled: bool,
}

impl TerminalRenderer {
    pub fn new(config: FormattingConfig) -> Self {
        Self {
            styled: config.color.should_use_color(),
            formatter: ColoredFormatter::new(config),
        }
    }

    pub fn render(&self, report: &SectionReport) -> Result<String, fmt::Error> {
        match report {
            SectionReport::Summary(r) => self.summary(r),
            SectionReport::Kpis(r) => self.kpis(r),
            SectionReport::Funnel(r) => self.funnel(r),
            SectionReport::Scenarios(r) => self.scenarios(r),
            SectionReport::Assessment(r) => self.assessment(r),
            SectionReport::Tasks(r) => self.tasks(r),
        }
    }

    fn base_table(&self, header: &[&str]) -> Table {
        let mut table = Table::new();
        let preset = if self.styled {
            presets::UTF8_FULL
        } else {
            presets::ASCII_FULL
        };
        table
            .load_preset(preset)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(
                header
                    .iter()
                    .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
            );
        table
    }

    fn percent(&self, value: f64) -> String {
        self.formatter
            .tone(&format!("{:.1}%", value), Tone::for_progress(value))
    }

    fn percent_cell(&self, value: f64) -> Cell {
        let cell = Cell::new(format!("{:.1}%", value)).set_alignment(CellAlignment::Right);
        if !self.styled {
            return cell;
        }
        match Tone::for_progress(value) {
            Tone::Good => cell.fg(Color::Green),
            Tone::Warning => cell.fg(Color::Yellow),
            Tone::Critical => cell.fg(Color::Red),
        }
    }

    fn progress_table(&self, rows: &[KpiProgress]) -> Table {
        let mut table = self.base_table(&["KPI", "Start", "Current", "Target", "Progress"]);
        for row in rows {
            table.add_row(vec![
                Cell::new(&row.name),
                Cell::new(format_count(row.start)).set_alignment(CellAlignment::Right),
                Cell::new(format_count(row.current)).set_alignment(CellAlignment::Right),
                Cell::new(format_count(row.target)).set_alignment(CellAlignment::Right),
                self.percent_cell(row.progress),
            ]);
        }
        table
    }

    fn summary(&self, report: &SummaryReport) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "{}", self.formatter.header("Brand Health Score"))?;

        let mut table = self.base_table(&["Category", "Score", "Weight", "Contribution"]);
        for c in &report.score.categories {
            table.add_row(vec![
                Cell::new(&c.name),
                Cell::new(format!("{}/10", c.score)),
                Cell::new(format!("{:.2}", c.weight)),
                Cell::new(format!("{:.2}", c.contribution)),
            ]);
        }
        writeln!(out, "{table}")?;

        let tone = match report.score.composite {
            s if s < 4.0 => Tone::Critical,
            s if s < 8.0 => Tone::Warning,
            _ => Tone::Good,
        };
        writeln!(
            out,
            "Overall Score: {}  Status: {}",
            self.formatter
                .tone(&format!("{:.1}/10", report.score.composite), tone),
            report.score.status
        )?;
        if (report.score.weight_total - 1.0).abs() > 0.001 {
            writeln!(
                out,
                "{}",
                self.formatter.dim(&format!(
                    "Weights sum to {:.2}; score is not normalized",
                    report.score.weight_total
                ))
            )?;
        }

        writeln!(out, "\n{}", self.formatter.header("Headline Metrics"))?;
        write!(out, "{}", self.progress_table(&report.headline))?;
        Ok(out)
    }

    fn kpis(&self, report: &KpiReport) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            "{}",
            self.formatter.header("PRIMARY KPI: Spotify Monthly Listeners")
        )?;
        writeln!(
            out,
            "Starting point: {}  Target: {}  Current: {}  Progress: {}\n",
            format_count(report.primary.start),
            format_count(report.primary.target),
            format_count(report.primary.current),
            self.percent(report.primary.progress)
        )?;

        writeln!(out, "{}", self.formatter.header("KPI Dashboard"))?;
        writeln!(out, "{}", self.progress_table(&report.rows))?;

        writeln!(out, "\n{}", self.formatter.header("Platform Growth"))?;
        let mut table = self.base_table(&["Platform", "Followers", "Growth Rate"]);
        for p in &report.platforms {
            table.add_row(vec![
                Cell::new(&p.name),
                Cell::new(p.followers).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}/day", p.per_day)).set_alignment(CellAlignment::Right),
            ]);
        }
        write!(out, "{table}")?;
        Ok(out)
    }

    fn funnel(&self, report: &FunnelReport) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "{}", self.formatter.header("Conversion Funnel"))?;
        let mut table = self.base_table(&["Stage", "Count", "% of Initial"]);
        for row in &report.stages {
            table.add_row(vec![
                Cell::new(&row.label),
                Cell::new(row.count).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}%", row.pct_of_initial)).set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(out, "{table}")?;

        writeln!(out, "\n{}", self.formatter.header("Stage-to-Stage Conversion"))?;
        let mut table = self.base_table(&["From", "To", "Rate"]);
        for c in &report.conversions {
            table.add_row(vec![
                Cell::new(&c.from),
                Cell::new(&c.to),
                Cell::new(format!("{:.2}%", c.rate)).set_alignment(CellAlignment::Right),
            ]);
        }
        write!(out, "{table}")?;
        Ok(out)
    }

    fn scenarios(&self, report: &ScenarioReport) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(
            out,
            "{}",
            self.formatter.header("Budget Scenario Comparison")
        )?;
        writeln!(
            out,
            "{}",
            self.formatter.dim(&format!(
                "Royalty rate £{} per stream; ROI is a reporting figure and is expected to be negative",
                report.settings.royalty_rate
            ))
        )?;

        for outcome in &report.outcomes {
            writeln!(
                out,
                "\n{} (£{:.0}/month)",
                self.formatter.header(&outcome.name),
                outcome.budget.monthly_amount
            )?;
            if !outcome.budget.channel_splits.is_empty() {
                let splits: Vec<String> = outcome
                    .budget
                    .channel_splits
                    .iter()
                    .map(|(channel, amount)| format!("{channel} £{amount:.0}"))
                    .collect();
                writeln!(out, "{}", self.formatter.dim(&splits.join(", ")))?;
            }

            let mut table =
                self.base_table(&["Day", "Listeners", "Streams", "Invested", "Revenue", "ROI"]);
            for row in &outcome.rows {
                table.add_row(vec![
                    Cell::new(row.day).set_alignment(CellAlignment::Right),
                    Cell::new(format_count(row.listeners)).set_alignment(CellAlignment::Right),
                    Cell::new(format_count(row.streams)).set_alignment(CellAlignment::Right),
                    Cell::new(format!("£{:.2}", row.investment)).set_alignment(CellAlignment::Right),
                    Cell::new(format!("£{:.2}", row.revenue)).set_alignment(CellAlignment::Right),
                    Cell::new(row.roi.to_string()).set_alignment(CellAlignment::Right),
                ]);
            }
            writeln!(out, "{table}")?;
        }
        Ok(out)
    }

    fn assessment(&self, report: &Assessment) -> Result<String, fmt::Error> {
        let (lo, hi) = report.day_180_target;
        let tone = match report.band {
            SuccessBand::TargetExceeded | SuccessBand::StrongProgress => Tone::Good,
            SuccessBand::ModerateProgress => Tone::Warning,
            _ => Tone::Critical,
        };

        let mut out = String::new();
        writeln!(out, "{}", self.formatter.header("Success Assessment"))?;
        writeln!(
            out,
            "{} listeners: {} ({})",
            report.listeners,
            self.formatter.tone(&report.band.to_string(), tone),
            report.band.range_label()
        )?;
        writeln!(out, "Next steps: {}", report.next_steps)?;
        writeln!(out, "Strategy: {}", report.strategy.label())?;
        writeln!(out, "Day-180 target: {lo}-{hi} monthly listeners")?;
        Ok(out)
    }

    fn tasks(&self, report: &TaskReport) -> Result<String, fmt::Error> {
        let mut out = String::new();
        writeln!(out, "{}", self.formatter.header("Task Completion Tracker"))?;
        let mut table = self.base_table(&["Task", "Status"]);
        for task in &report.tasks {
            table.add_row(vec![Cell::new(&task.name), Cell::new(task.status.to_string())]);
        }
        writeln!(out, "{table}")?;
        writeln!(
            out,
            "Completed {}/{} ({}), {} in progress, {} planning",
            report.summary.completed,
            report.summary.total,
            self.percent(report.summary.completion),
            report.summary.in_progress,
            report.summary.planning
        )?;
        writeln!(
            out,
            "Critical issue remediation: {}",
            self.percent(report.remediation)
        )?;
        Ok(out)
    }
}

/// Counts print without decimals unless they carry a fraction
fn format_count(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

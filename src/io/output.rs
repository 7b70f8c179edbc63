//! Report writers for the three output formats.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::io::Write;

use crate::scoring::bands::{
    classify_ei_gauge, classify_ei_report, classify_ppi, classify_total_gauge,
    classify_total_report,
};
use crate::scoring::pipeline::ScoreBreakdown;
use crate::scoring::ScoreResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

/// Everything a writer needs to render one scoring run.
#[derive(Debug, Clone)]
pub struct ScoreReport {
    pub result: ScoreResult,
    pub breakdown: Option<ScoreBreakdown>,
    pub timestamp: DateTime<Utc>,
}

impl ScoreReport {
    pub fn new(result: ScoreResult, breakdown: Option<ScoreBreakdown>) -> Self {
        Self {
            result,
            breakdown,
            timestamp: Utc::now(),
        }
    }
}

pub trait ScoreWriter {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()>;
}

pub fn create_writer<W: Write + 'static>(format: OutputFormat, writer: W) -> Box<dyn ScoreWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BandJson {
    label: &'static str,
    css_class: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InterpretationsJson {
    ei: BandJson,
    ei_gauge: BandJson,
    ppi: BandJson,
    total: BandJson,
    total_gauge: BandJson,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportJson<'a> {
    generated: DateTime<Utc>,
    scores: &'a ScoreResult,
    interpretations: InterpretationsJson,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a ScoreBreakdown>,
}

fn interpretations(result: &ScoreResult) -> InterpretationsJson {
    let ei = classify_ei_report(result.ei_index);
    let ei_gauge = classify_ei_gauge(result.ei_index);
    let ppi = classify_ppi(result.practicality);
    let total = classify_total_report(result.total);
    let total_gauge = classify_total_gauge(result.total);
    InterpretationsJson {
        ei: BandJson {
            label: ei.label(),
            css_class: ei.css_class(),
        },
        ei_gauge: BandJson {
            label: ei_gauge.label(),
            css_class: ei_gauge.css_class(),
        },
        ppi: BandJson {
            label: ppi.label(),
            css_class: ppi.css_class(),
        },
        total: BandJson {
            label: total.label(),
            css_class: total.css_class(),
        },
        total_gauge: BandJson {
            label: total_gauge.gauge_label(),
            css_class: total_gauge.css_class(),
        },
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ScoreWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let json = ReportJson {
            generated: report.timestamp,
            scores: &report.result,
            interpretations: interpretations(&report.result),
            breakdown: report.breakdown.as_ref(),
        };
        let rendered = serde_json::to_string_pretty(&json)?;
        self.writer.write_all(rendered.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_score_row(&mut self, name: &str, value: f64, band: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {} | {:.1} | {} |", name, value, band)?;
        Ok(())
    }
}

impl<W: Write> ScoreWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let result = &report.result;
        writeln!(self.writer, "# Method Greenness & Practicality Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Component Scores")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Component | Score | Interpretation |")?;
        writeln!(self.writer, "|-----------|-------|----------------|")?;
        self.write_score_row("Sample preparation", result.sample_prep, "-")?;
        self.write_score_row("Instrumentation", result.instrumentation, "-")?;
        self.write_score_row("Reagents", result.reagent, "-")?;
        self.write_score_row("Waste", result.waste, "-")?;
        self.write_score_row(
            "Environmental Index (EI)",
            result.ei_index,
            classify_ei_report(result.ei_index).label(),
        )?;
        self.write_score_row(
            "Practicality (PPI)",
            result.practicality,
            classify_ppi(result.practicality).label(),
        )?;
        self.write_score_row(
            "Total",
            result.total,
            classify_total_report(result.total).label(),
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "## Verdict")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} ({:.1}/100)",
            classify_total_gauge(result.total).gauge_label(),
            result.total
        )?;

        if let Some(breakdown) = &report.breakdown {
            writeln!(self.writer)?;
            writeln!(self.writer, "## Sample Preparation Detail")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| Component | Value |")?;
            writeln!(self.writer, "|-----------|-------|")?;
            let sp = &breakdown.sample_prep;
            writeln!(self.writer, "| Pre-synthesis | {:.1} |", sp.pre_synthesis)?;
            writeln!(self.writer, "| Sampling procedure | {:.1} |", sp.sampling)?;
            writeln!(self.writer, "| Extraction | {:.1} |", sp.extraction)?;
            writeln!(
                self.writer,
                "| Other conditions | {:+.1} |",
                sp.other_conditions
            )?;
            let bonuses = breakdown.instrumentation_bonuses;
            if bonuses.total() > 0.0 {
                writeln!(self.writer)?;
                writeln!(
                    self.writer,
                    "Instrumentation bonuses applied to total: {:+.1}",
                    bonuses.total()
                )?;
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn colorize(band_class: &str, label: &str) -> ColoredString {
        match band_class {
            "dark-green" => label.green().bold(),
            "light-green" => label.green(),
            "yellow" => label.yellow(),
            _ => label.red(),
        }
    }
}

impl<W: Write> ScoreWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &ScoreReport) -> anyhow::Result<()> {
        let result = &report.result;
        writeln!(self.writer, "{}", "Component scores".bold())?;
        writeln!(self.writer, "  Sample preparation  {:>6.1}", result.sample_prep)?;
        writeln!(self.writer, "  Instrumentation     {:>6.1}", result.instrumentation)?;
        writeln!(self.writer, "  Reagents            {:>6.1}", result.reagent)?;
        writeln!(self.writer, "  Waste               {:>6.1}", result.waste)?;
        writeln!(self.writer)?;

        let ei = classify_ei_report(result.ei_index);
        let ppi = classify_ppi(result.practicality);
        let total = classify_total_report(result.total);

        writeln!(
            self.writer,
            "  {} {:>6.1}  {}",
            "EI".bold(),
            result.ei_index,
            Self::colorize(ei.css_class(), ei.label())
        )?;
        writeln!(
            self.writer,
            "  {} {:>5.1}  {}",
            "PPI".bold(),
            result.practicality,
            Self::colorize(ppi.css_class(), ppi.label())
        )?;
        writeln!(
            self.writer,
            "  {} {:>4.1}  {}",
            "Total".bold(),
            result.total,
            Self::colorize(total.css_class(), total.label())
        )?;

        if let Some(breakdown) = &report.breakdown {
            let sp = &breakdown.sample_prep;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", "Sample preparation detail".bold())?;
            writeln!(self.writer, "  Pre-synthesis       {:>6.1}", sp.pre_synthesis)?;
            writeln!(self.writer, "  Sampling            {:>6.1}", sp.sampling)?;
            writeln!(self.writer, "  Extraction          {:>6.1}", sp.extraction)?;
            writeln!(self.writer, "  Other conditions    {:>+6.1}", sp.other_conditions)?;
            if !breakdown.reagent_entries.is_empty() {
                let entries = breakdown
                    .reagent_entries
                    .iter()
                    .map(|v| format!("{v:.1}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                writeln!(self.writer, "  Reagent entries     [{entries}]")?;
            }
        }
        Ok(())
    }
}

use crate::core::AnalysisReport;
use clap::ValueEnum;
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

/// Build a writer for the requested format, targeting `output` or stdout.
pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let destination: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
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
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Testmap Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        if let Some(source) = &report.source {
            writeln!(self.writer, "Source: `{}`", source.display())?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "Methods found: {}", report.methods.len())?;
        writeln!(self.writer)?;

        for method in &report.methods {
            let sig = &method.signature;
            writeln!(
                self.writer,
                "## `{}({}) -> {}`",
                sig.name, sig.parameters, sig.return_type
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "Access: {}", sig.access)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "### Suggested tests")?;
            writeln!(self.writer)?;
            for suggestion in &method.suggestions {
                writeln!(self.writer, "- `{suggestion}`")?;
            }
            writeln!(self.writer)?;
            writeln!(self.writer, "### Assertions for the return value")?;
            writeln!(self.writer)?;
            writeln!(self.writer, "```swift")?;
            for assertion in &method.assertions {
                writeln!(self.writer, "{assertion}")?;
            }
            writeln!(self.writer, "```")?;
            writeln!(self.writer)?;
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
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Testmap Analysis Report".bold().blue())?;
        writeln!(self.writer, "{}", "=======================".blue())?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Methods found: {}",
            report.methods.len().to_string().bold()
        )?;
        writeln!(self.writer)?;

        for method in &report.methods {
            let sig = &method.signature;
            writeln!(
                self.writer,
                "{} {}({}) -> {}",
                format!("[{}]", sig.access).dimmed(),
                sig.name.bold().green(),
                sig.parameters,
                sig.return_type.cyan()
            )?;
            writeln!(self.writer, "  Suggested tests:")?;
            for suggestion in &method.suggestions {
                writeln!(self.writer, "    - {}", suggestion.yellow())?;
            }
            writeln!(self.writer, "  Assertions for the return value:")?;
            for assertion in &method.assertions {
                writeln!(self.writer, "    {assertion}")?;
            }
            writeln!(self.writer)?;
        }

        Ok(())
    }
}

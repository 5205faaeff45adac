//! End-to-end analysis: read text, extract, suggest, assert, report.

use crate::assertions::generate_assertions_with;
use crate::config::TestmapConfig;
use crate::core::errors::Error;
use crate::core::{AnalysisReport, MethodReport};
use crate::extraction::extract_signatures;
use crate::io::output::{create_writer, OutputFormat};
use crate::suggestion::signals::TypeVocabulary;
use crate::suggestion::suggest_test_cases_with;
use anyhow::Result;
use chrono::Utc;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub variable: String,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let vocab = TestmapConfig::load(config.config.as_deref())?.vocabulary();
    let (source_text, source_path) = read_source(&config.path)?;

    let report = build_report(&source_text, source_path, &config.variable, &vocab);
    log::info!("extracted {} signatures", report.methods.len());

    let mut writer = create_writer(config.format, config.output.as_deref())?;
    writer.write_report(&report)
}

/// Pure assembly of the report from declaration text.
pub fn build_report(
    source_text: &str,
    source: Option<PathBuf>,
    variable: &str,
    vocab: &TypeVocabulary,
) -> AnalysisReport {
    let methods = extract_signatures(source_text)
        .into_iter()
        .map(|signature| MethodReport {
            suggestions: suggest_test_cases_with(&signature, vocab),
            assertions: generate_assertions_with(&signature.return_type, variable, vocab),
            signature,
        })
        .collect();

    AnalysisReport {
        source,
        timestamp: Utc::now(),
        methods,
    }
}

fn read_source(path: &Path) -> Result<(String, Option<PathBuf>)> {
    if path.as_os_str() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok((buffer, None))
    } else {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::read_input(path, e))?;
        Ok((text, Some(path.to_path_buf())))
    }
}

//! Coverage command: print the test-count estimate for a method count.

use crate::core::CoverageEstimate;
use crate::coverage::estimate_coverage;
use crate::io::output::OutputFormat;
use anyhow::Result;
use colored::*;

pub fn handle_coverage(method_count: usize, format: OutputFormat) -> Result<()> {
    let estimate = estimate_coverage(method_count);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&estimate)?),
        OutputFormat::Markdown => print!("{}", format_markdown(&estimate)),
        OutputFormat::Terminal => print!("{}", format_terminal(&estimate)),
    }

    Ok(())
}

fn format_markdown(estimate: &CoverageEstimate) -> String {
    let mut out = String::new();
    out.push_str("# Coverage Estimate\n\n");
    out.push_str("| Metric | Value |\n");
    out.push_str("|--------|-------|\n");
    out.push_str(&format!("| Methods | {} |\n", estimate.method_count));
    out.push_str(&format!("| Minimum tests | {} |\n", estimate.minimum_tests));
    out.push_str(&format!(
        "| Recommended tests | {} |\n",
        estimate.recommended_tests
    ));
    out.push_str(&format!(
        "| Comprehensive tests | {} |\n",
        estimate.comprehensive_tests
    ));
    out.push_str(&format!(
        "| Coverage target | {}% |\n",
        estimate.coverage_target
    ));
    out
}

fn format_terminal(estimate: &CoverageEstimate) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Coverage Estimate".bold().blue()));
    out.push_str(&format!("  Methods:             {}\n", estimate.method_count));
    out.push_str(&format!("  Minimum tests:       {}\n", estimate.minimum_tests));
    out.push_str(&format!(
        "  Recommended tests:   {}\n",
        estimate.recommended_tests
    ));
    out.push_str(&format!(
        "  Comprehensive tests: {}\n",
        estimate.comprehensive_tests
    ));
    out.push_str(&format!(
        "  Coverage target:     {}%\n",
        estimate.coverage_target
    ));
    out
}

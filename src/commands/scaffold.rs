//! Scaffold command: render the class skeleton or a canned fixture.

use crate::cli::FixtureKind;
use crate::core::errors::Error;
use crate::scaffold;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;

pub struct ScaffoldConfig {
    pub name: Option<String>,
    pub target: Option<String>,
    pub imports: Vec<String>,
    pub fixture: Option<FixtureKind>,
    pub output: Option<PathBuf>,
}

pub fn handle_scaffold(config: ScaffoldConfig) -> Result<()> {
    let rendered = render(&config)?;

    match &config.output {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            std::io::stdout().write_all(rendered.as_bytes())?;
        }
    }

    Ok(())
}

fn render(config: &ScaffoldConfig) -> Result<String> {
    if let Some(fixture) = config.fixture {
        let text = match fixture {
            FixtureKind::AnalysisResult => scaffold::mock_analysis_result(),
            FixtureKind::TestImage => scaffold::mock_test_image(),
            FixtureKind::VisionRequest => scaffold::mock_vision_request(),
        };
        return Ok(text.to_string());
    }

    // clap enforces these when no fixture was requested
    let name = config
        .name
        .as_deref()
        .ok_or_else(|| Error::configuration("missing --name for test class"))?;
    let target = config
        .target
        .as_deref()
        .ok_or_else(|| Error::configuration("missing --target class"))?;

    Ok(scaffold::render_test_class(name, target, &config.imports))
}

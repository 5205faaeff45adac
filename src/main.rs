use anyhow::Result;
use clap::Parser;
use testmap::cli::{Cli, Commands};
use testmap::commands::analyze::{handle_analyze, AnalyzeConfig};
use testmap::commands::coverage::handle_coverage;
use testmap::commands::scaffold::{handle_scaffold, ScaffoldConfig};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config,
            variable,
        } => handle_analyze(AnalyzeConfig {
            path,
            format,
            output,
            config,
            variable,
        }),
        Commands::Scaffold {
            name,
            target,
            imports,
            fixture,
            output,
        } => handle_scaffold(ScaffoldConfig {
            name,
            target,
            imports,
            fixture,
            output,
        }),
        Commands::Coverage {
            method_count,
            format,
        } => handle_coverage(method_count, format),
    }
}

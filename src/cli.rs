use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FixtureKind {
    /// Mock structured analysis result
    AnalysisResult,
    /// Synthetic test-image helper
    TestImage,
    /// Mock Vision-framework request helper
    VisionRequest,
}

#[derive(Parser, Debug)]
#[command(name = "testmap")]
#[command(about = "Test suggestion and scaffolding generator for method signatures", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract signatures and suggest test cases
    Analyze {
        /// Source file to scan, or "-" for stdin
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file with vocabulary extensions
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Name of the variable assertions are generated against
        #[arg(long, default_value = "result")]
        variable: String,
    },

    /// Render a test-class skeleton or a canned fixture
    Scaffold {
        /// Name of the generated test class
        #[arg(long, required_unless_present = "fixture")]
        name: Option<String>,

        /// Name of the class under test
        #[arg(long, required_unless_present = "fixture")]
        target: Option<String>,

        /// Extra import line, repeatable (e.g. --import "@testable import App")
        #[arg(long = "import")]
        imports: Vec<String>,

        /// Emit a canned fixture instead of the class skeleton
        #[arg(long, value_enum)]
        fixture: Option<FixtureKind>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Estimate how many tests a class needs
    Coverage {
        /// Number of methods in the class under test
        method_count: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}

// Export modules for library usage
pub mod assertions;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod coverage;
pub mod extraction;
pub mod io;
pub mod scaffold;
pub mod suggestion;

// Re-export commonly used types
pub use crate::core::{
    AccessLevel, AnalysisReport, CoverageEstimate, MethodReport, SignatureRecord, TypeSignals,
};

pub use crate::extraction::{
    extract_signatures,
    matcher::{match_declarations, RawDeclaration},
    normalizer::normalize,
};

pub use crate::suggestion::{
    generate_test_name,
    signals::TypeVocabulary,
    suggest_test_cases, suggest_test_cases_with,
};

pub use crate::assertions::{generate_assertions, generate_assertions_with};

pub use crate::coverage::{estimate_coverage, COVERAGE_TARGET_PERCENT};

pub use crate::scaffold::{
    mock_analysis_result, mock_test_image, mock_vision_request, render_test_class,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

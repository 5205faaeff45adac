pub mod errors;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A method/function signature extracted from declaration text.
///
/// `parameters` is the raw parameter-list text between the parentheses; it is
/// never split into individual parameters, only scanned for keyword signals.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignatureRecord {
    pub name: String,
    pub parameters: String,
    pub return_type: String,
    pub access: AccessLevel,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Public,
    Private,
    #[default]
    Internal,
    FilePrivate,
}

impl AccessLevel {
    /// Map a source-level modifier keyword to an access level.
    /// Unrecognized keywords fall back to the implicit default.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "public" => AccessLevel::Public,
            "private" => AccessLevel::Private,
            "fileprivate" => AccessLevel::FilePrivate,
            _ => AccessLevel::Internal,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Private => "private",
            AccessLevel::Internal => "internal",
            AccessLevel::FilePrivate => "fileprivate",
        }
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Boolean type-shape signals derived from a single text field.
///
/// Ephemeral: recomputed per call, never stored on a record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeSignals {
    pub is_optional: bool,
    pub is_collection: bool,
    pub is_numeric: bool,
    pub is_boolean: bool,
    pub is_textual: bool,
    pub is_failable: bool,
    pub is_asynchronous: bool,
}

/// Recommended test counts for a class with `method_count` methods.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoverageEstimate {
    pub method_count: usize,
    pub minimum_tests: usize,
    pub recommended_tests: usize,
    pub comprehensive_tests: usize,
    pub coverage_target: u32,
}

/// Root of an analysis run, one entry per extracted signature.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: Option<PathBuf>,
    pub timestamp: DateTime<Utc>,
    pub methods: Vec<MethodReport>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MethodReport {
    pub signature: SignatureRecord,
    pub suggestions: Vec<String>,
    pub assertions: Vec<String>,
}

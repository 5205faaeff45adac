//! Declaration tokenizer/matcher.
//!
//! A single ordered pattern scans the whole input (not line by line) and
//! yields raw capture groups in source order. The matcher has no notion of
//! comments or string literals, so a declaration quoted inside either will
//! still match; that false-positive tolerance is part of the contract and is
//! not to be fixed by growing this into a lexer.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches: [modifier] func name(params) [-> ReturnType]
static DECLARATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(public|private|internal|fileprivate)?\s*func\s+(\w+)\s*\((.*?)\)\s*(?:->\s*([^{]+))?").unwrap()
});

/// One raw pattern match, prior to normalization.
///
/// `modifier` and `return_clause` are `None` when the source text had no
/// corresponding clause; `parameters` may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawDeclaration {
    pub modifier: Option<String>,
    pub name: String,
    pub parameters: String,
    pub return_clause: Option<String>,
}

/// Scan declaration text lazily, yielding matches in left-to-right order.
///
/// No deduplication and no reordering happen here.
pub fn match_declarations(text: &str) -> impl Iterator<Item = RawDeclaration> + '_ {
    DECLARATION_RE.captures_iter(text).map(|caps| RawDeclaration {
        modifier: caps.get(1).map(|m| m.as_str().to_string()),
        name: caps
            .get(2)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        parameters: caps
            .get(3)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        return_clause: caps.get(4).map(|m| m.as_str().to_string()),
    })
}

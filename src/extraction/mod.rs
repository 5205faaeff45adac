//! Signature extraction: pattern matching plus normalization.

pub mod matcher;
pub mod normalizer;

use crate::core::SignatureRecord;

/// Extract all signature records from a block of declaration text.
///
/// Unmatched or filtered fragments are skipped silently; text with no
/// recognizable declarations yields an empty vec, not an error.
pub fn extract_signatures(source: &str) -> Vec<SignatureRecord> {
    matcher::match_declarations(source)
        .filter_map(|raw| normalizer::normalize(&raw))
        .collect()
}

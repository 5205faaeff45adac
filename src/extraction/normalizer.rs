//! Signature normalizer: raw matches in, canonical records (or nothing) out.

use super::matcher::RawDeclaration;
use crate::core::{AccessLevel, SignatureRecord};
use crate::suggestion::signals::{TEST_METHOD_PREFIX, VOID_RETURN};

/// Map a raw match to a canonical record.
///
/// Returns `None` for matches that must not produce a record: an empty name,
/// or a name that already carries the test prefix (the engine must not
/// suggest tests for tests). Missing clauses get canonical defaults: no
/// modifier reads as internal access, no return clause reads as `Void`.
pub fn normalize(raw: &RawDeclaration) -> Option<SignatureRecord> {
    if raw.name.is_empty() || raw.name.starts_with(TEST_METHOD_PREFIX) {
        return None;
    }

    let return_type = raw
        .return_clause
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or(VOID_RETURN)
        .to_string();

    let access = raw
        .modifier
        .as_deref()
        .map(AccessLevel::from_keyword)
        .unwrap_or_default();

    Some(SignatureRecord {
        name: raw.name.clone(),
        parameters: raw.parameters.trim().to_string(),
        return_type,
        access,
    })
}

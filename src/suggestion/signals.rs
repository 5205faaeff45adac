//! Keyword/marker vocabularies and per-field signal scanning.
//!
//! Every marker the decision tables react to lives here as a named constant,
//! and `TypeVocabulary` carries the effective sets so callers can extend the
//! keyword vocabulary without patching the engines.

use crate::core::TypeSignals;

/// Numeric type names that trigger boundary-value scenarios.
pub const NUMERIC_TYPE_KEYWORDS: &[&str] = &["Int", "Double", "Float", "CGFloat"];

/// Collection type names; `[` is recognized separately via [`COLLECTION_OPEN`].
pub const COLLECTION_TYPE_KEYWORDS: &[&str] = &["Array", "Set"];

/// Shorthand collection syntax opener (`[Element]`).
pub const COLLECTION_OPEN: &str = "[";

/// Optional shorthand marker (`Type?`).
pub const OPTIONAL_MARKER: &str = "?";

/// Spelled-out optional type name (`Optional<Type>`).
pub const OPTIONAL_KEYWORD: &str = "Optional";

pub const BOOLEAN_TYPE_KEYWORD: &str = "Bool";

pub const TEXT_TYPE_KEYWORD: &str = "String";

/// Markers in a return clause indicating the call can fail.
pub const FAILABLE_KEYWORDS: &[&str] = &["throws", "Result"];

/// Marker in a return clause indicating an asynchronous call.
pub const ASYNC_KEYWORD: &str = "async";

/// Parameter-text hint (matched case-insensitively) for callback-style async.
pub const COMPLETION_HANDLER_HINT: &str = "completion";

/// Declarations whose name starts with this prefix are already tests.
pub const TEST_METHOD_PREFIX: &str = "test";

/// Canonical return type for declarations without a return clause.
pub const VOID_RETURN: &str = "Void";

/// The effective keyword sets used by signal scanning.
///
/// `Default` reproduces the built-in constants; config can append to the
/// extensible sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeVocabulary {
    pub numeric_keywords: Vec<String>,
    pub collection_keywords: Vec<String>,
    pub failable_keywords: Vec<String>,
    pub boolean_keyword: String,
    pub text_keyword: String,
}

impl Default for TypeVocabulary {
    fn default() -> Self {
        Self {
            numeric_keywords: to_owned(NUMERIC_TYPE_KEYWORDS),
            collection_keywords: to_owned(COLLECTION_TYPE_KEYWORDS),
            failable_keywords: to_owned(FAILABLE_KEYWORDS),
            boolean_keyword: BOOLEAN_TYPE_KEYWORD.to_string(),
            text_keyword: TEXT_TYPE_KEYWORD.to_string(),
        }
    }
}

fn to_owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|k| k.to_string()).collect()
}

impl TypeVocabulary {
    pub fn extend_numeric<I: IntoIterator<Item = String>>(&mut self, extra: I) {
        self.numeric_keywords.extend(extra);
    }

    pub fn extend_collections<I: IntoIterator<Item = String>>(&mut self, extra: I) {
        self.collection_keywords.extend(extra);
    }

    pub fn extend_failable<I: IntoIterator<Item = String>>(&mut self, extra: I) {
        self.failable_keywords.extend(extra);
    }

    pub fn has_numeric_keyword(&self, text: &str) -> bool {
        self.numeric_keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// Numeric keyword check with bracketed segments removed, so a collection
    /// element type (`[Double]`) does not count as a numeric parameter.
    pub fn has_numeric_keyword_outside_brackets(&self, text: &str) -> bool {
        self.has_numeric_keyword(&strip_bracketed(text))
    }

    pub fn has_collection_marker(&self, text: &str) -> bool {
        text.contains(COLLECTION_OPEN)
            || self
                .collection_keywords
                .iter()
                .any(|k| text.contains(k.as_str()))
    }

    pub fn has_failable_marker(&self, text: &str) -> bool {
        self.failable_keywords.iter().any(|k| text.contains(k.as_str()))
    }

    pub fn has_boolean_keyword(&self, text: &str) -> bool {
        text.contains(self.boolean_keyword.as_str())
    }

    pub fn has_text_keyword(&self, text: &str) -> bool {
        text.contains(self.text_keyword.as_str())
    }

    /// Compute the full signal set for one text field (a parameter list or a
    /// return clause).
    pub fn signals(&self, text: &str) -> TypeSignals {
        TypeSignals {
            is_optional: has_optional_marker(text),
            is_collection: self.has_collection_marker(text),
            is_numeric: self.has_numeric_keyword(text),
            is_boolean: self.has_boolean_keyword(text),
            is_textual: self.has_text_keyword(text),
            is_failable: self.has_failable_marker(text),
            is_asynchronous: has_async_marker(text),
        }
    }
}

pub fn has_optional_marker(text: &str) -> bool {
    text.contains(OPTIONAL_MARKER) || text.contains(OPTIONAL_KEYWORD)
}

pub fn has_async_marker(text: &str) -> bool {
    text.contains(ASYNC_KEYWORD)
}

pub fn has_completion_handler_hint(text: &str) -> bool {
    text.to_lowercase().contains(COMPLETION_HANDLER_HINT)
}

/// Remove `[...]` segments (nesting-aware) so element types inside collection
/// shorthand are invisible to keyword scans.
pub fn strip_bracketed(text: &str) -> String {
    let mut depth = 0usize;
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

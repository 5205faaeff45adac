//! Assertion synthesizer: XCTest assertion snippets for a type's shape.
//!
//! Categories are checked independently and accumulate, so an optional
//! numeric type gets both the nil check and the numeric assertions.

use crate::suggestion::signals::{self, TypeVocabulary};

/// Synthesize assertions for `type_text` on `variable` with the default
/// vocabulary.
pub fn generate_assertions(type_text: &str, variable: &str) -> Vec<String> {
    generate_assertions_with(type_text, variable, &TypeVocabulary::default())
}

pub fn generate_assertions_with(
    type_text: &str,
    variable: &str,
    vocab: &TypeVocabulary,
) -> Vec<String> {
    let mut assertions = Vec::new();

    if signals::has_optional_marker(type_text) {
        assertions.push(format!("XCTAssertNotNil({variable})"));
    } else {
        // Non-optional types are structurally non-nil; leave a note instead
        // of forcing an assertion.
        assertions.push(format!("// {variable} is non-optional"));
    }

    if vocab.has_numeric_keyword(type_text) {
        assertions.push(format!("XCTAssertGreaterThan({variable}, 0)"));
        assertions.push(format!(
            "XCTAssertEqual({variable}, expectedValue, accuracy: 0.01)"
        ));
    }

    if vocab.has_boolean_keyword(type_text) {
        assertions.push(format!("XCTAssertTrue({variable})"));
        assertions.push(format!("XCTAssertFalse({variable})"));
    }

    if vocab.has_collection_marker(type_text) {
        assertions.push(format!("XCTAssertFalse({variable}.isEmpty)"));
        assertions.push(format!("XCTAssertEqual({variable}.count, expectedCount)"));
    }

    if vocab.has_text_keyword(type_text) {
        assertions.push(format!("XCTAssertEqual({variable}, \"expected\")"));
        assertions.push(format!("XCTAssertTrue({variable}.contains(\"expected\"))"));
    }

    assertions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_yields_exactly_placeholder_and_numeric_assertions() {
        let assertions = generate_assertions("Int", "count");
        assert_eq!(
            assertions,
            vec![
                "// count is non-optional",
                "XCTAssertGreaterThan(count, 0)",
                "XCTAssertEqual(count, expectedValue, accuracy: 0.01)",
            ]
        );
    }

    #[test]
    fn test_optional_type_gets_nil_check() {
        let assertions = generate_assertions("String?", "name");
        assert_eq!(assertions[0], "XCTAssertNotNil(name)");
    }

    #[test]
    fn test_boolean_gets_both_branches() {
        let assertions = generate_assertions("Bool", "flag");
        assert!(assertions.contains(&"XCTAssertTrue(flag)".to_string()));
        assert!(assertions.contains(&"XCTAssertFalse(flag)".to_string()));
    }

    #[test]
    fn test_collection_assertions() {
        let assertions = generate_assertions("[Particle]", "particles");
        assert!(assertions.contains(&"XCTAssertFalse(particles.isEmpty)".to_string()));
        assert!(assertions.contains(&"XCTAssertEqual(particles.count, expectedCount)".to_string()));
    }

    #[test]
    fn test_categories_accumulate() {
        // Optional numeric collection: nil check, numeric and collection
        // assertions all appear.
        let assertions = generate_assertions("[Double]?", "sizes");
        assert_eq!(assertions[0], "XCTAssertNotNil(sizes)");
        assert!(assertions.iter().any(|a| a.contains("GreaterThan")));
        assert!(assertions.iter().any(|a| a.contains("isEmpty")));
    }

    #[test]
    fn test_string_assertions() {
        let assertions = generate_assertions("String", "label");
        assert!(assertions.contains(&"XCTAssertEqual(label, \"expected\")".to_string()));
        assert!(assertions.contains(&"XCTAssertTrue(label.contains(\"expected\"))".to_string()));
    }
}

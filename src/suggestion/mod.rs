//! Test-case suggestion engine.
//!
//! A fixed, ordered decision table maps the shape of a signature to
//! recommended test scenarios. Each rule is an independent predicate over the
//! record plus the condition/expectation segments of the generated test name;
//! rules accumulate, and table order defines suggestion order.

pub mod signals;

use crate::core::SignatureRecord;
use signals::TypeVocabulary;
use std::collections::HashSet;

/// One row of the suggestion decision table.
struct SuggestionRule {
    condition: &'static str,
    expected: &'static str,
    applies: fn(&SignatureRecord, &TypeVocabulary) -> bool,
}

fn always(_: &SignatureRecord, _: &TypeVocabulary) -> bool {
    true
}

fn optional_parameter(record: &SignatureRecord, _: &TypeVocabulary) -> bool {
    signals::has_optional_marker(&record.parameters)
}

fn collection_parameter(record: &SignatureRecord, vocab: &TypeVocabulary) -> bool {
    vocab.has_collection_marker(&record.parameters)
}

// Bracketed element types are excluded so `[Double]` reads as a collection,
// not a numeric boundary case.
fn numeric_parameter(record: &SignatureRecord, vocab: &TypeVocabulary) -> bool {
    vocab.has_numeric_keyword_outside_brackets(&record.parameters)
}

fn failable_return(record: &SignatureRecord, vocab: &TypeVocabulary) -> bool {
    vocab.has_failable_marker(&record.return_type)
}

fn asynchronous(record: &SignatureRecord, _: &TypeVocabulary) -> bool {
    signals::has_async_marker(&record.return_type)
        || signals::has_completion_handler_hint(&record.parameters)
}

static SUGGESTION_RULES: &[SuggestionRule] = &[
    SuggestionRule {
        condition: "withValidInput",
        expected: "returnsExpectedResult",
        applies: always,
    },
    SuggestionRule {
        condition: "withNilInput",
        expected: "handlesGracefully",
        applies: optional_parameter,
    },
    SuggestionRule {
        condition: "withEmptyArray",
        expected: "returnsExpectedDefault",
        applies: collection_parameter,
    },
    SuggestionRule {
        condition: "withZeroValue",
        expected: "handlesCorrectly",
        applies: numeric_parameter,
    },
    SuggestionRule {
        condition: "withNegativeValue",
        expected: "handlesCorrectly",
        applies: numeric_parameter,
    },
    SuggestionRule {
        condition: "withInvalidInput",
        expected: "throwsError",
        applies: failable_return,
    },
    SuggestionRule {
        condition: "whenCalled",
        expected: "completesSuccessfully",
        applies: asynchronous,
    },
];

/// Generate a test method name following the
/// `test_<Method>_<condition>_<expected>` convention.
///
/// Only the first character of the method name is capitalized; an empty
/// method name yields an empty middle segment.
pub fn generate_test_name(method_name: &str, condition: &str, expected: &str) -> String {
    let formatted = capitalize_first(method_name);
    format!("test_{formatted}_{condition}_{expected}")
}

fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Suggest test scenarios for a record using the default vocabulary.
pub fn suggest_test_cases(record: &SignatureRecord) -> Vec<String> {
    suggest_test_cases_with(record, &TypeVocabulary::default())
}

/// Suggest test scenarios for a record, in table order, without duplicates.
pub fn suggest_test_cases_with(record: &SignatureRecord, vocab: &TypeVocabulary) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    for rule in SUGGESTION_RULES {
        if (rule.applies)(record, vocab) {
            let name = generate_test_name(&record.name, rule.condition, rule.expected);
            if seen.insert(name.clone()) {
                suggestions.push(name);
            }
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AccessLevel;

    fn record(name: &str, parameters: &str, return_type: &str) -> SignatureRecord {
        SignatureRecord {
            name: name.to_string(),
            parameters: parameters.to_string(),
            return_type: return_type.to_string(),
            access: AccessLevel::Internal,
        }
    }

    #[test]
    fn test_generate_test_name_capitalizes_first_letter() {
        assert_eq!(
            generate_test_name("analyzeImage", "withNilImage", "returnsNil"),
            "test_AnalyzeImage_withNilImage_returnsNil"
        );
    }

    #[test]
    fn test_generate_test_name_empty_method() {
        assert_eq!(generate_test_name("", "cond", "exp"), "test__cond_exp");
    }

    #[test]
    fn test_generate_test_name_is_deterministic() {
        let a = generate_test_name("process", "withValidInput", "returnsExpectedResult");
        let b = generate_test_name("process", "withValidInput", "returnsExpectedResult");
        assert_eq!(a, b);
    }

    #[test]
    fn test_baseline_scenario_always_first() {
        let r = record("save", "", "Void");
        let suggestions = suggest_test_cases(&r);
        assert_eq!(
            suggestions[0],
            "test_Save_withValidInput_returnsExpectedResult"
        );
        assert_eq!(suggestions.len(), 1);
    }

    #[test]
    fn test_optional_parameter_adds_nil_scenario() {
        let r = record("analyze", "image: UIImage?", "Void");
        let suggestions = suggest_test_cases(&r);
        assert!(suggestions.contains(&"test_Analyze_withNilInput_handlesGracefully".to_string()));
    }

    #[test]
    fn test_numeric_scenarios_come_in_pairs() {
        let r = record("scale", "factor: Double", "Double");
        let suggestions = suggest_test_cases(&r);
        let zero = suggestions
            .iter()
            .any(|s| s.contains("withZeroValue"));
        let negative = suggestions
            .iter()
            .any(|s| s.contains("withNegativeValue"));
        assert_eq!(zero, negative);
        assert!(zero);
    }

    #[test]
    fn test_failable_return_adds_error_scenario() {
        let r = record("load", "path: String", "throws -> Data");
        let suggestions = suggest_test_cases(&r);
        assert!(suggestions.contains(&"test_Load_withInvalidInput_throwsError".to_string()));
    }

    #[test]
    fn test_completion_handler_adds_async_scenario() {
        let r = record("fetch", "completion: @escaping () -> Void", "Void");
        let suggestions = suggest_test_cases(&r);
        assert!(suggestions.contains(&"test_Fetch_whenCalled_completesSuccessfully".to_string()));
    }

    #[test]
    fn test_rule_order_is_stable() {
        let r = record("mix", "count: Int, items: [String]?", "async throws -> Result<Int, Error>");
        let suggestions = suggest_test_cases(&r);
        let expected = vec![
            "test_Mix_withValidInput_returnsExpectedResult",
            "test_Mix_withNilInput_handlesGracefully",
            "test_Mix_withEmptyArray_returnsExpectedDefault",
            "test_Mix_withZeroValue_handlesCorrectly",
            "test_Mix_withNegativeValue_handlesCorrectly",
            "test_Mix_withInvalidInput_throwsError",
            "test_Mix_whenCalled_completesSuccessfully",
        ];
        assert_eq!(suggestions, expected);
    }

    #[test]
    fn test_extended_vocabulary_changes_output() {
        let mut vocab = TypeVocabulary::default();
        let r = record("convert", "amount: Decimal", "Decimal");
        assert!(!suggest_test_cases_with(&r, &vocab)
            .iter()
            .any(|s| s.contains("withZeroValue")));

        vocab.extend_numeric(["Decimal".to_string()]);
        assert!(suggest_test_cases_with(&r, &vocab)
            .iter()
            .any(|s| s.contains("withZeroValue")));
    }
}

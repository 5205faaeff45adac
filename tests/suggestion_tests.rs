use indoc::indoc;
use pretty_assertions::assert_eq;
use testmap::commands::analyze::build_report;
use testmap::*;

fn record(name: &str, parameters: &str, return_type: &str) -> SignatureRecord {
    SignatureRecord {
        name: name.to_string(),
        parameters: parameters.to_string(),
        return_type: return_type.to_string(),
        access: AccessLevel::Internal,
    }
}

#[test]
fn test_generate_test_name_shape() {
    assert_eq!(
        generate_test_name("analyzeImage", "withNilImage", "returnsNil"),
        "test_AnalyzeImage_withNilImage_returnsNil"
    );
    assert_eq!(
        generate_test_name("", "withNilImage", "returnsNil"),
        "test__withNilImage_returnsNil"
    );
}

#[test]
fn test_baseline_scenario_is_always_present_and_first() {
    for (params, ret) in [
        ("", "Void"),
        ("image: UIImage?", "AnalysisResult?"),
        ("count: Int", "throws -> Data"),
    ] {
        let suggestions = suggest_test_cases(&record("process", params, ret));
        assert!(!suggestions.is_empty());
        assert_eq!(
            suggestions[0],
            "test_Process_withValidInput_returnsExpectedResult"
        );
    }
}

#[test]
fn test_optional_scenario_tracks_optional_marker() {
    let with = suggest_test_cases(&record("draw", "image: UIImage?", "Void"));
    assert!(with.iter().any(|s| s.contains("withNilInput")));

    let without = suggest_test_cases(&record("draw", "image: UIImage", "Void"));
    assert!(!without.iter().any(|s| s.contains("withNilInput")));

    let spelled = suggest_test_cases(&record("draw", "image: Optional<UIImage>", "Void"));
    assert!(spelled.iter().any(|s| s.contains("withNilInput")));
}

#[test]
fn test_numeric_scenarios_never_appear_alone() {
    let cases = [
        ("count: Int", true),
        ("mean: Double, label: String", true),
        ("scale: CGFloat", true),
        ("values: [Double]", false),
        ("label: String", false),
    ];

    for (params, expected) in cases {
        let suggestions = suggest_test_cases(&record("measure", params, "Void"));
        let zero = suggestions.iter().any(|s| s.contains("withZeroValue"));
        let negative = suggestions.iter().any(|s| s.contains("withNegativeValue"));
        assert_eq!(zero, expected, "zero scenario for {params:?}");
        assert_eq!(zero, negative, "paired scenarios for {params:?}");
    }
}

#[test]
fn test_failable_and_async_scenarios_come_from_return_type() {
    let failable = suggest_test_cases(&record("load", "", "Result<Data, Error>"));
    assert!(failable.iter().any(|s| s.contains("throwsError")));

    let asynchronous = suggest_test_cases(&record("fetch", "", "async -> Data"));
    assert!(asynchronous
        .iter()
        .any(|s| s.contains("completesSuccessfully")));

    let plain = suggest_test_cases(&record("get", "", "Data"));
    assert!(!plain.iter().any(|s| s.contains("throwsError")));
    assert!(!plain.iter().any(|s| s.contains("completesSuccessfully")));
}

#[test]
fn test_completion_parameter_counts_as_async() {
    let suggestions = suggest_test_cases(&record(
        "download",
        "url: URL, Completion: @escaping (Data) -> Void",
        "Void",
    ));
    assert!(suggestions
        .iter()
        .any(|s| s.contains("completesSuccessfully")));
}

#[test]
fn test_suggestions_are_deterministic() {
    let r = record("mix", "count: Int, items: [String]?", "async -> Result<Int, Error>");
    assert_eq!(suggest_test_cases(&r), suggest_test_cases(&r));
}

#[test]
fn test_report_pipeline_over_class_source() {
    let source = indoc! {r#"
        class Analyzer {
            public func analyze(_ image: UIImage?) -> AnalysisResult? {
            }

            func count(items: [Item]) -> Int {
            }
        }
    "#};

    let report = build_report(source, None, "result", &TypeVocabulary::default());
    assert_eq!(report.methods.len(), 2);

    let analyze = &report.methods[0];
    assert_eq!(analyze.signature.access, AccessLevel::Public);
    assert!(analyze
        .suggestions
        .contains(&"test_Analyze_withNilInput_handlesGracefully".to_string()));
    // Return type is optional, so the first assertion is the nil check
    assert_eq!(analyze.assertions[0], "XCTAssertNotNil(result)");

    let count = &report.methods[1];
    assert_eq!(count.signature.return_type, "Int");
    assert_eq!(count.assertions[0], "// result is non-optional");
    assert!(count
        .assertions
        .contains(&"XCTAssertGreaterThan(result, 0)".to_string()));
}

#[test]
fn test_vocabulary_extension_flows_through_suggestions() {
    let mut vocab = TypeVocabulary::default();
    vocab.extend_numeric(["Decimal".to_string()]);

    let r = record("convert", "amount: Decimal", "Decimal");
    let suggestions = suggest_test_cases_with(&r, &vocab);
    assert!(suggestions.iter().any(|s| s.contains("withZeroValue")));
    assert!(suggestions.iter().any(|s| s.contains("withNegativeValue")));
}

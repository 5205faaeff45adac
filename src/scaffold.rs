//! Scaffold template renderer: static test-suite and fixture text.
//!
//! Pure string substitution. The only branch is the optional extra-imports
//! block; callers route any `@testable import` line through `imports`.

/// Render a complete XCTest class skeleton.
pub fn render_test_class(class_name: &str, target_class: &str, imports: &[String]) -> String {
    let import_block = if imports.is_empty() {
        String::new()
    } else {
        format!("{}\n", imports.join("\n"))
    };

    format!(
        r#"import XCTest
{import_block}
final class {class_name}: XCTestCase {{
    var sut: {target_class}!

    override func setUp() {{
        super.setUp()
        sut = {target_class}()
    }}

    override func tearDown() {{
        sut = nil
        super.tearDown()
    }}

    // MARK: - Test Methods

    func testExample() {{
        // Given

        // When

        // Then
        XCTAssertNotNil(sut)
    }}

    // MARK: - Helper Methods

    private func createTestData() -> Data {{
        return Data()
    }}
}}
"#
    )
}

/// Canned fixture: a mock structured analysis result.
pub fn mock_analysis_result() -> &'static str {
    r#"
    func createMockAnalysisResult() -> AnalysisResult {
        return AnalysisResult(
            id: UUID(),
            timestamp: Date(),
            particleCount: 250,
            meanSize: 425.0,
            medianSize: 400.0,
            standardDeviation: 75.0,
            uniformityCoefficient: 0.82,
            distribution: [
                200: 15,
                300: 35,
                400: 50,
                500: 40,
                600: 20
            ]
        )
    }
    "#
}

/// Canned fixture: a helper that draws a synthetic test image.
pub fn mock_test_image() -> &'static str {
    r#"
    func createTestImage(withParticles count: Int = 100) -> UIImage {
        let size = CGSize(width: 1000, height: 1000)
        let renderer = UIGraphicsImageRenderer(size: size)

        return renderer.image { context in
            // White background
            UIColor.white.setFill()
            context.fill(CGRect(origin: .zero, size: size))

            // Draw random particles
            UIColor.black.setFill()
            for _ in 0..<count {
                let x = CGFloat.random(in: 0...size.width)
                let y = CGFloat.random(in: 0...size.height)
                let diameter = CGFloat.random(in: 3...8)

                let rect = CGRect(x: x, y: y, width: diameter, height: diameter)
                context.cgContext.fillEllipse(in: rect)
            }
        }
    }
    "#
}

/// Canned fixture: a mock Vision-framework request helper.
pub fn mock_vision_request() -> &'static str {
    r#"
    class MockVisionRequest: VNImageBasedRequest {
        var mockResults: [VNObservation] = []

        override func perform(on image: CVPixelBuffer) throws {
            // Mock implementation
            self.results = mockResults
        }
    }

    func createMockRectangleObservation(
        confidence: Float = 0.95,
        boundingBox: CGRect = CGRect(x: 0.4, y: 0.4, width: 0.2, height: 0.2)
    ) -> VNRectangleObservation {
        let observation = VNRectangleObservation(
            requestRevision: 1,
            boundingBox: boundingBox
        )
        return observation
    }
    "#
}

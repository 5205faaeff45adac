//! Coverage estimator: method count in, recommended test counts out.

use crate::core::CoverageEstimate;

/// Code-coverage percentage the recommendations aim for.
pub const COVERAGE_TARGET_PERCENT: u32 = 80;

pub const MINIMUM_TESTS_PER_METHOD: usize = 2;
pub const RECOMMENDED_TESTS_PER_METHOD: usize = 3;
pub const COMPREHENSIVE_TESTS_PER_METHOD: usize = 5;

/// Estimate how many tests a class with `method_count` methods needs.
///
/// Total for all non-negative input; negativity is unrepresentable here, so
/// callers accepting signed or textual counts validate at their boundary.
pub fn estimate_coverage(method_count: usize) -> CoverageEstimate {
    CoverageEstimate {
        method_count,
        minimum_tests: method_count * MINIMUM_TESTS_PER_METHOD,
        recommended_tests: method_count * RECOMMENDED_TESTS_PER_METHOD,
        comprehensive_tests: method_count * COMPREHENSIVE_TESTS_PER_METHOD,
        coverage_target: COVERAGE_TARGET_PERCENT,
    }
}

//! Comparison error info.

/// Whether a comparison may flip because of propagated rounding error.
///
/// Attached to comparison results, separately from the value info tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonErrorInfo {
    /// Maximum error tolerance for this comparison.
    pub max_tolerance: f64,
    /// True if the comparison may be wrong due to propagated errors.
    pub may_be_wrong: bool,
}

impl ComparisonErrorInfo {
    /// Comparison assumed suspect until proven otherwise.
    pub fn new(max_tolerance: f64) -> Self {
        Self::with_verdict(max_tolerance, true)
    }

    pub fn with_verdict(max_tolerance: f64, may_be_wrong: bool) -> Self {
        Self {
            max_tolerance,
            may_be_wrong,
        }
    }
}

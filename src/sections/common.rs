//! Common pattern section - penalizes denylisted substrings.

use super::SectionResult;
use crate::assessment::StrengthAssessment;

const COMMON_PENALTY: SectionResult = -20;

/// Applies the penalty when the password contains a common pattern.
///
/// The penalty applies regardless of what the other sections earned.
pub fn common_pattern_section(assessment: &StrengthAssessment) -> SectionResult {
    if assessment.contains_common {
        return COMMON_PENALTY;
    }
    0
}

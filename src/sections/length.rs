//! Length section - rewards longer passwords.

use super::SectionResult;
use crate::assessment::StrengthAssessment;

pub const MIN_LENGTH: usize = 8;

const LENGTH_TIERS: [(usize, SectionResult); 3] = [(MIN_LENGTH, 30), (12, 10), (16, 10)];

/// Scores the character count.
///
/// Tiers are cumulative: 8+ chars earn 30, 12+ another 10, 16+ another 10.
pub fn length_section(assessment: &StrengthAssessment) -> SectionResult {
    LENGTH_TIERS
        .iter()
        .filter(|(min, _)| assessment.length >= *min)
        .map(|(_, points)| points)
        .sum()
}

//! Minimum-strength policy applied to new credentials.

use thiserror::Error;

use crate::assessment::StrengthAssessment;
use crate::sections::MIN_LENGTH;

/// Score threshold used when the caller does not choose one.
pub const DEFAULT_MIN_SCORE: u8 = 70;

/// Gate configuration.
///
/// Only the score threshold is tunable. Length, lowercase, uppercase and digit
/// requirements always apply; symbols and common patterns only act through the
/// score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthPolicy {
    pub min_score: u8,
}

impl Default for StrengthPolicy {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// Returned by [`StrengthPolicy::check`] when a password fails the gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("password too weak (score {score}, required {min_score})", score = .assessment.score)]
pub struct WeakPasswordError {
    pub assessment: StrengthAssessment,
    pub min_score: u8,
    pub reasons: Vec<String>,
}

impl StrengthPolicy {
    pub fn with_min_score(mut self, min_score: u8) -> Self {
        self.min_score = min_score;
        self
    }

    pub fn accepts(&self, assessment: &StrengthAssessment) -> bool {
        assessment.score >= self.min_score
            && assessment.length >= MIN_LENGTH
            && assessment.has_lower
            && assessment.has_upper
            && assessment.has_digit
    }

    /// Same rule as [`accepts`](Self::accepts), as a `Result` carrying feedback.
    pub fn check(&self, assessment: &StrengthAssessment) -> Result<(), WeakPasswordError> {
        if self.accepts(assessment) {
            return Ok(());
        }

        let mut reasons = assessment.feedback();
        if assessment.score < self.min_score {
            reasons.push(format!(
                "Score {} is below the required {}",
                assessment.score, self.min_score
            ));
        }

        Err(WeakPasswordError {
            assessment: *assessment,
            min_score: self.min_score,
            reasons,
        })
    }
}

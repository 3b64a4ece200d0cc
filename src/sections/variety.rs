//! Character variety section - checks for lowercase, uppercase, digits, symbols.

use super::SectionResult;
use crate::assessment::StrengthAssessment;

/// Character classes present in a password, ASCII-only.
///
/// Anything that is not `a-z`, `A-Z` or `0-9` is a symbol, non-ASCII letters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterClasses {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl CharacterClasses {
    /// Scans `pwd` once and returns the classes found with its character count.
    pub fn detect(pwd: &str) -> (Self, usize) {
        let mut classes = Self::default();
        let mut length = 0;
        for c in pwd.chars() {
            length += 1;
            match c {
                'a'..='z' => classes.has_lower = true,
                'A'..='Z' => classes.has_upper = true,
                '0'..='9' => classes.has_digit = true,
                _ => classes.has_symbol = true,
            }
        }
        (classes, length)
    }
}

/// Scores each class present: lowercase 10, uppercase 15, digit 15, symbol 20.
pub fn character_variety_section(assessment: &StrengthAssessment) -> SectionResult {
    [
        (assessment.has_lower, 10),
        (assessment.has_upper, 15),
        (assessment.has_digit, 15),
        (assessment.has_symbol, 20),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, points)| points)
    .sum()
}

//! Strength assessment value type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::sections::MIN_LENGTH;

/// Result of scoring one password.
///
/// Holds only derived facts, never the password itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StrengthAssessment {
    /// Final score, clamped to `0..=100`.
    pub score: u8,
    /// Number of characters (not bytes) in the input.
    pub length: usize,
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    /// Anything that is not an ASCII letter or digit, including non-ASCII letters.
    pub has_symbol: bool,
    /// The lower-cased input contains a denylisted pattern.
    pub contains_common: bool,
}

/// Coarse strength band for UI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Maps a score to its band: `0..=49` weak, `50..=69` medium, `70..=100` strong.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=49 => StrengthLevel::Weak,
            50..=69 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StrengthAssessment {
    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.score)
    }

    /// Human-readable hints about what lowers the score.
    ///
    /// Order is stable: length, missing character classes, common pattern.
    /// Returns an empty vector when there is nothing to improve.
    pub fn feedback(&self) -> Vec<String> {
        let mut reasons = Vec::new();

        if self.length < MIN_LENGTH {
            reasons.push(format!(
                "Password must be at least {} characters",
                MIN_LENGTH
            ));
        }

        let missing: Vec<_> = vec![
            if !self.has_lower { Some("lowercase") } else { None },
            if !self.has_upper { Some("uppercase") } else { None },
            if !self.has_digit { Some("numbers") } else { None },
            if !self.has_symbol { Some("special characters") } else { None },
        ]
        .into_iter()
        .flatten()
        .collect();

        if !missing.is_empty() {
            reasons.push(format!("Missing: {}", missing.join(", ")));
        }

        if self.contains_common {
            reasons.push("Password contains a common pattern".to_string());
        }

        reasons
    }
}

//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

use crate::assessment::StrengthAssessment;
use crate::denylist::{Denylist, BUILTIN};
use crate::policy::{StrengthPolicy, WeakPasswordError, DEFAULT_MIN_SCORE};
use crate::sections::{CharacterClasses, SECTIONS};

const MAX_SCORE: i32 = 100;

/// Scores a password against the builtin denylist.
///
/// `None` is scored as the empty string. Never fails.
///
/// # Arguments
/// * `password` - The password to score, if any
///
/// # Returns
/// A `StrengthAssessment` with the clamped score and the detected flags.
pub fn compute_strength(password: Option<&str>) -> StrengthAssessment {
    score_password(password.unwrap_or_default(), &BUILTIN)
}

/// Gate for new credentials.
///
/// True when the score reaches `min_score` (default [`DEFAULT_MIN_SCORE`]) and
/// the password has 8+ characters, a lowercase letter, an uppercase letter and a
/// digit. Symbols and common patterns are not required on their own.
pub fn is_strong_password(password: Option<&str>, min_score: Option<u8>) -> bool {
    let policy = StrengthPolicy {
        min_score: min_score.unwrap_or(DEFAULT_MIN_SCORE),
    };
    policy.accepts(&compute_strength(password))
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn score_password(pwd: &str, denylist: &Denylist) -> StrengthAssessment {
    let (classes, length) = CharacterClasses::detect(pwd);

    let mut assessment = StrengthAssessment {
        score: 0,
        length,
        has_lower: classes.has_lower,
        has_upper: classes.has_upper,
        has_digit: classes.has_digit,
        has_symbol: classes.has_symbol,
        contains_common: denylist.contains_common(&pwd.to_lowercase()),
    };

    // Orchestrator: sum independent sections, then clamp once
    let mut raw = 0;
    for (section_name, section_fn) in SECTIONS {
        let points = section_fn(&assessment);

        #[cfg(feature = "tracing")]
        tracing::trace!(section = section_name, points, "section scored");

        raw += points;
    }

    assessment.score = raw.clamp(0, MAX_SCORE) as u8;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = assessment.score,
        raw,
        length = assessment.length,
        "password scored"
    );

    assessment
}

/// Scores and gates passwords with a chosen policy and denylist.
///
/// Immutable once built, so it can be shared across threads as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluator {
    policy: StrengthPolicy,
    denylist: Denylist,
}

impl Evaluator {
    pub fn new(policy: StrengthPolicy, denylist: Denylist) -> Self {
        Self { policy, denylist }
    }

    pub fn policy(&self) -> &StrengthPolicy {
        &self.policy
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    pub fn assess(&self, password: Option<&str>) -> StrengthAssessment {
        score_password(password.unwrap_or_default(), &self.denylist)
    }

    /// Scores a secret without copying it out of its wrapper.
    pub fn assess_secret(&self, password: &SecretString) -> StrengthAssessment {
        score_password(password.expose_secret(), &self.denylist)
    }

    pub fn is_strong(&self, password: Option<&str>) -> bool {
        self.policy.accepts(&self.assess(password))
    }

    /// Gate as a `Result`, for handlers that turn a weak password into a validation error.
    ///
    /// # Errors
    ///
    /// Returns `WeakPasswordError` with feedback when the policy rejects the password.
    pub fn check(&self, password: Option<&str>) -> Result<StrengthAssessment, WeakPasswordError> {
        let assessment = self.assess(password);
        self.policy.check(&assessment)?;
        Ok(assessment)
    }
}

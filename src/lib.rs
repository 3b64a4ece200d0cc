//! Password strength scoring library
//!
//! This library scores candidate passwords on a fixed additive scale
//! and gates new credentials against a minimum-strength policy.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Derives `Serialize`/`Deserialize` for assessments
//!
//! # Gate policy
//!
//! A password passes [`is_strong_password`] only when its score reaches the
//! threshold AND it has at least 8 characters, a lowercase letter, an uppercase
//! letter and a digit. Symbols and the absence of common patterns are never
//! required on their own: they only move the score. This is a product decision
//! and is kept as is.
//!
//! # Example
//!
//! ```rust
//! use pwd_gate::{compute_strength, is_strong_password};
//!
//! let assessment = compute_strength(Some("Abcdefgh1"));
//! assert_eq!(assessment.score, 70);
//!
//! assert!(is_strong_password(Some("Abcdefgh1"), None));
//! assert!(!is_strong_password(Some("Abcdefgh1"), Some(80)));
//! ```

// Internal modules
mod assessment;
mod denylist;
mod evaluator;
mod policy;
mod sections;

// Public API
pub use assessment::{StrengthAssessment, StrengthLevel};
pub use denylist::{Denylist, DenylistError, COMMON_PATTERNS};
pub use evaluator::{compute_strength, is_strong_password, Evaluator};
pub use policy::{StrengthPolicy, WeakPasswordError, DEFAULT_MIN_SCORE};

//! Password scoring sections
//!
//! Each section scores a specific aspect of an assessment. Sections are
//! independent: they read the detected facts, never each other's points.

mod common;
mod length;
mod variety;

pub use common::common_pattern_section;
pub use length::{length_section, MIN_LENGTH};
pub use variety::{character_variety_section, CharacterClasses};

use crate::assessment::StrengthAssessment;

/// Points contributed by one section. Negative for penalties.
pub type SectionResult = i32;

pub type Section = fn(&StrengthAssessment) -> SectionResult;

/// Sections in evaluation order, with their names for logging.
pub const SECTIONS: [(&str, Section); 3] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("common", common_pattern_section),
];

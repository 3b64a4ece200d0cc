//! Common-pattern denylist
//!
//! Holds the fixed list of weak substrings and, optionally, extra entries
//! loaded from a text file.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Substrings that mark a password as containing a common pattern.
pub const COMMON_PATTERNS: [&str; 12] = [
    "password", "1234", "12345", "123456", "azerty", "qwerty", "admin", "welcome", "letmein",
    "monkey", "dragon", "iloveyou",
];

#[derive(Error, Debug)]
pub enum DenylistError {
    #[error("Denylist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read denylist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Denylist file is empty")]
    EmptyFile,
}

/// Set of lower-case substrings checked against lower-cased passwords.
///
/// Always includes [`COMMON_PATTERNS`]; `extra` holds caller-supplied entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Denylist {
    extra: Vec<String>,
}

pub(crate) static BUILTIN: Denylist = Denylist::builtin();

impl Denylist {
    /// Only the fixed [`COMMON_PATTERNS`].
    pub const fn builtin() -> Self {
        Self { extra: Vec::new() }
    }

    /// Adds entries on top of the current ones.
    ///
    /// Entries are trimmed and lower-cased; blank entries and duplicates are skipped.
    pub fn with_extra_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref().trim().to_lowercase();
            if pattern.is_empty() || self.contains_entry(&pattern) {
                continue;
            }
            self.extra.push(pattern);
        }
        self
    }

    /// Loads the builtin list plus one entry per line of the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank line
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DenylistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: FileNotFound {:?}", path);
            return Err(DenylistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Denylist loading FAILED: Empty file {:?}", path);
            return Err(DenylistError::EmptyFile);
        }

        let denylist = Self::builtin().with_extra_patterns(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Denylist loaded: {} extra patterns from {:?}",
            denylist.extra.len(),
            path
        );

        Ok(denylist)
    }

    /// Returns `true` if any entry occurs in `lowered`.
    ///
    /// `lowered` must already be lower-cased.
    pub fn contains_common(&self, lowered: &str) -> bool {
        COMMON_PATTERNS.iter().any(|p| lowered.contains(p))
            || self.extra.iter().any(|p| lowered.contains(p.as_str()))
    }

    /// Total number of entries, builtin included.
    pub fn len(&self) -> usize {
        COMMON_PATTERNS.len() + self.extra.len()
    }

    /// Never true: the builtin patterns are always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn contains_entry(&self, pattern: &str) -> bool {
        COMMON_PATTERNS.contains(&pattern) || self.extra.iter().any(|p| p == pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn setup_with_tempfile(patterns: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for pattern in patterns {
            writeln!(temp_file, "{}", pattern).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    fn test_builtin_matches_substrings() {
        assert!(BUILTIN.contains_common("mypassword!"));
        assert!(BUILTIN.contains_common("x123456y"));
        assert!(BUILTIN.contains_common("iloveyou"));
        assert!(!BUILTIN.contains_common("correct-horse"));
    }

    #[test]
    fn test_builtin_expects_lowered_input() {
        assert!(!BUILTIN.contains_common("PASSWORD"));
        assert!(BUILTIN.contains_common(&"PASSWORD".to_lowercase()));
    }

    #[test]
    fn test_builtin_len() {
        assert_eq!(Denylist::builtin().len(), 12);
        assert!(!Denylist::builtin().is_empty());
    }

    #[test]
    fn test_with_extra_patterns_normalizes() {
        let denylist =
            Denylist::builtin().with_extra_patterns(["  Asso2024 ", "", "ADMIN", "asso2024"]);
        assert_eq!(denylist.len(), 13);
        assert!(denylist.contains_common("myasso2024!"));
        assert!(!BUILTIN.contains_common("myasso2024!"));
    }

    #[test]
    fn test_from_path_file_not_found() {
        let result = Denylist::from_path("/nonexistent/path/denylist.txt");
        match result {
            Err(DenylistError::FileNotFound(path)) => {
                assert_eq!(path, PathBuf::from("/nonexistent/path/denylist.txt"));
            }
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    fn test_from_path_empty_file() {
        let temp_file = setup_with_tempfile(&["", "   "]);
        let result = Denylist::from_path(temp_file.path());
        assert!(matches!(result, Err(DenylistError::EmptyFile)));
    }

    #[test]
    fn test_from_path_success() {
        let temp_file = setup_with_tempfile(&["soleil", "Marseille13", "qwerty"]);
        let denylist = Denylist::from_path(temp_file.path()).expect("Failed to load");

        assert_eq!(denylist.len(), 14);
        assert!(denylist.contains_common("jaimemarseille13"));
        assert!(denylist.contains_common("soleil"));
        assert!(denylist.contains_common("qwerty"));
    }
}

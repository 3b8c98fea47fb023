use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Genre;

/// Accepted age range for a stated age
pub const MIN_AGE: u8 = 3;
pub const MAX_AGE: u8 = 100;

/// What the extractor pulled out of one free-text self-description
///
/// Created per user input and discarded after use. Absent fields are data,
/// not errors; `validate` reports on them without changing them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedPreferences {
    /// Stated age, when a pattern matched and the value fell within 3..=100
    pub age: Option<u8>,
    /// Recognized genres, de-duplicated; ordering is not guaranteed
    pub genres: HashSet<Genre>,
    /// The input as received, retained for diagnostics
    pub raw_text: String,
}

impl ParsedPreferences {
    /// Annotates the extracted values with validity flags and messages
    pub fn validate(&self) -> ValidationReport {
        let age_error = if self.age.is_none() {
            Some("no age found in the input".to_string())
        } else {
            None
        };

        let genres_error = if self.genres.is_empty() {
            Some("no recognizable genres in the input".to_string())
        } else {
            None
        };

        ValidationReport {
            age_valid: age_error.is_none(),
            genres_valid: genres_error.is_none(),
            age_error,
            genres_error,
        }
    }
}

/// Validation outcome for one parsed input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationReport {
    pub age_valid: bool,
    pub genres_valid: bool,
    pub age_error: Option<String>,
    pub genres_error: Option<String>,
}

impl ValidationReport {
    /// Overall validity: both an age and at least one genre were found
    pub fn is_valid(&self) -> bool {
        self.age_valid && self.genres_valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(age: Option<u8>, genres: &[Genre]) -> ParsedPreferences {
        ParsedPreferences {
            age,
            genres: genres.iter().copied().collect(),
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_valid_when_age_and_genres_present() {
        let report = parsed(Some(13), &[Genre::Rpg]).validate();
        assert!(report.age_valid);
        assert!(report.genres_valid);
        assert!(report.is_valid());
        assert!(report.age_error.is_none());
        assert!(report.genres_error.is_none());
    }

    #[test]
    fn test_invalid_without_age() {
        let report = parsed(None, &[Genre::Rpg]).validate();
        assert!(!report.age_valid);
        assert!(report.genres_valid);
        assert!(!report.is_valid());
        assert!(report.age_error.is_some());
    }

    #[test]
    fn test_invalid_without_genres() {
        let report = parsed(Some(25), &[]).validate();
        assert!(report.age_valid);
        assert!(!report.genres_valid);
        assert!(!report.is_valid());
        assert!(report.genres_error.is_some());
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let parsed = parsed(None, &[]);
        let before = parsed.clone();
        let _ = parsed.validate();
        assert_eq!(parsed, before);
    }
}

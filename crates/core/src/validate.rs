//! Input validation and blacklist matching.
//!
//! Both checks run before any transformation. Validation comes first, so a
//! blacklist lookup only ever sees lowercase ASCII input.

use std::collections::HashSet;

use crate::error::ProcessError;

/// Accept only strings made of ASCII lowercase letters.
///
/// The empty string is valid. On failure, the error lists every distinct
/// disallowed character once, in order of first occurrence.
pub fn validate(input: &str) -> Result<(), ProcessError> {
    let mut seen = HashSet::new();
    let invalid: Vec<char> = input
        .chars()
        .filter(|c| !c.is_ascii_lowercase())
        .filter(|c| seen.insert(*c))
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(ProcessError::InvalidCharacters(invalid))
    }
}

/// Set of forbidden literal inputs, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Blacklist {
    words: HashSet<String>,
}

impl Blacklist {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Fail with [`ProcessError::Blacklisted`] if the lowercased input is listed.
    pub fn check(&self, input: &str) -> Result<(), ProcessError> {
        if self.words.contains(&input.to_lowercase()) {
            Err(ProcessError::Blacklisted(input.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

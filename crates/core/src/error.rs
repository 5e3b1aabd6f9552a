use thiserror::Error;

/// User-visible failures of the processing pipeline.
///
/// Both variants describe a property of the input, so the HTTP layer reports
/// them as `400 Bad Request`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    /// The input contains characters outside `'a'..='z'`.
    ///
    /// Holds the distinct offending characters in first-seen order.
    #[error("invalid characters in input: {}", quote_chars(.0))]
    InvalidCharacters(Vec<char>),

    /// The input matches a blacklisted word.
    #[error("input '{0}' is blacklisted")]
    Blacklisted(String),
}

impl ProcessError {
    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ProcessError::InvalidCharacters(_) => "invalid_characters",
            ProcessError::Blacklisted(_) => "blacklisted",
        }
    }
}

fn quote_chars(chars: &[char]) -> String {
    chars
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_characters_message_quotes_each_char() {
        let err = ProcessError::InvalidCharacters(vec!['1', 'A', ' ']);
        assert_eq!(
            err.to_string(),
            "invalid characters in input: '1' 'A' ' '"
        );
    }

    #[test]
    fn test_blacklisted_message() {
        let err = ProcessError::Blacklisted("badword".to_string());
        assert_eq!(err.to_string(), "input 'badword' is blacklisted");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(
            ProcessError::InvalidCharacters(vec!['1']).kind(),
            "invalid_characters"
        );
        assert_eq!(
            ProcessError::Blacklisted(String::new()).kind(),
            "blacklisted"
        );
    }
}

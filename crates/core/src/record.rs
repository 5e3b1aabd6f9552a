use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::analyze::{character_counts, max_vowel_substring, NO_VOWEL_SUBSTRING};
use crate::error::ProcessError;
use crate::mutate::remove_char_at;
use crate::sort::{sort, SortAlgorithm};
use crate::transform::half_reverse;
use crate::validate::{validate, Blacklist};

/// Everything computed for one accepted input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub processed_string: String,
    pub character_counts: BTreeMap<char, usize>,
    pub max_vowel_substring: Option<String>,
    pub sorted_string: String,
    pub removed_char_index: usize,
    pub removed_char: Option<char>,
    pub trimmed_string: String,
}

/// Validate the raw input, check the blacklist and apply the half-reverse
/// transform.
pub fn prepare(input: &str, blacklist: &Blacklist) -> Result<String, ProcessError> {
    validate(input)?;
    blacklist.check(input)?;
    Ok(half_reverse(input))
}

/// Assemble the record for an already transformed string.
///
/// `removed_index` is the random draw for the mutation step.
pub fn build_record(
    processed: String,
    algorithm: SortAlgorithm,
    removed_index: usize,
) -> ResultRecord {
    let mutation = remove_char_at(&processed, removed_index);

    ResultRecord {
        character_counts: character_counts(&processed),
        max_vowel_substring: max_vowel_substring(&processed),
        sorted_string: sort(&processed, algorithm),
        removed_char_index: mutation.removed_index,
        removed_char: mutation.removed_char,
        trimmed_string: mutation.trimmed,
        processed_string: processed,
    }
}

/// Render a record as the plain-text report printed by the CLI.
pub fn render_report(record: &ResultRecord) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Processed string: {}", record.processed_string);
    let _ = writeln!(out, "Character counts:");
    for (c, count) in &record.character_counts {
        let _ = writeln!(out, "  '{c}': {count}");
    }
    let _ = writeln!(
        out,
        "Longest vowel-bounded substring: {}",
        record
            .max_vowel_substring
            .as_deref()
            .unwrap_or(NO_VOWEL_SUBSTRING)
    );
    let _ = writeln!(out, "Sorted string: {}", record.sorted_string);
    match record.removed_char {
        Some(c) => {
            let _ = writeln!(
                out,
                "Removed character at position {}: '{c}'",
                record.removed_char_index
            );
        }
        None => {
            let _ = writeln!(out, "Removed character: none");
        }
    }
    let _ = writeln!(out, "Trimmed string: {}", record.trimmed_string);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // prepare tests
    // ============================================================================

    #[test]
    fn test_prepare_transforms_valid_input() {
        assert_eq!(prepare("abcd", &Blacklist::default()), Ok("badc".into()));
        assert_eq!(
            prepare("abcde", &Blacklist::default()),
            Ok("edcbaabcde".into())
        );
    }

    #[test]
    fn test_prepare_validates_before_blacklist() {
        let blacklist = Blacklist::new(["a1b"]);
        assert_eq!(
            prepare("a1b", &blacklist),
            Err(ProcessError::InvalidCharacters(vec!['1']))
        );
    }

    #[test]
    fn test_prepare_rejects_blacklisted() {
        let blacklist = Blacklist::new(["badword"]);
        assert_eq!(
            prepare("badword", &blacklist),
            Err(ProcessError::Blacklisted("badword".into()))
        );
    }

    // ============================================================================
    // build_record tests
    // ============================================================================

    #[test]
    fn test_build_record_even_input() {
        let record = build_record("cbafed".to_string(), SortAlgorithm::QuickSort, 0);

        assert_eq!(record.processed_string, "cbafed");
        assert_eq!(record.character_counts[&'a'], 1);
        assert_eq!(record.max_vowel_substring.as_deref(), Some("afe"));
        assert_eq!(record.sorted_string, "abcdef");
        assert_eq!(record.removed_char_index, 0);
        assert_eq!(record.removed_char, Some('c'));
        assert_eq!(record.trimmed_string, "bafed");
    }

    #[test]
    fn test_build_record_sort_algorithms_agree() {
        let quick = build_record("edcbaabcde".to_string(), SortAlgorithm::QuickSort, 3);
        let tree = build_record("edcbaabcde".to_string(), SortAlgorithm::TreeSort, 3);
        assert_eq!(quick, tree);
    }

    #[test]
    fn test_build_record_empty_input() {
        let record = build_record(String::new(), SortAlgorithm::TreeSort, 0);

        assert_eq!(record.processed_string, "");
        assert!(record.character_counts.is_empty());
        assert_eq!(record.max_vowel_substring, None);
        assert_eq!(record.sorted_string, "");
        assert_eq!(record.removed_char, None);
        assert_eq!(record.trimmed_string, "");
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = build_record("ba".to_string(), SortAlgorithm::QuickSort, 1);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["processedString"], "ba");
        assert_eq!(json["characterCounts"]["a"], 1);
        assert_eq!(json["characterCounts"]["b"], 1);
        assert_eq!(json["maxVowelSubstring"], serde_json::Value::Null);
        assert_eq!(json["sortedString"], "ab");
        assert_eq!(json["removedCharIndex"], 1);
        assert_eq!(json["removedChar"], "a");
        assert_eq!(json["trimmedString"], "b");
    }

    // ============================================================================
    // render_report tests
    // ============================================================================

    #[test]
    fn test_render_report() {
        let record = build_record("badc".to_string(), SortAlgorithm::QuickSort, 1);
        let report = render_report(&record);

        assert_eq!(
            report,
            "Processed string: badc\n\
             Character counts:\n  'a': 1\n  'b': 1\n  'c': 1\n  'd': 1\n\
             Longest vowel-bounded substring: no qualifying substring (at least two vowels required)\n\
             Sorted string: abcd\n\
             Removed character at position 1: 'a'\n\
             Trimmed string: bdc\n"
        );
    }

    #[test]
    fn test_render_report_without_removal() {
        let record = build_record(String::new(), SortAlgorithm::QuickSort, 0);
        assert!(render_report(&record).contains("Removed character: none"));
    }
}

use std::collections::BTreeMap;

/// Characters treated as vowels by the substring search.
pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

/// Text shown in reports when no vowel-bounded substring exists.
pub const NO_VOWEL_SUBSTRING: &str = "no qualifying substring (at least two vowels required)";

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Count occurrences of each character, ordered by character code.
pub fn character_counts(input: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in input.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Longest substring that starts and ends with a vowel.
///
/// Scans every ordered pair of vowel positions and keeps the first span that
/// is strictly longer than the best so far. Returns `None` when the input has
/// fewer than two vowels.
pub fn max_vowel_substring(input: &str) -> Option<String> {
    let chars: Vec<char> = input.chars().collect();
    let vowel_positions: Vec<usize> = chars
        .iter()
        .enumerate()
        .filter(|(_, c)| is_vowel(**c))
        .map(|(i, _)| i)
        .collect();

    if vowel_positions.len() < 2 {
        return None;
    }

    let mut best: Option<(usize, usize)> = None;
    let mut best_len = 0;

    for (i, &start) in vowel_positions.iter().enumerate() {
        for &end in &vowel_positions[i + 1..] {
            let len = end - start + 1;
            if len > best_len {
                best_len = len;
                best = Some((start, end));
            }
        }
    }

    best.map(|(start, end)| chars[start..=end].iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============================================================================
    // character_counts tests
    // ============================================================================

    #[test]
    fn test_character_counts_basic() {
        let counts = character_counts("aabbc");
        assert_eq!(counts[&'a'], 2);
        assert_eq!(counts[&'b'], 2);
        assert_eq!(counts[&'c'], 1);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_character_counts_ordered_by_code() {
        let counts = character_counts("zebra");
        let keys: Vec<char> = counts.keys().copied().collect();
        assert_eq!(keys, vec!['a', 'b', 'e', 'r', 'z']);
    }

    #[test]
    fn test_character_counts_sum_matches_length() {
        for input in ["", "a", "edcbaabcde", "mississippi", "zzzzzz"] {
            let total: usize = character_counts(input).values().sum();
            assert_eq!(total, input.chars().count(), "input: {input:?}");
        }
    }

    #[test]
    fn test_character_counts_empty() {
        assert!(character_counts("").is_empty());
    }

    // ============================================================================
    // max_vowel_substring tests
    // ============================================================================

    #[test]
    fn test_max_vowel_substring_scenario() {
        assert_eq!(max_vowel_substring("xbacefgi").as_deref(), Some("acefgi"));
    }

    #[test]
    fn test_max_vowel_substring_adjacent_vowels() {
        assert_eq!(max_vowel_substring("aeb").as_deref(), Some("ae"));
    }

    #[test]
    fn test_max_vowel_substring_treats_y_as_vowel() {
        assert_eq!(max_vowel_substring("xyzzy").as_deref(), Some("yzzy"));
    }

    #[test]
    fn test_max_vowel_substring_requires_two_vowels() {
        assert_eq!(max_vowel_substring(""), None);
        assert_eq!(max_vowel_substring("bcd"), None);
        assert_eq!(max_vowel_substring("bad"), None);
    }

    #[test]
    fn test_max_vowel_substring_repeated_vowel() {
        assert_eq!(max_vowel_substring("aa").as_deref(), Some("aa"));
    }

    #[test]
    fn test_max_vowel_substring_on_transformed_string() {
        // half_reverse("abcdef") == "cbafed"
        assert_eq!(max_vowel_substring("cbafed").as_deref(), Some("afe"));
    }

    #[test]
    fn test_max_vowel_substring_is_bounded_and_maximal() {
        let alphabet = ['a', 'b', 'e'];
        let mut inputs = vec![String::new()];
        for _ in 0..6 {
            inputs = inputs
                .iter()
                .flat_map(|s| alphabet.iter().map(move |c| format!("{s}{c}")))
                .collect();

            for input in &inputs {
                let positions: Vec<usize> = input
                    .chars()
                    .enumerate()
                    .filter(|(_, c)| is_vowel(*c))
                    .map(|(i, _)| i)
                    .collect();

                match max_vowel_substring(input) {
                    None => assert!(positions.len() < 2, "input: {input}"),
                    Some(found) => {
                        let first = found.chars().next().unwrap();
                        let last = found.chars().last().unwrap();
                        assert!(is_vowel(first) && is_vowel(last), "input: {input}");
                        let widest = positions.last().unwrap() - positions[0] + 1;
                        assert_eq!(found.len(), widest, "input: {input}");
                        assert!(input.contains(&found));
                    }
                }
            }
        }
    }
}

/// Outcome of removing one character from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub removed_index: usize,
    /// `None` when nothing was removed.
    pub removed_char: Option<char>,
    pub trimmed: String,
}

/// Remove the character at `index`.
///
/// An empty string or an out-of-range index leaves the input unchanged.
pub fn remove_char_at(input: &str, index: usize) -> Mutation {
    match input.char_indices().nth(index) {
        Some((offset, c)) => {
            let mut trimmed = String::with_capacity(input.len() - c.len_utf8());
            trimmed.push_str(&input[..offset]);
            trimmed.push_str(&input[offset + c.len_utf8()..]);
            Mutation {
                removed_index: index,
                removed_char: Some(c),
                trimmed,
            }
        }
        None => Mutation {
            removed_index: index,
            removed_char: None,
            trimmed: input.to_string(),
        },
    }
}

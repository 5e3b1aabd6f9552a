//! Pure helpers for the remote random-number collaborator.
//!
//! The collaborator answers `GET {url}?min=0&max={n-1}&count=1` with a single
//! integer wrapped in brackets, e.g. `[3]`.

/// Query parameters for a draw in `[0, upper)`.
///
/// `upper` must be non-zero; the remote `max` bound is inclusive.
pub fn draw_query(upper: usize) -> [(&'static str, usize); 3] {
    [("min", 0), ("max", upper.saturating_sub(1)), ("count", 1)]
}

/// Parse a bracketed integer response body such as `[3]`.
pub fn parse_remote_index(body: &str) -> Result<usize, String> {
    let inner = body.trim().trim_matches(|c| c == '[' || c == ']').trim();

    inner
        .parse::<usize>()
        .map_err(|e| format!("Unparseable random-number response {body:?}: {e}"))
}

/// Accept a parsed value only if it is a valid index below `upper`.
pub fn check_in_range(value: usize, upper: usize) -> Result<usize, String> {
    if value < upper {
        Ok(value)
    } else {
        Err(format!(
            "Random-number response {value} is outside [0, {upper})"
        ))
    }
}

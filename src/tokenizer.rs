/// Upper bound on tokens produced from a single line. Anything past the
/// cap is dropped without complaint.
pub const MAX_TOKENS: usize = 1024;

/// Splits a raw input line on runs of spaces and tabs.
///
/// Tokens are borrowed slices of `line`; the caller keeps the line alive
/// for as long as the returned vector is used. An empty or all-whitespace
/// line yields an empty vector. No quoting or escaping.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split([' ', '\t'])
        .filter(|token| !token.is_empty())
        .take(MAX_TOKENS)
        .collect()
}

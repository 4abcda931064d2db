// Tokenization and n-gram extraction.
//
// The detector works on surface forms only: tokens are lowercase
// whitespace-delimited substrings with punctuation left attached, and an
// n-gram is a contiguous window of `n` tokens compared by value.

/// Split text into lowercase whitespace-delimited tokens.
///
/// Splits on any whitespace run, lowercases each fragment, and discards
/// empty fragments. Punctuation is not stripped ("station?" is one token).
/// An empty or all-whitespace input yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(|t| t.to_lowercase()).collect()
}

/// Ordered contiguous windows of `n` tokens.
///
/// Yields `len(tokens) - n + 1` windows, or nothing when the token sequence
/// is shorter than `n`. Callers pass `n >= 1`.
pub fn ngrams(tokens: &[String], n: usize) -> Vec<&[String]> {
    debug_assert!(n >= 1);
    if tokens.len() < n {
        return Vec::new();
    }
    tokens.windows(n).collect()
}

// ============================================================================
// Tests
// ============================================================================

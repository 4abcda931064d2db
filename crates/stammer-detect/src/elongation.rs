// Character elongation scanning.
//
// An elongation run is a maximal stretch of three or more identical
// characters in the lowercased text ("soooo", "!!!!"). Only runs of
// alphanumeric characters count toward the score; repeated punctuation and
// whitespace are ignored.

/// Minimum run length before repeated characters count as elongation.
const MIN_RUN_LEN: usize = 3;

/// Total elongated alphanumeric character count of `text`.
///
/// Every maximal run of >= 3 identical characters whose character is
/// alphanumeric contributes its full length. Independent runs accumulate:
/// "aaa bbb" scores 6. Empty text scores 0.
pub fn elongation_score(text: &str) -> usize {
    let mut score = 0;
    let mut run_char: Option<char> = None;
    let mut run_len = 0;

    for c in text.to_lowercase().chars() {
        if Some(c) == run_char {
            run_len += 1;
            continue;
        }
        if run_len >= MIN_RUN_LEN && run_char.is_some_and(char::is_alphanumeric) {
            score += run_len;
        }
        run_char = Some(c);
        run_len = 1;
    }
    // Final run.
    if run_len >= MIN_RUN_LEN && run_char.is_some_and(char::is_alphanumeric) {
        score += run_len;
    }

    score
}

// ============================================================================
// Tests
// ============================================================================

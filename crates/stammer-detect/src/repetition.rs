// Repetition analysis: n-gram frequency and consecutive-run statistics.
//
// Two independent statistics are computed per n-gram size:
//
// - frequency: how often a given n-gram occurs anywhere in a sequence,
//   regardless of position;
// - consecutive run: the longest stretch of immediately adjacent identical
//   n-grams.
//
// Both are compared between translation and source by the decision policy in
// `detector`; the helpers here are pure and order of evaluation does not
// matter.

use hashbrown::{HashMap, HashSet};

use stammer_core::{DetectorConfig, StammerSignal};

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Occurrence count per distinct n-gram.
pub fn frequency_counts<'a>(ngrams: &[&'a [String]]) -> HashMap<&'a [String], usize> {
    let mut counts: HashMap<&[String], usize> = HashMap::new();
    for &gram in ngrams {
        *counts.entry(gram).or_insert(0) += 1;
    }
    counts
}

/// Highest occurrence count of any n-gram in a sequence (0 when empty).
pub fn max_frequency(counts: &HashMap<&[String], usize>) -> usize {
    counts.values().copied().max().unwrap_or(0)
}

/// Longest run of any identical adjacent n-grams.
///
/// Returns 0 for an empty sequence, otherwise at least 1.
pub fn max_consecutive_run(ngrams: &[&[String]]) -> usize {
    let mut max_run = 0;
    let mut run = 0;
    let mut prev: Option<&[String]> = None;

    for &gram in ngrams {
        if prev == Some(gram) {
            run += 1;
        } else {
            run = 1;
            prev = Some(gram);
        }
        max_run = max_run.max(run);
    }

    max_run
}

/// Longest run of one specific n-gram value.
pub fn max_consecutive_run_of(ngrams: &[&[String]], target: &[String]) -> usize {
    let mut max_run = 0;
    let mut run = 0;

    for &gram in ngrams {
        if gram == target {
            run += 1;
            max_run = max_run.max(run);
        } else {
            run = 0;
        }
    }

    max_run
}

// ---------------------------------------------------------------------------
// Per-size decision
// ---------------------------------------------------------------------------

/// Run the frequency and consecutive-run checks at one n-gram size.
///
/// Returns the first signal that fires, or `None`. The frequency check runs
/// first: a translated n-gram occurring `min_repetitions` or more times
/// fires when its count exceeds the best source frequency at this size times
/// `frequency_ratio`. The consecutive check then looks for any window of
/// `min_repetitions` identical adjacent translated n-grams; such a window
/// fires unless the source itself has a comparable run, in which case the
/// translated run must exceed the source run times `consecutive_ratio`.
pub fn check_ngram_size(
    translated_ngrams: &[&[String]],
    source_ngrams: &[&[String]],
    n: usize,
    config: &DetectorConfig,
) -> Option<StammerSignal> {
    // Frequency check: non-consecutive repetition anywhere in the text,
    // e.g. "is really the" appearing four times in different positions.
    let translated_counts = frequency_counts(translated_ngrams);
    let source_counts = frequency_counts(source_ngrams);
    let max_source_count = max_frequency(&source_counts);

    // Walk distinct n-grams in first-occurrence order so the reported
    // signal is deterministic.
    let mut seen: HashSet<&[String]> = HashSet::new();
    for &gram in translated_ngrams {
        if !seen.insert(gram) {
            continue;
        }
        let count = translated_counts[gram];
        if count < config.min_repetitions {
            continue;
        }
        if count as f64 > max_source_count as f64 * config.frequency_ratio {
            return Some(StammerSignal::FrequentNgram {
                n,
                ngram: gram.join(" "),
                count,
                max_source_count,
            });
        }
    }

    // Consecutive-run check: back-to-back repetition of one n-gram.
    for window in translated_ngrams.windows(config.min_repetitions) {
        let first = window[0];
        if !window.iter().all(|&gram| gram == first) {
            continue;
        }

        let source_run = max_consecutive_run(source_ngrams);
        let translated_run = max_consecutive_run_of(translated_ngrams, first);

        // A source with its own repetition pattern excuses the translation
        // up to consecutive_ratio times the source run.
        if source_run >= config.min_repetitions
            && translated_run <= source_run * config.consecutive_ratio
        {
            continue;
        }

        return Some(StammerSignal::ConsecutiveRun {
            n,
            ngram: first.join(" "),
            translated_run,
            source_run,
        });
    }

    None
}

// ============================================================================
// Tests
// ============================================================================

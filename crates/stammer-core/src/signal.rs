// Stammer signal: the typed outcome of a positive detection.

use serde::{Deserialize, Serialize};

/// Evidence for a stammering verdict.
///
/// The detector returns the first signal that fires (elongation is always
/// evaluated before the phrase-repetition checks). Each variant carries the
/// measurements that crossed a threshold, so a caller can log or display why
/// a translation was rejected instead of only seeing a boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StammerSignal {
    /// The translated text contains far more character elongation
    /// ("soooo...") than the source.
    Elongation {
        /// Total elongated alphanumeric characters in the translation.
        translated_score: usize,
        /// Total elongated alphanumeric characters in the source.
        source_score: usize,
    },

    /// One translated n-gram occurs far more often than any source n-gram
    /// of the same size, anywhere in the text.
    FrequentNgram {
        /// N-gram size at which the check fired.
        n: usize,
        /// The offending n-gram, tokens joined by single spaces.
        ngram: String,
        /// Occurrence count in the translation.
        count: usize,
        /// Highest occurrence count of any source n-gram at this size.
        max_source_count: usize,
    },

    /// One translated n-gram repeats back-to-back beyond what the source
    /// exhibits.
    ConsecutiveRun {
        /// N-gram size at which the check fired.
        n: usize,
        /// The offending n-gram, tokens joined by single spaces.
        ngram: String,
        /// Longest run of this n-gram in the translation.
        translated_run: usize,
        /// Longest run of any identical n-gram in the source.
        source_run: usize,
    },
}

impl StammerSignal {
    /// Short machine-friendly name of the check that fired.
    pub fn check_name(&self) -> &'static str {
        match self {
            StammerSignal::Elongation { .. } => "elongation",
            StammerSignal::FrequentNgram { .. } => "frequent-ngram",
            StammerSignal::ConsecutiveRun { .. } => "consecutive-run",
        }
    }
}

impl std::fmt::Display for StammerSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StammerSignal::Elongation {
                translated_score,
                source_score,
            } => write!(
                f,
                "elongation: translated score {translated_score}, source score {source_score}"
            ),
            StammerSignal::FrequentNgram {
                n,
                ngram,
                count,
                max_source_count,
            } => write!(
                f,
                "frequent {n}-gram \"{ngram}\": {count} occurrences, source max {max_source_count}"
            ),
            StammerSignal::ConsecutiveRun {
                n,
                ngram,
                translated_run,
                source_run,
            } => write!(
                f,
                "consecutive {n}-gram run \"{ngram}\": {translated_run} in a row, source max {source_run}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_names() {
        let sig = StammerSignal::Elongation {
            translated_score: 170,
            source_score: 8,
        };
        assert_eq!(sig.check_name(), "elongation");

        let sig = StammerSignal::FrequentNgram {
            n: 3,
            ngram: "is really the".to_string(),
            count: 4,
            max_source_count: 1,
        };
        assert_eq!(sig.check_name(), "frequent-ngram");

        let sig = StammerSignal::ConsecutiveRun {
            n: 1,
            ngram: "station".to_string(),
            translated_run: 4,
            source_run: 1,
        };
        assert_eq!(sig.check_name(), "consecutive-run");
    }

    #[test]
    fn display_consecutive_run() {
        let sig = StammerSignal::ConsecutiveRun {
            n: 1,
            ngram: "bye".to_string(),
            translated_run: 11,
            source_run: 2,
        };
        let text = sig.to_string();
        assert!(text.contains("\"bye\""));
        assert!(text.contains("11 in a row"));
    }

    #[test]
    fn display_elongation() {
        let sig = StammerSignal::Elongation {
            translated_score: 170,
            source_score: 8,
        };
        assert_eq!(
            sig.to_string(),
            "elongation: translated score 170, source score 8"
        );
    }
}

// StammerDetector: the decision policy tying the checks together.
//
// Two independent detectors are composed by short-circuit OR: the elongation
// check runs first and, if it fires, the n-gram loop is skipped entirely.
// That ordering is part of the contract, not an optimization. The n-gram
// loop then tries each size in ascending order and the first check that
// fires wins.

use stammer_core::{DetectorConfig, StammerSignal};

use crate::elongation::elongation_score;
use crate::repetition::check_ngram_size;
use crate::tokenizer::{ngrams, tokenize};

/// Stammering detector for machine-translation output.
///
/// Stateless apart from its immutable configuration; one instance can be
/// shared freely across threads and calls.
#[derive(Debug, Clone, Default)]
pub struct StammerDetector {
    config: DetectorConfig,
}

impl StammerDetector {
    /// Create a detector with the given thresholds.
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Access the active configuration.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Check a translation against its source sentence.
    ///
    /// Returns `true` when the translation stammers: it contains character
    /// elongation or word/phrase repetition that the source does not
    /// justify. Total for all string inputs; empty or single-token text
    /// simply produces no flags.
    pub fn detect(&self, source: &str, translated: &str) -> bool {
        self.analyze(source, translated).is_some()
    }

    /// Like [`detect`](Self::detect), but returns the evidence for a
    /// positive verdict: the first signal that fired.
    pub fn analyze(&self, source: &str, translated: &str) -> Option<StammerSignal> {
        if let Some(signal) = self.check_elongation(source, translated) {
            return Some(signal);
        }
        self.check_phrase_repetition(source, translated)
    }

    /// Elongation check: the translated score must clear an absolute floor
    /// and exceed the source score by the configured ratio. The floor keeps
    /// small natural elongations ("sooo") from flagging; the ratio keeps
    /// translations of already-elongated sources from flagging.
    fn check_elongation(&self, source: &str, translated: &str) -> Option<StammerSignal> {
        let translated_score = elongation_score(translated);
        if translated_score <= self.config.elongation_floor {
            return None;
        }
        let source_score = elongation_score(source);
        if translated_score > source_score * self.config.elongation_ratio {
            return Some(StammerSignal::Elongation {
                translated_score,
                source_score,
            });
        }
        None
    }

    /// Phrase-repetition check across n-gram sizes 1..max.
    ///
    /// The upper bound is `min(max_ngram_size + 1, translated token count)`,
    /// exclusive, so the largest size actually tested is one below the
    /// translated token count: a repetition spanning the whole sentence is
    /// never examined at `n == len(tokens)`.
    fn check_phrase_repetition(&self, source: &str, translated: &str) -> Option<StammerSignal> {
        let translated_tokens = tokenize(translated);
        let source_tokens = tokenize(source);

        let upper = (self.config.max_ngram_size + 1).min(translated_tokens.len());
        for n in 1..upper {
            let translated_ngrams = ngrams(&translated_tokens, n);
            let source_ngrams = ngrams(&source_tokens, n);
            if let Some(signal) =
                check_ngram_size(&translated_ngrams, &source_ngrams, n, &self.config)
            {
                return Some(signal);
            }
        }
        None
    }
}

/// Check a translation with the default thresholds.
///
/// Equivalent to `StammerDetector::default().detect(source, translated)`.
pub fn detect_stammering(source: &str, translated: &str) -> bool {
    StammerDetector::default().detect(source, translated)
}

// ============================================================================
// Tests
// ============================================================================

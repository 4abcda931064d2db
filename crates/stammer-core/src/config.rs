// Detector configuration: the tunable thresholds of the decision policy.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Default threshold values
// ---------------------------------------------------------------------------

/// Minimum occurrence count (or consecutive-window size) before a repeated
/// n-gram is considered at all.
pub const DEFAULT_MIN_REPETITIONS: usize = 3;

/// Largest n-gram size examined by the phrase-repetition check.
pub const DEFAULT_MAX_NGRAM_SIZE: usize = 5;

/// Absolute floor for the translated elongation score. Scores at or below
/// this never flag, so small natural elongations ("soo") pass.
pub const DEFAULT_ELONGATION_FLOOR: usize = 40;

/// The translated elongation score must exceed the source score times this
/// ratio before the elongation check fires.
pub const DEFAULT_ELONGATION_RATIO: usize = 3;

/// A translated n-gram's frequency must exceed the best source frequency
/// times this ratio before the frequency check fires.
pub const DEFAULT_FREQUENCY_RATIO: f64 = 1.5;

/// When the source itself contains a consecutive repetition pattern, the
/// translated run must exceed the source run times this ratio.
pub const DEFAULT_CONSECUTIVE_RATIO: usize = 2;

/// Configuration for the stammering detector.
///
/// All thresholds of the decision policy are named fields so the policy can
/// be audited and tested in isolation from the mechanism. The defaults are
/// the production values; construct with `DetectorConfig::default()` and
/// override fields as needed:
///
/// ```
/// use stammer_core::DetectorConfig;
///
/// let config = DetectorConfig {
///     elongation_floor: 20,
///     ..Default::default()
/// };
/// assert_eq!(config.max_ngram_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Minimum repetition count before a repeated n-gram qualifies.
    pub min_repetitions: usize,

    /// Largest n-gram size examined.
    pub max_ngram_size: usize,

    /// Absolute floor for the translated elongation score.
    pub elongation_floor: usize,

    /// Source-relative multiplier for the elongation check.
    pub elongation_ratio: usize,

    /// Source-relative multiplier for the frequency check.
    pub frequency_ratio: f64,

    /// Source-relative multiplier for the consecutive-run check.
    pub consecutive_ratio: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            min_repetitions: DEFAULT_MIN_REPETITIONS,
            max_ngram_size: DEFAULT_MAX_NGRAM_SIZE,
            elongation_floor: DEFAULT_ELONGATION_FLOOR,
            elongation_ratio: DEFAULT_ELONGATION_RATIO,
            frequency_ratio: DEFAULT_FREQUENCY_RATIO,
            consecutive_ratio: DEFAULT_CONSECUTIVE_RATIO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = DetectorConfig::default();
        assert_eq!(config.min_repetitions, 3);
        assert_eq!(config.max_ngram_size, 5);
        assert_eq!(config.elongation_floor, 40);
        assert_eq!(config.elongation_ratio, 3);
        assert_eq!(config.frequency_ratio, 1.5);
        assert_eq!(config.consecutive_ratio, 2);
    }

    #[test]
    fn fields_are_overridable() {
        let config = DetectorConfig {
            min_repetitions: 2,
            ..Default::default()
        };
        assert_eq!(config.min_repetitions, 2);
        assert_eq!(config.max_ngram_size, DEFAULT_MAX_NGRAM_SIZE);
    }

    #[test]
    fn clone_is_equal() {
        let config = DetectorConfig::default();
        assert_eq!(config, config.clone());
    }
}

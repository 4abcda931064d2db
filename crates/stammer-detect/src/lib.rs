// stammer-detect: stammering detection for machine-translation output.
//
// "Stammering" is unnatural repetition in a translated sentence that has no
// counterpart in the source sentence: repeated words or phrases ("the
// station station station") or excessive character elongation ("soooo...").
// The detector compares the translation against the source so that genuine
// repetition carried over from the source is not flagged.
//
// The public entry points are `StammerDetector` (configurable) and the
// `detect_stammering` convenience function (default thresholds):
//
//   use stammer_detect::detect_stammering;
//
//   assert!(detect_stammering(
//       "Dove si trova la stazione?",
//       "Where is the station station station station?",
//   ));
//   assert!(!detect_stammering(
//       "Sono molto molto molto molto felice",
//       "I am very happy",
//   ));

pub mod detector;
pub mod elongation;
pub mod repetition;
pub mod request;
pub mod tokenizer;

pub use detector::{StammerDetector, detect_stammering};
pub use request::{RequestError, StammerRequest, StammerResponse, handle_request};
pub use stammer_core::{DetectorConfig, StammerSignal};

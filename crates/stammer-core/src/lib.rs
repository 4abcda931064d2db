// stammer-core: shared value types for the stammering detector.
//
// This crate holds the plain data types used across the workspace: the
// detector configuration (all tunable thresholds) and the signal type that
// describes which check fired and with what evidence. No detection logic
// lives here.

pub mod config;
pub mod signal;

pub use config::DetectorConfig;
pub use signal::StammerSignal;

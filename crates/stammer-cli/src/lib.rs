// stammer-cli: shared utilities for CLI tools.
//
// Both tools read sentence pairs from stdin, one per line, in the form
//
//   source<TAB>translated
//
// and write one result per pair to stdout. Helpers here handle pair
// parsing, help detection, and fatal errors.

use std::process;

/// A parsed input line: source sentence and its translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub source: String,
    pub translated: String,
}

/// Failure to parse one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line has no TAB separator.
    MissingSeparator,
    /// The source or translated field is empty.
    EmptyField(&'static str),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MissingSeparator => {
                write!(f, "expected `source<TAB>translated`")
            }
            ParseError::EmptyField(name) => write!(f, "empty {name} field"),
        }
    }
}

/// Parse a `source<TAB>translated` line.
///
/// Leading/trailing whitespace around each field is trimmed; empty fields
/// are rejected so the detector's boundary contract (non-empty text) holds.
pub fn parse_pair(line: &str) -> Result<Pair, ParseError> {
    let Some((source, translated)) = line.split_once('\t') else {
        return Err(ParseError::MissingSeparator);
    };
    let source = source.trim();
    let translated = translated.trim();
    if source.is_empty() {
        return Err(ParseError::EmptyField("source"));
    }
    if translated.is_empty() {
        return Err(ParseError::EmptyField("translated"));
    }
    Ok(Pair {
        source: source.to_string(),
        translated: translated.to_string(),
    })
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

// ============================================================================
// Tests
// ============================================================================

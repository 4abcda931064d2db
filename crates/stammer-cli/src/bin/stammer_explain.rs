// stammer-explain: pretty-print stammering detection evidence.
//
// Reads `source<TAB>translated` pairs from stdin and, for each flagged
// translation, prints the check that fired and its measurements in a
// human-readable, diff-able format. Clean pairs print nothing unless
// --all is given.
//
// Usage:
//   stammer-explain [OPTIONS]
//
// Options:
//   --all         Also print a line for clean pairs
//   -h, --help    Print help

use std::io::{self, BufRead, Write};

use stammer_core::StammerSignal;
use stammer_detect::StammerDetector;

fn print_signal(
    pair: &stammer_cli::Pair,
    signal: &StammerSignal,
    out: &mut io::BufWriter<io::StdoutLock<'_>>,
) {
    let _ = writeln!(out, "T: {}", pair.translated);
    let _ = writeln!(out, "F: {}", pair.source);
    let _ = writeln!(out, "E: {signal}");

    match signal {
        StammerSignal::Elongation {
            translated_score,
            source_score,
        } => {
            let _ = writeln!(
                out,
                "E: score {translated_score} exceeds floor and {source_score} * ratio"
            );
        }
        StammerSignal::FrequentNgram { ngram, .. }
        | StammerSignal::ConsecutiveRun { ngram, .. } => {
            let _ = writeln!(out, "E: \"{ngram}\"");
        }
    }
    let _ = writeln!(out, "=================================================");
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if stammer_cli::wants_help(&args) {
        println!("stammer-explain: Pretty-print stammering detection evidence.");
        println!();
        println!("Usage: stammer-explain [OPTIONS]");
        println!();
        println!("Reads source<TAB>translated pairs (one per line) and prints");
        println!("the check that fired for each flagged translation.");
        println!();
        println!("Options:");
        println!("  --all         Also print a line for clean pairs");
        println!("  -h, --help    Print this help");
        return;
    }

    let show_all = args.iter().any(|a| a == "--all");

    let detector = StammerDetector::default();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for (lineno, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let pair = match stammer_cli::parse_pair(&line) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("line {}: {e}", lineno + 1);
                continue;
            }
        };

        match detector.analyze(&pair.source, &pair.translated) {
            Some(signal) => print_signal(&pair, &signal, &mut out),
            None if show_all => {
                let _ = writeln!(out, "O: {}", pair.translated);
            }
            None => {}
        }
    }
}

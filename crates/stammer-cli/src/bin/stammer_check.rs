// stammer-check: flag stammering translations from stdin.
//
// Reads `source<TAB>translated` pairs from stdin (one per line) and reports
// whether each translation stammers:
//   S: translated    (stammering detected)
//   O: translated    (ok)
//
// Usage:
//   stammer-check [OPTIONS]
//
// Options:
//   -j, --json    Print one JSON object per pair instead of S:/O: lines
//   -h, --help    Print help

use std::io::{self, BufRead, Write};

use stammer_detect::{StammerDetector, StammerResponse};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if stammer_cli::wants_help(&args) {
        println!("stammer-check: Flag stammering translations from stdin.");
        println!();
        println!("Usage: stammer-check [OPTIONS]");
        println!();
        println!("Reads source<TAB>translated pairs (one per line). Prints:");
        println!("  S: translated    (stammering detected)");
        println!("  O: translated    (ok)");
        println!();
        println!("Options:");
        println!("  -j, --json    Print one JSON object per pair");
        println!("  -h, --help    Print this help");
        return;
    }

    let json_output = args.iter().any(|a| a == "-j" || a == "--json");

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

        let has_stammer = detector.detect(&pair.source, &pair.translated);

        if json_output {
            let response = StammerResponse { has_stammer };
            match serde_json::to_string(&response) {
                Ok(json) => {
                    let _ = writeln!(out, "{json}");
                }
                Err(e) => eprintln!("line {}: {e}", lineno + 1),
            }
        } else if has_stammer {
            let _ = writeln!(out, "S: {}", pair.translated);
        } else {
            let _ = writeln!(out, "O: {}", pair.translated);
        }
    }
}

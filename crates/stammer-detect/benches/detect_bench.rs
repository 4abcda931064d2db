// Criterion benchmarks for stammer-detect.
//
// Run:
//   cargo bench -p stammer-detect

use criterion::{Criterion, criterion_group, criterion_main};

use stammer_detect::StammerDetector;

/// Representative source/translation pairs: clean, repetition-flagged, and
/// elongation-flagged.
fn pairs() -> Vec<(String, String)> {
    let long_elongation = format!("I like Italian food s{}", "o".repeat(170));
    vec![
        (
            "Vorrei comprare un biglietto".into(),
            "I would like to buy a ticket".into(),
        ),
        (
            "Dove si trova la stazione?".into(),
            "Where is the station station station station?".into(),
        ),
        (
            "Questo è veramente l'ultimo test".into(),
            "This is really the is really the is really the is really the last test".into(),
        ),
        (
            "Mi piace moooooooolto il cibo italiano".into(),
            long_elongation,
        ),
    ]
}

/// Detect over the representative pairs.
fn bench_detect_pairs(c: &mut Criterion) {
    let detector = StammerDetector::default();
    let pairs = pairs();

    c.bench_function("detect_pairs", |b| {
        b.iter(|| {
            for (source, translated) in &pairs {
                std::hint::black_box(detector.detect(source, translated));
            }
        });
    });
}

/// Worst case for the n-gram loop: a long clean sentence where every size
/// must be scanned without any check firing.
fn bench_detect_long_clean(c: &mut Criterion) {
    let detector = StammerDetector::default();
    let source: String = (0..200).map(|i| format!("parola{i} ")).collect();
    let translated: String = (0..200).map(|i| format!("word{i} ")).collect();

    c.bench_function("detect_long_clean", |b| {
        b.iter(|| std::hint::black_box(detector.detect(&source, &translated)));
    });
}

criterion_group!(benches, bench_detect_pairs, bench_detect_long_clean);
criterion_main!(benches);

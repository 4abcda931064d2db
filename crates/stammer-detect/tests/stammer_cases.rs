//! End-to-end detection cases: realistic source/translation pairs with the
//! expected verdict, run against the default thresholds.

use stammer_detect::{StammerDetector, detect_stammering};

/// (source, translated, expected verdict)
fn cases() -> Vec<(String, String, bool)> {
    let long_elongation = format!("I like Italian food s{}", "o".repeat(170));
    vec![
        (
            "Vorrei comprare un biglietto".into(),
            "I would like to buy a ticket".into(),
            false,
        ),
        ("Amo la musica".into(), "I love music".into(), false),
        (
            "Dove si trova la stazione?".into(),
            "Where is the station station station station?".into(),
            true,
        ),
        (
            "Sono molto molto molto molto felice".into(),
            "I am very happy".into(),
            false,
        ),
        ("Posso aiutarti?".into(), "Can I help you??".into(), false),
        ("Sono affamato".into(), "I'm hungry".into(), false),
        ("Sono così stanco".into(), "I'm sooo tired".into(), false),
        ("ciao".into(), "bye bye".into(), false),
        (
            "ciao ciao ciao ciao".into(),
            "bye bye bye bye".into(),
            false,
        ),
        (
            "ciao ciao".into(),
            "bye bye bye bye bye bye bye bye bye bye bye".into(),
            true,
        ),
        (
            "Questo è veramente l'ultimo test".into(),
            "This is really the is really the is really the is really the last test".into(),
            true,
        ),
        (
            "Mi piace moooooooolto il cibo italiano".into(),
            long_elongation,
            true,
        ),
    ]
}

#[test]
fn full_case_table() {
    for (i, (source, translated, expected)) in cases().iter().enumerate() {
        let verdict = detect_stammering(source, translated);
        assert_eq!(
            verdict, *expected,
            "case {} failed: source={source:?} translated={translated:?}",
            i + 1
        );
    }
}

#[test]
fn flagged_cases_carry_a_signal() {
    let detector = StammerDetector::default();
    for (source, translated, expected) in cases() {
        let signal = detector.analyze(&source, &translated);
        assert_eq!(
            signal.is_some(),
            expected,
            "analyze/detect disagree: source={source:?}"
        );
    }
}

#[test]
fn verdicts_are_stable_across_calls() {
    let detector = StammerDetector::default();
    for (source, translated, _) in cases() {
        let first = detector.analyze(&source, &translated);
        let second = detector.analyze(&source, &translated);
        assert_eq!(first, second);
    }
}

#[test]
fn uppercased_inputs_keep_their_verdicts() {
    for (source, translated, expected) in cases() {
        assert_eq!(
            detect_stammering(&source.to_uppercase(), &translated.to_uppercase()),
            expected,
            "uppercased verdict changed: source={source:?}"
        );
    }
}

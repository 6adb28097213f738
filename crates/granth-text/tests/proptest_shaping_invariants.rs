//! Property-based invariant tests for the shaping pipelines and the
//! activation gate.
//!
//! Invariants checked for arbitrary inputs:
//!
//! 1. Neither pipeline ever panics, whatever the code units.
//! 2. Whitespace separators survive both pipelines verbatim.
//! 3. Text with no script-relevant code units passes through unchanged.
//! 4. Well-formed logical cluster text round-trips losslessly.
//! 5. The activation gate is monotonic and identity while inactive.

use std::borrow::Cow;

use granth_text::pipeline::{is_separator, restore_text, shape_text};
use granth_text::script::{DocumentScripts, Script};

use proptest::prelude::*;

// ── Strategies ──────────────────────────────────────────────────────────

fn arb_script() -> impl Strategy<Value = Script> {
    prop_oneof![Just(Script::Devanagari), Just(Script::Bangla)]
}

/// Consonants that carry no positional special-casing of their own.
fn arb_plain_consonant(script: Script) -> BoxedStrategy<u16> {
    match script {
        Script::Devanagari => prop_oneof![
            Just(0x0915u16), // ka
            Just(0x0917),    // ga
            Just(0x0924),    // ta
            Just(0x092A),    // pa
            Just(0x092E),    // ma
            Just(0x0938),    // sa
        ]
        .boxed(),
        Script::Bangla => prop_oneof![
            Just(0x0995u16), // ka
            Just(0x0997),    // ga
            Just(0x09A4),    // ta
            Just(0x09AA),    // pa
            Just(0x09AE),    // ma
            Just(0x09B8),    // sa
        ]
        .boxed(),
    }
}

/// Vowel signs no relocation pass touches.
fn arb_inert_vowel(script: Script) -> BoxedStrategy<u16> {
    match script {
        Script::Devanagari => prop_oneof![
            Just(0x093Eu16), // aa
            Just(0x0941),    // u
            Just(0x0942),    // uu
        ]
        .boxed(),
        Script::Bangla => prop_oneof![
            Just(0x09BEu16), // aa
            Just(0x09C1),    // u
            Just(0x09C2),    // uu
        ]
        .boxed(),
    }
}

/// A logical consonant cluster: 1..=3 consonants joined by viramas with an
/// optional trailing vowel sign.
fn arb_cluster(script: Script) -> BoxedStrategy<Vec<u16>> {
    let virama = if script == Script::Devanagari {
        0x094Du16
    } else {
        0x09CD
    };
    (
        prop::collection::vec(arb_plain_consonant(script), 1..=3),
        prop::option::of(arb_inert_vowel(script)),
    )
        .prop_map(move |(consonants, vowel)| {
            let mut cluster = Vec::new();
            for (i, c) in consonants.iter().enumerate() {
                if i > 0 {
                    cluster.push(virama);
                }
                cluster.push(*c);
            }
            cluster.extend(vowel);
            cluster
        })
        .boxed()
}

/// A word of 1..=4 logical clusters.
fn arb_logical_word(script: Script) -> BoxedStrategy<Vec<u16>> {
    prop::collection::vec(arb_cluster(script), 1..=4)
        .prop_map(|clusters| clusters.concat())
        .boxed()
}

/// Words joined by separator runs.
fn arb_logical_text(script: Script) -> BoxedStrategy<Vec<u16>> {
    let sep = prop_oneof![
        Just(0x0020u16),
        Just(0x0009),
        Just(0x000A),
        Just(0x000D)
    ];
    (
        prop::collection::vec(arb_logical_word(script), 1..=4),
        prop::collection::vec(prop::collection::vec(sep, 1..=2), 0..=4),
    )
        .prop_map(|(words, seps)| {
            let mut text = Vec::new();
            for (i, word) in words.iter().enumerate() {
                if i > 0 {
                    match seps.get(i - 1) {
                        Some(run) => text.extend_from_slice(run),
                        None => text.push(0x0020),
                    }
                }
                text.extend_from_slice(word);
            }
            text
        })
        .boxed()
}

fn separators_of(text: &[u16]) -> Vec<u16> {
    text.iter().copied().filter(|&c| is_separator(c)).collect()
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn shape_never_panics(script in arb_script(), text in prop::collection::vec(any::<u16>(), 0..128)) {
        let _ = shape_text(script, &text);
    }

    #[test]
    fn restore_never_panics(script in arb_script(), text in prop::collection::vec(any::<u16>(), 0..128)) {
        let _ = restore_text(script, &text);
    }

    #[test]
    fn separators_survive_shaping(script in arb_script(), text in prop::collection::vec(any::<u16>(), 0..128)) {
        let shaped = shape_text(script, &text);
        prop_assert_eq!(separators_of(&text), separators_of(&shaped));
        let restored = restore_text(script, &shaped);
        prop_assert_eq!(separators_of(&text), separators_of(&restored));
    }

    #[test]
    fn ascii_is_untouched(script in arb_script(), text in "[ -~]{0,64}") {
        let units: Vec<u16> = text.encode_utf16().collect();
        let shaped = shape_text(script, &units);
        prop_assert_eq!(shaped.as_slice(), units.as_slice());
        let restored = restore_text(script, &units);
        prop_assert_eq!(restored.as_slice(), units.as_slice());
    }

    #[test]
    fn devanagari_logical_text_roundtrips(text in arb_logical_text(Script::Devanagari)) {
        let shaped = shape_text(Script::Devanagari, &text);
        prop_assert_eq!(restore_text(Script::Devanagari, &shaped), text);
    }

    #[test]
    fn bangla_logical_text_roundtrips(text in arb_logical_text(Script::Bangla)) {
        let shaped = shape_text(Script::Bangla, &text);
        prop_assert_eq!(restore_text(Script::Bangla, &shaped), text);
    }

    #[test]
    fn inactive_gate_is_identity(script in arb_script(), text in prop::collection::vec(any::<u16>(), 0..64)) {
        let doc = DocumentScripts::new();
        prop_assert!(matches!(doc.shape(script, &text), Cow::Borrowed(_)));
        prop_assert!(matches!(doc.restore(script, &text), Cow::Borrowed(_)));
    }

    #[test]
    fn activation_is_monotonic(probes in prop::collection::vec(prop::collection::vec(any::<u16>(), 0..32), 1..8)) {
        let mut doc = DocumentScripts::new();
        doc.detection_stride = 1;
        for script in Script::ALL {
            let mut seen = false;
            for probe in &probes {
                let active = doc.ensure_active(script, probe);
                prop_assert!(!seen || active);
                seen = seen || active;
            }
        }
    }
}

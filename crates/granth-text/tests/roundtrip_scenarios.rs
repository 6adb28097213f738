//! End-to-end scenarios through the public gate: activation, forward
//! shaping, restoration, and table self-consistency.
//!
//! Each scenario drives [`DocumentScripts`] the way the engine does — probe,
//! shape for the renderer, restore for extraction — and asserts the restored
//! text equals the logical input code unit for code unit.

use std::borrow::Cow;

use granth_text::ligature::Ligature;
use granth_text::pipeline::{restore_text, shape_text};
use granth_text::script::{DocumentScripts, Script};
use granth_text::tables;

fn u(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

fn roundtrip(script: Script, input: &[u16]) -> Vec<u16> {
    restore_text(script, &shape_text(script, input))
}

// ── Scenario: conjunct collapse ─────────────────────────────────────────

#[test]
fn devanagari_kssa_collapses_and_restores() {
    // ka + virama + ssa is a single akhand cluster.
    let input = [0x0915, 0x094D, 0x0937];
    let shaped = shape_text(Script::Devanagari, &input);
    assert_eq!(shaped, vec![0xE02C]);
    assert_eq!(restore_text(Script::Devanagari, &shaped), input.to_vec());
}

// ── Scenario: vowel reordering ──────────────────────────────────────────

#[test]
fn devanagari_vowel_i_reorders_and_restores() {
    // ki: the vowel sign renders before the consonant.
    let input = [0x0915, 0x093F];
    let shaped = shape_text(Script::Devanagari, &input);
    assert_eq!(shaped, vec![0x093F, 0x0915]);
    assert_eq!(restore_text(Script::Devanagari, &shaped), input.to_vec());
}

// ── Scenario: split vowel decomposition ─────────────────────────────────

#[test]
fn bangla_o_vowel_splits_and_restores() {
    // ko: O renders as E before the base plus AA after it.
    let input = [0x0995, 0x09CB];
    let shaped = shape_text(Script::Bangla, &input);
    assert_eq!(shaped, vec![0x09C7, 0x0995, 0x09BE]);
    assert_eq!(restore_text(Script::Bangla, &shaped), input.to_vec());
}

// ── Scenario: position-dependent substitution ───────────────────────────

#[test]
fn bangla_ya_postform_depends_on_left_context() {
    // ka + virama + ya takes the ya-postform; ra + virama + ya must not
    // (it is a reph cluster), though both restore losslessly.
    let ka = [0x0995, 0x09CD, 0x09AF];
    let shaped_ka = shape_text(Script::Bangla, &ka);
    assert_eq!(shaped_ka, vec![0x0995, 0xE272]);
    assert_eq!(restore_text(Script::Bangla, &shaped_ka), ka.to_vec());

    let ra = [0x09B0, 0x09CD, 0x09AF];
    let shaped_ra = shape_text(Script::Bangla, &ra);
    assert!(!shaped_ra.contains(&0xE272));
    assert_eq!(restore_text(Script::Bangla, &shaped_ra), ra.to_vec());
}

// ── Mixed text and boundaries ───────────────────────────────────────────

#[test]
fn multi_word_text_roundtrips_with_whitespace_intact() {
    let input = u("क्षमा  कीजिए\tनमस्ते\n");
    assert_eq!(roundtrip(Script::Devanagari, &input), input);
}

#[test]
fn empty_and_single_unit_inputs_are_identity() {
    assert!(shape_text(Script::Devanagari, &[]).is_empty());
    assert!(restore_text(Script::Bangla, &[]).is_empty());
    assert_eq!(shape_text(Script::Devanagari, &[0x0915]), vec![0x0915]);
    assert_eq!(shape_text(Script::Bangla, &[0x0995]), vec![0x0995]);
}

#[test]
fn non_brahmic_text_passes_through_both_pipelines() {
    let input = u("plain latin text, 123!");
    assert_eq!(shape_text(Script::Devanagari, &input), input);
    assert_eq!(roundtrip(Script::Bangla, &input), input);
}

// ── Activation gate ─────────────────────────────────────────────────────

#[test]
fn gate_is_identity_until_probe_sees_the_script() {
    let mut doc = DocumentScripts::new();
    let text = u("क्ष");

    // Not yet probed: borrowed identity even for script text.
    assert!(matches!(doc.shape(Script::Devanagari, &text), Cow::Borrowed(_)));

    assert!(doc.ensure_active(Script::Devanagari, &text));
    let shaped = doc.shape(Script::Devanagari, &text);
    assert_eq!(shaped.as_ref(), &[0xE02C]);
    assert_eq!(doc.restore_all(&shaped).as_ref(), text.as_slice());
}

#[test]
fn activation_never_reverts_within_a_document() {
    let mut doc = DocumentScripts::new();
    assert!(doc.ensure_active(Script::Bangla, &u("বই")));
    for probe in ["ascii", "", "more ascii"] {
        assert!(doc.ensure_active(Script::Bangla, &u(probe)));
        assert!(doc.is_active(Script::Bangla));
    }
}

#[test]
fn restore_all_applies_only_active_scripts() {
    let mut doc = DocumentScripts::new();
    doc.ensure_active(Script::Devanagari, &u("क"));
    // A Bangla PUA code stays opaque while Bangla is inactive.
    let mixed = vec![0xE02C, 0x0020, 0xE272];
    let restored = doc.restore_all(&mixed);
    assert_eq!(
        restored.as_ref(),
        &[0x0915, 0x094D, 0x0937, 0x0020, 0xE272]
    );
}

// ── Table self-consistency ──────────────────────────────────────────────

#[test]
fn every_forward_row_reverse_maps_to_matching_components() {
    // The reverse map may resolve a duplicated component sequence to a
    // later row, but whatever code it yields must expand to exactly that
    // sequence.
    for script in Script::ALL {
        let t = tables::tables(script);
        for (_, def) in t.forward_rows() {
            let code = t
                .reverse_code(&def.key())
                .expect("every forward row has a reverse entry");
            let resolved = t.def(code).expect("reverse entries point at rows");
            assert_eq!(resolved.key(), def.key(), "script {script:?} code {code:#06X}");
        }
    }
}

#[test]
fn reverse_entries_stay_within_window_bounds() {
    for script in Script::ALL {
        let t = tables::tables(script);
        for (code, def) in t.forward_rows() {
            assert!(
                (2..=script.max_lig()).contains(&def.len()),
                "script {script:?} code {code:#06X} has {} components",
                def.len()
            );
        }
    }
}

#[test]
fn bangla_reph_and_full_forms_share_components() {
    let t = tables::tables(Script::Bangla);
    for (reph, full) in [(0xE226u16, 0xE266u16), (0xE225, 0xE24C)] {
        let r = t.def(reph).unwrap();
        let f = t.def(full).unwrap();
        assert_eq!(r.key(), f.key());
    }
}

#[test]
fn longer_words_roundtrip_losslessly() {
    assert_eq!(roundtrip(Script::Devanagari, &u("क्षत्रिय")), u("क्षत्रिय"));
    assert_eq!(roundtrip(Script::Bangla, &u("কর্ম")), u("কর্ম"));
}

#[test]
fn window_key_matches_shaping_lookup() {
    let t = tables::tables(Script::Devanagari);
    let window = [0x0915u16, 0x094D, 0x0937];
    assert_eq!(
        t.lookup_window(&window),
        t.reverse_code(&Ligature::from_window(&window))
    );
}

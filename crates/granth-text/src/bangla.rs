#![forbid(unsafe_code)]

//! Bangla forward shaping and restoration passes.
//!
//! Forward order per word: ligature substitution, then reph relocation,
//! E-vowel relocation, I relocation, AI relocation, O decomposition, OU
//! decomposition, the ra+i+ta transposition, and finally a ZWNJ→ZWSP remap
//! so the glyph layer does not treat the joiner as a shaping hint. Restore
//! applies the inverses in the exact opposite order and then expands every
//! Bangla PUA code.
//!
//! Three substitution rules are position-sensitive:
//!
//! - `ra + virama` takes the **reph** form mid-word (it renders above the
//!   following base and trades places with it) but the **full** form when
//!   the window reaches the end of the word.
//! - The plain ya-postform window is suppressed right after ra, so a
//!   `ra + virama + ya` run becomes reph-over-ya instead of a false
//!   ya-postform.
//! - A match whose descriptor ends in the virama is deferred when a
//!   consonant follows; the longer cluster starting at the same position
//!   owns that text.

use crate::ligature::Ligature;
use crate::script::Script;
use crate::tables;

/// Bangla vowel sign I.
const VOWEL_I: u16 = 0x09BF;
/// Bangla vowel sign E.
const VOWEL_E: u16 = 0x09C7;
/// Bangla vowel sign AI.
const VOWEL_AI: u16 = 0x09C8;
/// Bangla vowel sign O; decomposes to E + AA during shaping.
const VOWEL_O: u16 = 0x09CB;
/// Bangla vowel sign OU; decomposes to E + the AU length mark.
const VOWEL_OU: u16 = 0x09CC;
/// Bangla vowel sign AA, the inserted second half of a decomposed O.
const VOWEL_AA: u16 = 0x09BE;
/// Bangla AU length mark, the inserted second half of a decomposed OU.
const AU_LENGTH_MARK: u16 = 0x09D7;

/// Reph form of `ra with middle diagonal + virama`.
const REPH_RA_MIDDLE: u16 = 0xE225;
/// Reph form of `ra + virama`.
const REPH_RA: u16 = 0xE226;
/// Full (word-final) form of `ra with middle diagonal + virama`.
const FULL_RA_MIDDLE: u16 = 0xE24C;
/// Full (word-final) form of `ra + virama`.
const FULL_RA: u16 = 0xE266;
/// Explicit ya-postform (virama + ZWJ + ya).
const YA_POST_EXPLICIT: u16 = 0xE271;
/// Plain ya-postform (virama + ya); suppressed right after ra.
const YA_POST: u16 = 0xE272;
/// Ya-postform with the AA sign attached.
const YA_POST_AA: u16 = 0xE273;
/// The `i + ssa + virama + tta` cluster; behaves like a postform for the
/// vowel relocation passes.
const I_SSA_TTA: u16 = 0xE4EA;

const ZWNJ: u16 = 0x200C;
const ZWSP: u16 = 0x200B;

/// Reph or full form of `ra + virama`.
#[inline]
fn is_ra_virama_form(ch: u16) -> bool {
    matches!(ch, REPH_RA_MIDDLE | REPH_RA | FULL_RA_MIDDLE | FULL_RA)
}

/// Forms the vowel relocation passes treat as part of the preceding base:
/// rephs, ya-postforms, and the i+ssa+virama+tta cluster.
#[inline]
fn is_postbase_form(ch: u16) -> bool {
    matches!(
        ch,
        REPH_RA_MIDDLE | REPH_RA | I_SSA_TTA | YA_POST_EXPLICIT | YA_POST | YA_POST_AA
    )
}

/// Ya-postforms plus the mid-word rephs; the E/O/OU passes step across
/// exactly these.
#[inline]
fn is_vowel_carrier(ch: u16) -> bool {
    matches!(
        ch,
        YA_POST_EXPLICIT | YA_POST | YA_POST_AA | REPH_RA_MIDDLE | REPH_RA
    )
}

/// Bangla consonant, including the collapsed nukta letters.
#[inline]
fn is_consonant(ch: u16) -> bool {
    matches!(ch, 0x0995..=0x09B9 | 0xE204..=0xE206)
}

#[inline]
fn collapse(word: &mut Vec<u16>, start: usize, len: usize, rep: u16) {
    word.splice(start..start + len, std::iter::once(rep));
}

// ---------------------------------------------------------------------------
// Forward
// ---------------------------------------------------------------------------

/// Shape one whitespace-free word in place.
pub(crate) fn shape_word(word: &mut Vec<u16>) {
    if word.len() < 2 {
        return;
    }
    substitute_ligatures(word);
    relocate_reph(word);
    relocate_vowel_e(word);
    relocate_vowel_i(word);
    relocate_vowel_ai(word);
    decompose_vowel_o(word);
    decompose_vowel_ou(word);
    transpose_ra_i_ta(word);
    remap_zwnj(word);
}

fn substitute_ligatures(word: &mut Vec<u16>) {
    let t = tables::tables(Script::Bangla);
    let max = Script::Bangla.max_lig().min(word.len());
    for w in (2..=max).rev() {
        let mut c = word.len() as isize - w as isize;
        while c >= 0 {
            let start = c as usize;
            let Some(window) = word.get(start..start + w) else {
                c -= 1;
                continue;
            };
            let Some(mut rep) = t.lookup_window(window) else {
                c -= 1;
                continue;
            };
            // ra + virama: full form when the window reaches the word end,
            // reph form anywhere else.
            if is_ra_virama_form(rep) {
                rep = if start + w == word.len() {
                    match rep {
                        REPH_RA => FULL_RA,
                        REPH_RA_MIDDLE => FULL_RA_MIDDLE,
                        other => other,
                    }
                } else {
                    match rep {
                        FULL_RA => REPH_RA,
                        FULL_RA_MIDDLE => REPH_RA_MIDDLE,
                        other => other,
                    }
                };
            }
            // A ya-postform right after ra is really a reph cluster.
            if rep == YA_POST
                && start > 0
                && matches!(word[start - 1], 0x09B0 | 0x09F0)
            {
                c -= 1;
                continue;
            }
            // A trailing-virama match defers to the longer cluster when a
            // consonant follows.
            if Ligature::from_window(window).bangla_trailing_virama()
                && word.get(start + w).copied().is_some_and(is_consonant)
            {
                c -= 1;
                continue;
            }
            collapse(word, start, w, rep);
            c -= w as isize - 2;
            c -= 1;
        }
    }
}

/// Move each mid-word reph one position right: it renders above the base
/// that follows it.
fn relocate_reph(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    let mut i = 0;
    while i + 1 < word.len() {
        if word[i] == REPH_RA_MIDDLE {
            word.swap(i, i + 1);
            i += 1;
        }
        if i + 1 < word.len() && word[i] == REPH_RA {
            word.swap(i, i + 1);
            i += 1;
        }
        i += 1;
    }
}

/// Move each E vowel sign left across its base (and across a postform or
/// reph sitting between the two).
fn relocate_vowel_e(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    for i in 1..word.len() {
        if word[i] != VOWEL_E {
            continue;
        }
        if i >= 2 && is_vowel_carrier(word[i - 1]) {
            word[i] = word[i - 1];
            word[i - 1] = word[i - 2];
            word[i - 2] = VOWEL_E;
        } else {
            word[i] = word[i - 1];
            word[i - 1] = VOWEL_E;
        }
    }
}

/// Move each I vowel sign left across its base, stepping over postforms and
/// an already-relocated E.
fn relocate_vowel_i(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    for i in 1..word.len() {
        if word[i] != VOWEL_I {
            continue;
        }
        if i >= 2 && word[i - 2] == VOWEL_E {
            word[i] = word[i - 1];
            word[i - 1] = VOWEL_E;
            word[i - 2] = VOWEL_I;
        } else if i >= 2 && is_postbase_form(word[i - 1]) {
            word[i] = word[i - 1];
            word[i - 1] = word[i - 2];
            word[i - 2] = VOWEL_I;
        } else {
            word[i] = word[i - 1];
            word[i - 1] = VOWEL_I;
        }
    }
}

/// Move each AI vowel sign one position left.
fn relocate_vowel_ai(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    for i in 1..word.len() {
        if word[i] == VOWEL_AI {
            word[i] = word[i - 1];
            word[i - 1] = VOWEL_AI;
        }
    }
}

/// Decompose O into a relocated E plus an AA sign inserted after the base.
fn decompose_vowel_o(word: &mut Vec<u16>) {
    decompose_split_vowel(word, VOWEL_O, VOWEL_AA);
}

/// Decompose OU into a relocated E plus the AU length mark.
fn decompose_vowel_ou(word: &mut Vec<u16>) {
    decompose_split_vowel(word, VOWEL_OU, AU_LENGTH_MARK);
}

fn decompose_split_vowel(word: &mut Vec<u16>, composed: u16, trailing_mark: u16) {
    if word.len() < 2 {
        return;
    }
    let mut i = 1;
    while i < word.len() {
        if word[i] == composed {
            if i >= 2 && is_vowel_carrier(word[i - 1]) {
                word[i] = word[i - 1];
                word[i - 1] = word[i - 2];
                word[i - 2] = VOWEL_E;
                word.insert(i + 1, trailing_mark);
            } else {
                word[i] = word[i - 1];
                word[i - 1] = VOWEL_E;
                word.insert(i + 1, trailing_mark);
            }
        }
        i += 1;
    }
}

/// `ra + i + ta` renders as i + ta with a reph above the ta.
fn transpose_ra_i_ta(word: &mut [u16]) {
    if word.len() < 3 {
        return;
    }
    for i in 0..word.len() - 2 {
        if word[i] == 0x09B0 && word[i + 1] == VOWEL_I && word[i + 2] == 0x09A4 {
            word[i] = VOWEL_I;
            word[i + 1] = 0x09A4;
            word[i + 2] = REPH_RA;
        }
    }
}

/// ZWNJ would read as a joiner hint to the glyph shaper; park it as ZWSP.
fn remap_zwnj(word: &mut [u16]) {
    for ch in word.iter_mut() {
        if *ch == ZWNJ {
            *ch = ZWSP;
        }
    }
}

// ---------------------------------------------------------------------------
// Reverse
// ---------------------------------------------------------------------------

/// Restore one word of shaped text to logical order in place.
pub(crate) fn restore_word(word: &mut Vec<u16>) {
    remap_zwnj_reverse(word);
    transpose_ra_i_ta_reverse(word);
    decompose_vowel_ou_reverse(word);
    decompose_vowel_o_reverse(word);
    relocate_vowel_ai_reverse(word);
    relocate_vowel_i_reverse(word);
    relocate_vowel_e_reverse(word);
    relocate_reph_reverse(word);
    expand_ligatures(word);
}

fn remap_zwnj_reverse(word: &mut [u16]) {
    for ch in word.iter_mut() {
        if *ch == ZWSP {
            *ch = ZWNJ;
        }
    }
}

fn transpose_ra_i_ta_reverse(word: &mut [u16]) {
    if word.len() < 3 {
        return;
    }
    for i in 0..word.len() - 2 {
        if word[i] == VOWEL_I && word[i + 1] == 0x09A4 && word[i + 2] == REPH_RA {
            word[i] = 0x09B0;
            word[i + 1] = VOWEL_I;
            word[i + 2] = 0x09A4;
        }
    }
}

fn decompose_vowel_o_reverse(word: &mut Vec<u16>) {
    recompose_split_vowel(word, VOWEL_O, VOWEL_AA);
}

fn decompose_vowel_ou_reverse(word: &mut Vec<u16>) {
    recompose_split_vowel(word, VOWEL_OU, AU_LENGTH_MARK);
}

fn recompose_split_vowel(word: &mut Vec<u16>, composed: u16, trailing_mark: u16) {
    if word.len() < 2 {
        return;
    }
    for i in (0..=word.len() - 2).rev() {
        if word[i] != VOWEL_E {
            continue;
        }
        if i + 3 < word.len()
            && word[i + 3] == trailing_mark
            && is_vowel_carrier(word[i + 2])
        {
            word[i] = word[i + 1];
            word[i + 1] = word[i + 2];
            word[i + 2] = composed;
            word.remove(i + 3);
            continue;
        }
        if i + 2 < word.len() && word[i + 2] == trailing_mark {
            word[i] = word[i + 1];
            word[i + 1] = composed;
            word.remove(i + 2);
        }
    }
}

fn relocate_vowel_ai_reverse(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    for i in (0..=word.len() - 2).rev() {
        if word[i] == VOWEL_AI {
            word[i] = word[i + 1];
            word[i + 1] = VOWEL_AI;
        }
    }
}

fn relocate_vowel_i_reverse(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    for i in (0..=word.len() - 2).rev() {
        if word[i] != VOWEL_I {
            continue;
        }
        if word[i + 1] == VOWEL_E && i + 2 < word.len() {
            word[i] = word[i + 1];
            word[i + 1] = word[i + 2];
            word[i + 2] = VOWEL_I;
        } else if i + 2 < word.len() && is_postbase_form(word[i + 2]) {
            word[i] = word[i + 1];
            word[i + 1] = word[i + 2];
            word[i + 2] = VOWEL_I;
        } else {
            word[i] = word[i + 1];
            word[i + 1] = VOWEL_I;
        }
    }
}

fn relocate_vowel_e_reverse(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    for i in (0..=word.len() - 2).rev() {
        if word[i] != VOWEL_E {
            continue;
        }
        if i + 2 < word.len() && is_vowel_carrier(word[i + 2]) {
            word[i] = word[i + 1];
            word[i + 1] = word[i + 2];
            word[i + 2] = VOWEL_E;
        } else {
            word[i] = word[i + 1];
            word[i + 1] = VOWEL_E;
        }
    }
}

/// Move rephs and full forms back left, stepping across a vowel that was
/// relocated in front of them.
fn relocate_reph_reverse(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    let mut i = word.len() as isize - 1;
    while i >= 1 {
        let idx = i as usize;
        let ch = word[idx];
        if is_ra_virama_form(ch) {
            if idx >= 2 && matches!(word[idx - 1], VOWEL_E | VOWEL_I) {
                word[idx] = word[idx - 1];
                word[idx - 1] = word[idx - 2];
                word[idx - 2] = ch;
                i -= 2;
            } else {
                word[idx] = word[idx - 1];
                word[idx - 1] = ch;
                i -= 1;
            }
        }
        i -= 1;
    }
}

/// Expand every Bangla PUA code back into its component sequence.
fn expand_ligatures(word: &mut Vec<u16>) {
    let t = tables::tables(Script::Bangla);
    let mut i = 0;
    while i < word.len() {
        match t.expand(word[i]) {
            Some(components) => {
                let expanded: Vec<u16> = components.iter().map(|&(c, _)| c).collect();
                let step = expanded.len();
                word.splice(i..=i, expanded);
                i += step;
            }
            None => i += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaped(input: &[u16]) -> Vec<u16> {
        let mut w = input.to_vec();
        shape_word(&mut w);
        w
    }

    fn restored(input: &[u16]) -> Vec<u16> {
        let mut w = input.to_vec();
        restore_word(&mut w);
        w
    }

    #[test]
    fn ra_virama_takes_full_form_at_word_end() {
        assert_eq!(shaped(&[0x09B0, 0x09CD]), vec![FULL_RA]);
        assert_eq!(restored(&[FULL_RA]), vec![0x09B0, 0x09CD]);
    }

    #[test]
    fn ra_virama_takes_reph_form_mid_word() {
        // ra + virama + ka: the reph lands after the base it covers.
        let out = shaped(&[0x09B0, 0x09CD, 0x0995]);
        assert_eq!(out, vec![0x0995, REPH_RA]);
        assert_eq!(restored(&out), vec![0x09B0, 0x09CD, 0x0995]);
    }

    #[test]
    fn ya_postform_suppressed_after_ra() {
        // ra + virama + ya must become reph-over-ya, never a ya-postform.
        let out = shaped(&[0x09B0, 0x09CD, 0x09AF]);
        assert!(!out.contains(&YA_POST));
        assert_eq!(out, vec![0x09AF, REPH_RA]);
        assert_eq!(restored(&out), vec![0x09B0, 0x09CD, 0x09AF]);
    }

    #[test]
    fn ya_postform_applies_without_preceding_ra() {
        let out = shaped(&[0x0995, 0x09CD, 0x09AF]);
        assert_eq!(out, vec![0x0995, YA_POST]);
        assert_eq!(restored(&out), vec![0x0995, 0x09CD, 0x09AF]);
    }

    #[test]
    fn trailing_virama_match_defers_to_longer_cluster() {
        // ka + virama followed by a consonant stays raw unless the whole
        // cluster is a known conjunct.
        let out = shaped(&[0x0995, 0x09CD, 0x099B]);
        assert_eq!(out, vec![0x0995, 0x09CD, 0x099B]);
    }

    #[test]
    fn e_vowel_moves_before_base() {
        let out = shaped(&[0x0995, VOWEL_E]);
        assert_eq!(out, vec![VOWEL_E, 0x0995]);
        assert_eq!(restored(&out), vec![0x0995, VOWEL_E]);
    }

    #[test]
    fn o_vowel_decomposes_and_recomposes() {
        // ka + O -> E + ka + AA.
        let out = shaped(&[0x0995, VOWEL_O]);
        assert_eq!(out, vec![VOWEL_E, 0x0995, VOWEL_AA]);
        assert_eq!(restored(&out), vec![0x0995, VOWEL_O]);
    }

    #[test]
    fn ou_vowel_decomposes_and_recomposes() {
        let out = shaped(&[0x0995, VOWEL_OU]);
        assert_eq!(out, vec![VOWEL_E, 0x0995, AU_LENGTH_MARK]);
        assert_eq!(restored(&out), vec![0x0995, VOWEL_OU]);
    }

    #[test]
    fn ra_i_ta_transposes() {
        // Logical ra + ta + i: the I relocation puts the i between ra and
        // ta first, then the special transposition turns the run into
        // i + ta with a reph.
        let out = shaped(&[0x09B0, 0x09A4, VOWEL_I]);
        assert_eq!(out, vec![VOWEL_I, 0x09A4, REPH_RA]);
        assert_eq!(restored(&out), vec![0x09B0, 0x09A4, VOWEL_I]);
    }

    #[test]
    fn zwnj_parked_as_zwsp() {
        let out = shaped(&[0x0995, ZWNJ, 0x09B7]);
        assert!(out.contains(&ZWSP));
        assert!(!out.contains(&ZWNJ));
        assert_eq!(restored(&out), vec![0x0995, ZWNJ, 0x09B7]);
    }

    #[test]
    fn reph_cluster_with_i_vowel_roundtrips() {
        // ra + virama + ka + i.
        let input = [0x09B0, 0x09CD, 0x0995, VOWEL_I];
        let out = shaped(&input);
        assert_eq!(out, vec![VOWEL_I, 0x0995, REPH_RA]);
        assert_eq!(restored(&out), input.to_vec());
    }

    #[test]
    fn reph_cluster_with_e_vowel_roundtrips() {
        let input = [0x09B0, 0x09CD, 0x0995, VOWEL_E];
        let out = shaped(&input);
        assert_eq!(out, vec![VOWEL_E, 0x0995, REPH_RA]);
        assert_eq!(restored(&out), input.to_vec());
    }
}

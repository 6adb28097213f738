#![forbid(unsafe_code)]

//! Devanagari forward shaping and restoration passes.
//!
//! Forward order per word: greedy longest-match ligature substitution, then
//! vowel-sign-I relocation. Restore order is the exact inverse: reph
//! relocation reverse, I relocation reverse, then PUA expansion.
//!
//! The vowel sign I (U+093F) is written before the consonant it logically
//! follows, so a left-to-right glyph renderer needs it moved two positions
//! left — or three when the preceding cluster collapsed into a
//! virama-combination ligature or the reph form, because the ligature
//! absorbed one position.
//!
//! Every neighbor access is bounds-checked; a window or neighbor that would
//! fall outside the buffer leaves the text untouched rather than shifting
//! anything speculatively.

use crate::script::Script;
use crate::tables;

/// Devanagari vowel sign I.
const VOWEL_I: u16 = 0x093F;
/// Reph form of `ra + virama` (U+0930 U+094D with the `rphf` feature).
const REPH: u16 = 0xE02E;
/// Eyelash form of `ra + virama + ZWJ`; only valid before a plain consonant.
const EYELASH: u16 = 0xE04A;

/// Plain Devanagari consonant, excluding the four letters the eyelash form
/// never precedes (nnna, rra, llla, lllla).
#[inline]
fn is_consonant(ch: u16) -> bool {
    match ch {
        0x0929 | 0x0931 | 0x0933 | 0x0934 => false,
        0x0915..=0x0939 => true,
        _ => false,
    }
}

/// Ligatures that end in a half-form virama; the vowel sign I jumps one
/// position further left across these.
#[inline]
fn is_virama_combo(ch: u16) -> bool {
    matches!(
        ch,
        0xE030..=0xE049
            | 0xE04B..=0xE053
            | 0xE056..=0xE058
            | 0xE05D
            | 0xE062
            | 0xE063
            | 0xE069
            | 0xE06B
            | 0xE06F
            | 0xE071
            | 0xE194
    )
}

/// Replace `word[start..start + len]` with a single code unit.
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
    relocate_vowel_i(word);
}

/// Greedy longest-match substitution: window lengths from
/// `min(len, MAX_LIG)` down to 2, window starts scanned from the end of the
/// word toward the start, prefix-filtered before the reverse lookup.
fn substitute_ligatures(word: &mut Vec<u16>) {
    let t = tables::tables(Script::Devanagari);
    let max = Script::Devanagari.max_lig().min(word.len());
    for w in (2..=max).rev() {
        let mut c = word.len() as isize - w as isize;
        while c >= 0 {
            let start = c as usize;
            let Some(window) = word.get(start..start + w) else {
                c -= 1;
                continue;
            };
            if let Some(rep) = t.lookup_window(window) {
                match rep {
                    EYELASH => {
                        // ra + virama + ZWJ collapses to the eyelash form
                        // only before a plain consonant.
                        if word.get(start + w).copied().is_some_and(is_consonant) {
                            collapse(word, start, w, rep);
                            c -= w as isize - 2;
                        }
                    }
                    REPH => {
                        // The reph renders above the following base, so it
                        // trades places with it after the collapse.
                        collapse(word, start, w, rep);
                        if start + 1 < word.len() {
                            word.swap(start, start + 1);
                        }
                        c -= w as isize - 2;
                    }
                    _ => {
                        collapse(word, start, w, rep);
                        c -= w as isize - 2;
                    }
                }
            }
            c -= 1;
        }
    }
}

/// Move each vowel sign I two positions left, or three across a
/// virama-combination ligature or the reph form.
fn relocate_vowel_i(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    for i in 1..word.len() {
        if word[i] != VOWEL_I {
            continue;
        }
        if i >= 2 && (is_virama_combo(word[i - 2]) || word[i - 1] == REPH) {
            word[i] = word[i - 1];
            word[i - 1] = word[i - 2];
            word[i - 2] = VOWEL_I;
        } else {
            word[i] = word[i - 1];
            word[i - 1] = VOWEL_I;
        }
    }
}

// ---------------------------------------------------------------------------
// Reverse
// ---------------------------------------------------------------------------

/// Restore one word of shaped text to logical order in place.
pub(crate) fn restore_word(word: &mut Vec<u16>) {
    relocate_reph_reverse(word);
    relocate_vowel_i_reverse(word);
    expand_ligatures(word);
}

/// Move each reph form back one position left (undoing the transposition the
/// substitution pass applied).
fn relocate_reph_reverse(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    for i in 1..word.len() {
        if word[i] == REPH {
            word[i] = word[i - 1];
            word[i - 1] = REPH;
        }
    }
}

/// Undo [`relocate_vowel_i`], scanning right-to-left.
fn relocate_vowel_i_reverse(word: &mut [u16]) {
    if word.len() < 2 {
        return;
    }
    for i in (0..=word.len() - 2).rev() {
        if word[i] != VOWEL_I {
            continue;
        }
        if i + 2 < word.len() && (is_virama_combo(word[i + 1]) || word[i + 1] == REPH) {
            word[i] = word[i + 1];
            word[i + 1] = word[i + 2];
            word[i + 2] = VOWEL_I;
        } else {
            word[i] = word[i + 1];
            word[i + 1] = VOWEL_I;
        }
    }
}

/// Expand every Devanagari PUA code back into its component sequence.
fn expand_ligatures(word: &mut Vec<u16>) {
    let t = tables::tables(Script::Devanagari);
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
    fn akhn_cluster_collapses_to_single_code() {
        // ka + virama + ssa -> kssa
        assert_eq!(shaped(&[0x0915, 0x094D, 0x0937]), vec![0xE02C]);
        assert_eq!(restored(&[0xE02C]), vec![0x0915, 0x094D, 0x0937]);
    }

    #[test]
    fn vowel_i_moves_before_consonant() {
        assert_eq!(shaped(&[0x0915, VOWEL_I]), vec![VOWEL_I, 0x0915]);
        assert_eq!(restored(&[VOWEL_I, 0x0915]), vec![0x0915, VOWEL_I]);
    }

    #[test]
    fn vowel_i_jumps_over_half_form_ligature() {
        // ka + virama + ka + i: the half-form ka absorbs one position, so
        // the vowel lands at the front of the cluster.
        let input = [0x0915, 0x094D, 0x0915, VOWEL_I];
        let out = shaped(&input);
        assert_eq!(out, vec![VOWEL_I, 0xE030, 0x0915]);
        assert_eq!(restored(&out), input.to_vec());
    }

    #[test]
    fn reph_transposes_after_following_base() {
        // ra + virama + ka: reph renders above ka.
        let out = shaped(&[0x0930, 0x094D, 0x0915]);
        assert_eq!(out, vec![0x0915, REPH]);
        assert_eq!(restored(&out), vec![0x0930, 0x094D, 0x0915]);
    }

    #[test]
    fn reph_at_word_end_does_not_read_past_buffer() {
        let out = shaped(&[0x0930, 0x094D]);
        assert_eq!(out, vec![REPH]);
        assert_eq!(restored(&out), vec![0x0930, 0x094D]);
    }

    #[test]
    fn eyelash_requires_following_consonant() {
        // ra + virama + ZWJ + ka collapses; without the consonant the
        // window stays untouched.
        let with = shaped(&[0x0930, 0x094D, 0x200D, 0x0915]);
        assert_eq!(with, vec![EYELASH, 0x0915]);
        assert_eq!(restored(&with), vec![0x0930, 0x094D, 0x200D, 0x0915]);

        let without = shaped(&[0x0930, 0x094D, 0x200D]);
        assert!(!without.contains(&EYELASH));
    }

    #[test]
    fn unknown_codepoints_pass_through() {
        let ascii: Vec<u16> = "hello".encode_utf16().collect();
        assert_eq!(shaped(&ascii), ascii);
        assert_eq!(restored(&ascii), ascii);
    }

    #[test]
    fn rkrf_cluster_roundtrips() {
        // ka + virama + ra -> single rkrf form.
        let input = [0x0915, 0x094D, 0x0930];
        let out = shaped(&input);
        assert_eq!(out, vec![0xE077]);
        assert_eq!(restored(&out), input.to_vec());
    }
}

#![forbid(unsafe_code)]

//! Word-at-a-time driver over whitespace-segmented UTF-16 text.
//!
//! Shaping and restoration both operate on whitespace-free words; this
//! module splits a text run into alternating word and separator spans,
//! transforms the words, and re-emits the separator spans byte-for-byte.
//! Separator runs are never merged, trimmed, or reordered, so the output
//! always has exactly the same whitespace as the input.
//!
//! Forward shaping skips words shorter than two code units (nothing to
//! substitute or relocate). Restoration visits every word, whatever its
//! length: a single PUA code is still a full cluster that must expand.

use crate::script::Script;
use crate::{bangla, devanagari};

/// The separator set: tab, LF, FF, CR, space.
#[inline]
#[must_use]
pub fn is_separator(ch: u16) -> bool {
    matches!(ch, 0x0009 | 0x000A | 0x000C | 0x000D | 0x0020)
}

// ---------------------------------------------------------------------------
// Word iteration
// ---------------------------------------------------------------------------

/// Alternating spans of a text run.
#[derive(Debug, PartialEq, Eq)]
enum Span<'a> {
    Word(&'a [u16]),
    Separator(&'a [u16]),
}

/// Split into maximal word / separator runs, in order, covering the whole
/// input with no gaps.
fn spans(text: &[u16]) -> impl Iterator<Item = Span<'_>> {
    let mut rest = text;
    std::iter::from_fn(move || {
        let (&first, _) = rest.split_first()?;
        let sep = is_separator(first);
        let end = rest
            .iter()
            .position(|&ch| is_separator(ch) != sep)
            .unwrap_or(rest.len());
        let (span, tail) = rest.split_at(end);
        rest = tail;
        Some(if sep {
            Span::Separator(span)
        } else {
            Span::Word(span)
        })
    })
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Shape a text run for one script, word by word.
#[must_use]
pub fn shape_text(script: Script, text: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(text.len());
    let mut word = Vec::new();
    for span in spans(text) {
        match span {
            Span::Separator(sep) => out.extend_from_slice(sep),
            Span::Word(w) => {
                word.clear();
                word.extend_from_slice(w);
                match script {
                    Script::Devanagari => devanagari::shape_word(&mut word),
                    Script::Bangla => bangla::shape_word(&mut word),
                }
                out.extend_from_slice(&word);
            }
        }
    }
    out
}

/// Restore a shaped text run for one script, word by word.
#[must_use]
pub fn restore_text(script: Script, text: &[u16]) -> Vec<u16> {
    let mut out = Vec::with_capacity(text.len());
    let mut word = Vec::new();
    for span in spans(text) {
        match span {
            Span::Separator(sep) => out.extend_from_slice(sep),
            Span::Word(w) => {
                word.clear();
                word.extend_from_slice(w);
                match script {
                    Script::Devanagari => devanagari::restore_word(&mut word),
                    Script::Bangla => bangla::restore_word(&mut word),
                }
                out.extend_from_slice(&word);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn separator_runs_survive_exactly() {
        let text = u("  क्ष \t\tक्ष\n");
        let shaped = shape_text(Script::Devanagari, &text);
        let seps: Vec<u16> = text.iter().copied().filter(|&c| is_separator(c)).collect();
        let shaped_seps: Vec<u16> =
            shaped.iter().copied().filter(|&c| is_separator(c)).collect();
        assert_eq!(seps, shaped_seps);
        assert_eq!(restore_text(Script::Devanagari, &shaped), text);
    }

    #[test]
    fn empty_and_separator_only_inputs() {
        assert!(shape_text(Script::Devanagari, &[]).is_empty());
        let ws = u(" \r\n ");
        assert_eq!(shape_text(Script::Bangla, &ws), ws);
        assert_eq!(restore_text(Script::Bangla, &ws), ws);
    }

    #[test]
    fn single_unit_word_shapes_unchanged() {
        let text = u("क a");
        assert_eq!(shape_text(Script::Devanagari, &text), text);
    }

    #[test]
    fn restore_expands_single_code_word() {
        // One PUA code between spaces is still a cluster.
        let text = vec![0x0020, 0xE02C, 0x0020];
        assert_eq!(
            restore_text(Script::Devanagari, &text),
            vec![0x0020, 0x0915, 0x094D, 0x0937, 0x0020]
        );
    }

    #[test]
    fn words_shape_independently_across_separators() {
        // The cluster must not match across a space.
        let text = vec![0x0915, 0x094D, 0x0020, 0x0937];
        assert_eq!(shape_text(Script::Devanagari, &text), vec![0xE030, 0x0020, 0x0937]);
    }

    #[test]
    fn spans_cover_input_in_order() {
        let text = u(" ab  c");
        let collected: Vec<_> = spans(&text).collect();
        assert_eq!(collected.len(), 4);
        assert!(matches!(collected[0], Span::Separator(s) if s.len() == 1));
        assert!(matches!(collected[1], Span::Word(w) if w.len() == 2));
        assert!(matches!(collected[2], Span::Separator(s) if s.len() == 2));
        assert!(matches!(collected[3], Span::Word(w) if w.len() == 1));
    }
}

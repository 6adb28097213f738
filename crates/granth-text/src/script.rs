#![forbid(unsafe_code)]

//! Script identification and the per-document activation gate.
//!
//! Shaping is expensive and almost every document needs none of it, so the
//! engine keeps a sticky per-document flag per script: the first time a
//! codepoint from a script's Unicode block is observed anywhere in probed
//! text, that script activates for the rest of the document's life and its
//! tables are built. Until then, `shape`/`restore` are identity.
//!
//! Detection samples every Nth code unit of the probe (default 10) — a
//! deliberate, lossy performance trade-off inherited from the engine this
//! core serves. The stride is a tunable field, not a constant, so callers
//! that probe short strings can drop it to 1.
//!
//! # Invariants
//!
//! 1. **Monotonicity**: once [`DocumentScripts::ensure_active`] returns true
//!    for a script, it returns true for every later call on that document.
//! 2. Activation state is document-scoped; several open documents may have
//!    different active sets while sharing the process-wide tables.
//!
//! # Example
//!
//! ```
//! use granth_text::script::{DocumentScripts, Script};
//!
//! let mut doc = DocumentScripts::new();
//! let probe: Vec<u16> = "नमस्ते".encode_utf16().collect();
//! assert!(doc.ensure_active(Script::Devanagari, &probe));
//! assert!(!doc.is_active(Script::Bangla));
//! // Sticky: an ASCII probe does not deactivate.
//! assert!(doc.ensure_active(Script::Devanagari, &[0x0041]));
//! ```

use std::borrow::Cow;

use crate::tables;

/// Default detection sampling stride: every 10th code unit of a probe.
pub const DEFAULT_DETECTION_STRIDE: usize = 10;

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

/// A Brahmic script with shaping support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Devanagari (Hindi, Sanskrit, Marathi, ...), including the Vedic
    /// extension blocks.
    Devanagari,
    /// Bangla (Bengali, Assamese).
    Bangla,
}

impl Script {
    /// Both supported scripts, in pipeline application order.
    pub const ALL: [Script; 2] = [Script::Devanagari, Script::Bangla];

    /// Is this code unit in the script's native Unicode block(s)?
    #[inline]
    #[must_use]
    pub fn contains(self, ch: u16) -> bool {
        match self {
            Script::Devanagari => {
                matches!(ch, 0x0900..=0x097F | 0xA8E0..=0xA8FF | 0x1CD0..=0x1CFA)
            }
            Script::Bangla => matches!(ch, 0x0980..=0x09FF),
        }
    }

    /// Is this code unit in the script's PUA replacement range?
    #[inline]
    #[must_use]
    pub fn in_pua_range(self, ch: u16) -> bool {
        match self {
            Script::Devanagari => {
                (tables::DEVANAGARI_PUA_START..=tables::DEVANAGARI_PUA_END).contains(&ch)
            }
            Script::Bangla => (tables::BANGLA_PUA_START..=tables::BANGLA_PUA_END).contains(&ch),
        }
    }

    /// Longest substitution window for this script.
    #[inline]
    #[must_use]
    pub fn max_lig(self) -> usize {
        match self {
            Script::Devanagari => tables::DEVANAGARI_MAX_LIG,
            Script::Bangla => tables::BANGLA_MAX_LIG,
        }
    }
}

// ---------------------------------------------------------------------------
// DocumentScripts — the activation gate
// ---------------------------------------------------------------------------

/// Per-document script activation state.
///
/// Create one when a document is opened, probe it with document text as the
/// text is first observed, and drop it with the document. All shaping and
/// restoration for the document goes through this gate.
#[derive(Debug, Clone)]
pub struct DocumentScripts {
    devanagari: bool,
    bangla: bool,
    /// Detection sampling stride; 1 checks every code unit.
    pub detection_stride: usize,
}

impl Default for DocumentScripts {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentScripts {
    /// Fresh state with no script active and the default stride.
    #[must_use]
    pub fn new() -> Self {
        DocumentScripts {
            devanagari: false,
            bangla: false,
            detection_stride: DEFAULT_DETECTION_STRIDE,
        }
    }

    /// Is a script already active for this document?
    #[inline]
    #[must_use]
    pub fn is_active(&self, script: Script) -> bool {
        match script {
            Script::Devanagari => self.devanagari,
            Script::Bangla => self.bangla,
        }
    }

    /// Probe text for a script and latch activation on first sight.
    ///
    /// Samples every `detection_stride`-th code unit. On first activation
    /// the script's tables are built if no other document triggered them
    /// yet. Returns the (possibly newly set) activation state.
    pub fn ensure_active(&mut self, script: Script, probe: &[u16]) -> bool {
        if self.is_active(script) {
            return true;
        }
        let stride = self.detection_stride.max(1);
        if probe.iter().step_by(stride).any(|&ch| script.contains(ch)) {
            match script {
                Script::Devanagari => self.devanagari = true,
                Script::Bangla => self.bangla = true,
            }
            // Force one-time table construction off the render path.
            let _ = tables::tables(script);
            return true;
        }
        false
    }

    /// Shape text for one script; identity while the script is inactive.
    #[must_use]
    pub fn shape<'a>(&self, script: Script, text: &'a [u16]) -> Cow<'a, [u16]> {
        if !self.is_active(script) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(crate::pipeline::shape_text(script, text))
    }

    /// Restore previously shaped text for one script; identity while the
    /// script is inactive.
    #[must_use]
    pub fn restore<'a>(&self, script: Script, text: &'a [u16]) -> Cow<'a, [u16]> {
        if !self.is_active(script) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(crate::pipeline::restore_text(script, text))
    }

    /// Restore through every active script, in pipeline order.
    ///
    /// This is what search previews and copy extraction call: shaped text
    /// comes back from layout with no record of which script produced it.
    #[must_use]
    pub fn restore_all<'a>(&self, text: &'a [u16]) -> Cow<'a, [u16]> {
        let mut out = Cow::Borrowed(text);
        for script in Script::ALL {
            if self.is_active(script) {
                out = Cow::Owned(crate::pipeline::restore_text(script, &out));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn activation_is_sticky() {
        let mut doc = DocumentScripts::new();
        assert!(!doc.ensure_active(Script::Devanagari, &u("plain ascii")));
        assert!(doc.ensure_active(Script::Devanagari, &u("क")));
        assert!(doc.ensure_active(Script::Devanagari, &u("back to ascii")));
        assert!(doc.is_active(Script::Devanagari));
        assert!(!doc.is_active(Script::Bangla));
    }

    #[test]
    fn stride_can_miss_sparse_script_runs() {
        // One Devanagari code unit at index 5 of an ASCII probe: the default
        // stride of 10 samples indices 0, 10, 20... and misses it.
        let mut probe = u("aaaaaaaaaaaaaaaaaaaa");
        probe[5] = 0x0915;
        let mut doc = DocumentScripts::new();
        assert!(!doc.ensure_active(Script::Devanagari, &probe));

        let mut exact = DocumentScripts::new();
        exact.detection_stride = 1;
        assert!(exact.ensure_active(Script::Devanagari, &probe));
    }

    #[test]
    fn zero_stride_is_clamped() {
        let mut doc = DocumentScripts::new();
        doc.detection_stride = 0;
        assert!(doc.ensure_active(Script::Bangla, &u("বাংলা")));
    }

    #[test]
    fn inactive_script_shape_is_borrowed_identity() {
        let doc = DocumentScripts::new();
        let text = u("क्षमा");
        assert!(matches!(doc.shape(Script::Devanagari, &text), Cow::Borrowed(_)));
        assert!(matches!(doc.restore(Script::Devanagari, &text), Cow::Borrowed(_)));
    }

    #[test]
    fn documents_activate_independently() {
        let mut a = DocumentScripts::new();
        let mut b = DocumentScripts::new();
        assert!(a.ensure_active(Script::Bangla, &u("ক")));
        assert!(!b.is_active(Script::Bangla));
        assert!(b.ensure_active(Script::Devanagari, &u("क")));
        assert!(!b.is_active(Script::Bangla));
        assert!(a.is_active(Script::Bangla));
    }
}

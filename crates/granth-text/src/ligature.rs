#![forbid(unsafe_code)]

//! Ligature descriptors: the value type behind every table entry.
//!
//! A "ligature" here is a single private-use-area (PUA) codepoint standing in
//! for a multi-codepoint grapheme cluster, so that a non-shaping-aware glyph
//! renderer can draw the correct precomposed glyph. Each table row is a
//! [`LigatureDef`]: the replacement code plus the ordered component code
//! units, optionally tagged with the OpenType feature that produced the
//! precomposed glyph in the source font (`half`, `akhn`, `rkrf`, ...).
//!
//! [`Ligature`] is the runtime matching key built from a window of text. Its
//! `Hash`/`Eq` derive from the component code units alone — feature tags are
//! rendering hints and never influence matching.
//!
//! # Invariants
//!
//! 1. A descriptor used for matching has 2..=[`MAX_COMPONENTS`] components.
//!    Zero components is the "not a ligature" sentinel.
//! 2. Two descriptors compare equal iff their component sequences are
//!    identical, regardless of feature tags.

use smallvec::SmallVec;

/// Hard cap on components per ligature. The longest entries in the source
/// font tables have 7 components; 10 leaves headroom without heap spill.
pub const MAX_COMPONENTS: usize = 10;

/// Bangla virama (hasanta).
pub const BANGLA_VIRAMA: u16 = 0x09CD;
/// Bangla letter Ra.
pub const BANGLA_RA: u16 = 0x09B0;
/// Bangla letter Ra with middle diagonal (assamese Ra).
pub const BANGLA_RA_MIDDLE: u16 = 0x09F0;

// ---------------------------------------------------------------------------
// LigatureDef — declarative table row
// ---------------------------------------------------------------------------

/// One row of a script's ligature table: a replacement code and its ordered
/// components.
///
/// The tables are static arrays of these, validated once at build time
/// ([`crate::tables::ScriptTables::build`]); a row with a component count
/// outside 2..=10 is skipped with a warning, never a crash.
#[derive(Debug, Clone, Copy)]
pub struct LigatureDef {
    /// The single code unit this cluster collapses to. Usually in the
    /// script's PUA range; a handful of Devanagari rows target native
    /// precomposed codepoints (e.g. U+0950 Om) and are matched but never
    /// expanded back.
    pub code: u16,
    /// Ordered components: `(code unit, feature-tag suffix)`. An empty
    /// suffix means the component carries no OpenType hint; compound
    /// suffixes like `"blwf.vatu"` are kept verbatim from the font table.
    pub components: &'static [(u16, &'static str)],
}

impl LigatureDef {
    /// Number of components.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True for the 0-component sentinel (never stored in tables).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Component count check performed at table build time.
    #[inline]
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        (2..=MAX_COMPONENTS).contains(&self.len())
    }

    /// The matching key for this row.
    #[must_use]
    pub fn key(&self) -> Ligature {
        Ligature {
            components: self.components.iter().map(|&(c, _)| c).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Ligature — runtime matching key
// ---------------------------------------------------------------------------

/// Ordered component code units of a candidate cluster.
///
/// Built either from a table row ([`LigatureDef::key`]) or from a window of
/// word text during forward shaping ([`Ligature::from_window`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Ligature {
    components: SmallVec<[u16; MAX_COMPONENTS]>,
}

impl Ligature {
    /// Build a candidate from a window of word text.
    ///
    /// Returns the empty sentinel when the window length is outside
    /// 2..=[`MAX_COMPONENTS`]; the sentinel matches nothing.
    #[must_use]
    pub fn from_window(window: &[u16]) -> Self {
        if !(2..=MAX_COMPONENTS).contains(&window.len()) {
            return Self::default();
        }
        Ligature {
            components: SmallVec::from_slice(window),
        }
    }

    /// Component code units in order.
    #[inline]
    #[must_use]
    pub fn components(&self) -> &[u16] {
        &self.components
    }

    /// Number of components; 0 for the sentinel.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// True for the "not a ligature" sentinel.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// The two-component prefix key used by the fast filter:
    /// `(c0 << 16) | c1`.
    #[inline]
    #[must_use]
    pub fn prefix_key(&self) -> Option<u32> {
        prefix_key(&self.components)
    }

    /// True when the last component is the Bangla virama and the sequence is
    /// not plain `ra + virama` (U+09B0/U+09F0 + U+09CD) — those two are an
    /// ordinary consonant-plus-virama pair, not a conjunct, and get the
    /// reph/full treatment instead.
    #[must_use]
    pub fn bangla_trailing_virama(&self) -> bool {
        match self.components.as_slice() {
            [] => false,
            [BANGLA_RA | BANGLA_RA_MIDDLE, BANGLA_VIRAMA] => false,
            [.., last] => *last == BANGLA_VIRAMA,
        }
    }
}

/// Fast-filter key for the first two code units of a window.
#[inline]
#[must_use]
pub fn prefix_key(window: &[u16]) -> Option<u32> {
    match window {
        [c0, c1, ..] => Some((u32::from(*c0) << 16) | u32::from(*c1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_outside_bounds_is_sentinel() {
        assert!(Ligature::from_window(&[]).is_empty());
        assert!(Ligature::from_window(&[0x0915]).is_empty());
        let long = [0x0915u16; MAX_COMPONENTS + 1];
        assert!(Ligature::from_window(&long).is_empty());
        assert!(!Ligature::from_window(&[0x0915, 0x094D]).is_empty());
    }

    #[test]
    fn equality_ignores_feature_tags() {
        let a = LigatureDef {
            code: 0xE030,
            components: &[(0x0915, ""), (0x094D, "half")],
        };
        let b = Ligature::from_window(&[0x0915, 0x094D]);
        assert_eq!(a.key(), b);
    }

    #[test]
    fn trailing_virama_excludes_plain_ra() {
        let ra = Ligature::from_window(&[BANGLA_RA, BANGLA_VIRAMA]);
        let ra1 = Ligature::from_window(&[BANGLA_RA_MIDDLE, BANGLA_VIRAMA]);
        let ka = Ligature::from_window(&[0x0995, BANGLA_VIRAMA]);
        let kta = Ligature::from_window(&[0x0995, BANGLA_VIRAMA, 0x09A4]);
        assert!(!ra.bangla_trailing_virama());
        assert!(!ra1.bangla_trailing_virama());
        assert!(ka.bangla_trailing_virama());
        assert!(!kta.bangla_trailing_virama());
    }

    #[test]
    fn prefix_key_packs_first_two_units() {
        assert_eq!(prefix_key(&[0x0915, 0x094D]), Some(0x0915_094D));
        assert_eq!(prefix_key(&[0x0915]), None);
    }
}

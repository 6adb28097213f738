#![forbid(unsafe_code)]

//! Per-script ligature tables: forward map, reverse map, prefix filter.
//!
//! Each supported script owns one [`ScriptTables`] instance, built once from
//! a static array of [`LigatureDef`] rows and immutable afterwards. The three
//! structures are always built together:
//!
//! - **forward**: replacement code → table row, used by the restore pipeline
//!   to expand a PUA code back into its components.
//! - **reverse**: component sequence → replacement code, used by forward
//!   shaping to collapse a matched window.
//! - **prefix**: set of `(c0 << 16) | c1` keys over all rows — a performance
//!   prefilter that rejects windows which cannot start any known ligature
//!   before the reverse lookup runs. It carries no correctness weight.
//!
//! # Invariants
//!
//! 1. Tables are built exactly once per process (`OnceLock`) and never
//!    mutated after construction, so concurrent first-use from several
//!    document threads cannot race.
//! 2. Every reverse entry points at a forward row with an identical
//!    component sequence. Rows sharing a component sequence (alternate-glyph
//!    duplicates and the Bangla reph/full positional pairs) resolve
//!    last-row-wins, matching the source font tables.
//! 3. A malformed row (component count outside 2..=10) is skipped with a
//!    warning; construction never fails.

use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::OnceLock;

use crate::ligature::{Ligature, LigatureDef};
use crate::script::Script;

/// First Devanagari PUA replacement code.
pub const DEVANAGARI_PUA_START: u16 = 0xE001;
/// Last Devanagari PUA replacement code (0xE1C6..=0xE200 is a reserved gap).
pub const DEVANAGARI_PUA_END: u16 = 0xE1C5;
/// First Bangla PUA replacement code.
pub const BANGLA_PUA_START: u16 = 0xE201;
/// Last Bangla PUA replacement code.
pub const BANGLA_PUA_END: u16 = 0xE50F;

/// Longest window the Devanagari substitution pass considers.
pub const DEVANAGARI_MAX_LIG: usize = 6;
/// Longest window the Bangla substitution pass considers.
pub const BANGLA_MAX_LIG: usize = 7;

// ---------------------------------------------------------------------------
// ScriptTables
// ---------------------------------------------------------------------------

/// Immutable per-script lookup tables.
#[derive(Debug)]
pub struct ScriptTables {
    script: Script,
    forward: FxHashMap<u16, &'static LigatureDef>,
    reverse: FxHashMap<Ligature, u16>,
    prefix: FxHashSet<u32>,
}

impl ScriptTables {
    /// Build tables from a static def array.
    ///
    /// Malformed rows are skipped with a diagnostic. Rows whose component
    /// sequence repeats an earlier row shadow it in the reverse map
    /// (last-row-wins).
    #[must_use]
    pub fn build(script: Script, defs: &'static [LigatureDef]) -> Self {
        let mut forward =
            FxHashMap::with_capacity_and_hasher(defs.len(), Default::default());
        let mut reverse =
            FxHashMap::with_capacity_and_hasher(defs.len(), Default::default());
        let mut prefix = FxHashSet::default();

        for def in defs {
            if !def.is_well_formed() {
                tracing::warn!(
                    code = def.code,
                    components = def.len(),
                    ?script,
                    "skipping malformed ligature table row"
                );
                continue;
            }
            let key = def.key();
            if let Some(p) = key.prefix_key() {
                prefix.insert(p);
            }
            if let Some(shadowed) = reverse.insert(key, def.code) {
                tracing::debug!(
                    shadowed,
                    code = def.code,
                    ?script,
                    "duplicate component sequence; later row wins"
                );
            }
            forward.insert(def.code, def);
        }

        ScriptTables {
            script,
            forward,
            reverse,
            prefix,
        }
    }

    /// The script these tables belong to.
    #[inline]
    #[must_use]
    pub fn script(&self) -> Script {
        self.script
    }

    /// Fast prefilter: can a known ligature start with these two code units?
    #[inline]
    #[must_use]
    pub fn prefix_hit(&self, window: &[u16]) -> bool {
        crate::ligature::prefix_key(window).is_some_and(|k| self.prefix.contains(&k))
    }

    /// Reverse lookup: the replacement code for a window, if the window is a
    /// known ligature of 2..=`MAX_LIG` components.
    #[must_use]
    pub fn lookup_window(&self, window: &[u16]) -> Option<u16> {
        if !(2..=self.script.max_lig()).contains(&window.len()) {
            return None;
        }
        if !self.prefix_hit(window) {
            return None;
        }
        self.reverse.get(&Ligature::from_window(window)).copied()
    }

    /// Forward lookup: the table row behind a replacement code.
    #[inline]
    #[must_use]
    pub fn def(&self, code: u16) -> Option<&'static LigatureDef> {
        self.forward.get(&code).copied()
    }

    /// Expansion of a replacement code back into its components, or `None`
    /// when the code is outside the script's PUA range or its row has an
    /// out-of-bounds length (left untouched by restore).
    #[must_use]
    pub fn expand(&self, code: u16) -> Option<&'static [(u16, &'static str)]> {
        if !self.script.in_pua_range(code) {
            return None;
        }
        let def = self.def(code)?;
        if def.is_empty() || def.len() > self.script.max_lig() {
            return None;
        }
        Some(def.components)
    }

    /// All forward rows; exposed for consistency checks in tests.
    pub fn forward_rows(&self) -> impl Iterator<Item = (u16, &'static LigatureDef)> + '_ {
        self.forward.iter().map(|(&c, &d)| (c, d))
    }

    /// Reverse lookup by prebuilt key; exposed for consistency checks.
    #[must_use]
    pub fn reverse_code(&self, key: &Ligature) -> Option<u16> {
        self.reverse.get(key).copied()
    }
}

// ---------------------------------------------------------------------------
// Process-wide one-time construction
// ---------------------------------------------------------------------------

static DEVANAGARI: OnceLock<ScriptTables> = OnceLock::new();
static BANGLA: OnceLock<ScriptTables> = OnceLock::new();

/// The tables for a script, building them on first use.
///
/// Construction happens at most once per process; concurrent first calls
/// from different document threads serialize on the `OnceLock`.
#[must_use]
pub fn tables(script: Script) -> &'static ScriptTables {
    match script {
        Script::Devanagari => DEVANAGARI
            .get_or_init(|| ScriptTables::build(script, crate::devanagari_table::DEFS)),
        Script::Bangla => {
            BANGLA.get_or_init(|| ScriptTables::build(script, crate::bangla_table::DEFS))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn malformed_rows_are_skipped_not_fatal() {
        static BAD: &[LigatureDef] = &[
            LigatureDef {
                code: 0xE001,
                components: &[(0x0915, "")],
            },
            LigatureDef {
                code: 0xE002,
                components: &[(0x0915, ""), (0x094D, "half")],
            },
        ];
        let t = ScriptTables::build(Script::Devanagari, BAD);
        assert!(t.def(0xE001).is_none());
        assert_eq!(t.lookup_window(&[0x0915, 0x094D]), Some(0xE002));
        assert!(logs_contain("skipping malformed ligature table row"));
    }

    #[test]
    fn prefix_filter_rejects_unknown_windows() {
        let t = tables(Script::Devanagari);
        assert!(!t.prefix_hit(&[0x0041, 0x0042]));
        assert!(t.prefix_hit(&[0x0915, 0x094D]));
    }

    #[test]
    fn expand_ignores_out_of_range_codes() {
        let t = tables(Script::Devanagari);
        assert!(t.expand(0x0041).is_none());
        assert!(t.expand(0xE200).is_none());
        // Native composition rows are matched but never expanded.
        assert!(t.expand(0x0950).is_none());
        assert_eq!(
            t.expand(0xE02C).map(|c| c.iter().map(|&(u, _)| u).collect::<Vec<_>>()),
            Some(vec![0x0915, 0x094D, 0x0937])
        );
    }

    #[test]
    fn window_longer_than_max_lig_never_matches() {
        let t = tables(Script::Devanagari);
        let too_long = [0x0915u16, 0x094D, 0x0937, 0x094D, 0x0930, 0x094D, 0x0915];
        assert!(t.lookup_window(&too_long).is_none());
    }
}

#![forbid(unsafe_code)]

//! Brahmic text shaping and restoration for the Granth e-book engine.
//!
//! # Role in Granth
//! `granth-text` sits between document text extraction and glyph layout. The
//! renderer draws precomposed glyphs from a font's private use area (PUA)
//! instead of running an OpenType shaper, so complex-script text must be
//! rewritten before layout: conjunct clusters collapse to single PUA codes
//! and reordering vowel signs move to their visual positions. Search,
//! selection, and copy extraction then need the inverse, byte-exact.
//!
//! # Primary responsibilities
//! - **Ligature tables**: per-script forward/reverse/prefix maps built once
//!   per process from declarative rows (`tables`, `ligature`).
//! - **Forward shaping**: logical order → visual PUA order, word by word
//!   (`devanagari`, `bangla`, driven by `pipeline`).
//! - **Restoration**: the exact inverse of forward shaping, so round-trips
//!   are lossless for well-formed text.
//! - **Activation gate**: per-document sticky script detection so documents
//!   without Brahmic text pay nothing (`script::DocumentScripts`).
//!
//! # How it fits in the system
//! The engine creates one [`DocumentScripts`] per open document, probes it
//! with text as pages are loaded, and routes every render-bound string
//! through [`DocumentScripts::shape`] and every extraction-bound string
//! through [`DocumentScripts::restore_all`]. Text is UTF-16 code units
//! throughout, matching the engine's document model.

pub mod ligature;
pub mod pipeline;
pub mod script;
pub mod tables;

pub(crate) mod bangla;
pub(crate) mod bangla_table;
pub(crate) mod devanagari;
pub(crate) mod devanagari_table;

pub use ligature::{Ligature, LigatureDef, MAX_COMPONENTS};
pub use pipeline::{restore_text, shape_text};
pub use script::{DocumentScripts, Script, DEFAULT_DETECTION_STRIDE};
pub use tables::{tables, ScriptTables};

#![forbid(unsafe_code)]

//! Devanagari ligature table data.
//!
//! Precomposed-glyph inventory of the Noto Sans Devanagari face, keyed into
//! the 0xE001..=0xE1C5 PUA range, plus eight native-Unicode composition rows
//! (nukta compositions that Unicode already encodes as single codepoints).
//! Feature-tag suffixes name the OpenType lookup that produced the glyph.
//! Data only; construction and validation live in `tables`.

use crate::ligature::LigatureDef;

const fn def(code: u16, components: &'static [(u16, &'static str)]) -> LigatureDef {
    LigatureDef { code, components }
}

/// All Devanagari table rows, in replacement-code order.
pub(crate) static DEFS: &[LigatureDef] = &[
    def(0x090C, &[(0x090C, ""), (0x093C, "")]),
    def(0x0944, &[(0x0943, ""), (0x093C, "")]),
    def(0x0950, &[(0x0901, ""), (0x093C, "")]),
    def(0x0960, &[(0x090B, ""), (0x093C, "")]),
    def(0x0961, &[(0x0908, ""), (0x093C, "")]),
    def(0x0962, &[(0x093F, ""), (0x093C, "")]),
    def(0x0963, &[(0x0940, ""), (0x093C, "")]),
    def(0x093D, &[(0x0964, ""), (0x093C, "")]),
    def(0xE001, &[(0x0904, ""), (0x093C, "nukt")]),
    def(0xE002, &[(0x0905, ""), (0x093C, "nukt")]),
    def(0xE003, &[(0x0906, ""), (0x093C, "nukt")]),
    def(0xE004, &[(0x0907, ""), (0x093C, "nukt")]),
    def(0xE005, &[(0x0908, ""), (0x093C, "nukt")]),
    def(0xE006, &[(0x0909, ""), (0x093C, "nukt")]),
    def(0xE007, &[(0x090A, ""), (0x093C, "nukt")]),
    def(0xE008, &[(0x090B, ""), (0x093C, "nukt")]),
    def(0xE009, &[(0x090C, ""), (0x093C, "nukt")]),
    def(0xE00A, &[(0x090D, ""), (0x093C, "nukt")]),
    def(0xE00B, &[(0x090E, ""), (0x093C, "nukt")]),
    def(0xE00C, &[(0x090F, ""), (0x093C, "nukt")]),
    def(0xE00D, &[(0x0910, ""), (0x093C, "nukt")]),
    def(0xE00E, &[(0x0911, ""), (0x093C, "nukt")]),
    def(0xE00F, &[(0x0912, ""), (0x093C, "nukt")]),
    def(0xE010, &[(0x0913, ""), (0x093C, "nukt")]),
    def(0xE011, &[(0x0914, ""), (0x093C, "nukt")]),
    def(0xE012, &[(0x0960, ""), (0x093C, "nukt")]),
    def(0xE013, &[(0x0961, ""), (0x093C, "nukt")]),
    def(0xE014, &[(0x0972, ""), (0x093C, "nukt")]),
    def(0xE015, &[(0x0918, ""), (0x093C, "nukt")]),
    def(0xE016, &[(0x0919, ""), (0x093C, "nukt")]),
    def(0xE017, &[(0x091A, ""), (0x093C, "nukt")]),
    def(0xE018, &[(0x091B, ""), (0x093C, "nukt")]),
    def(0xE019, &[(0x091D, ""), (0x093C, "nukt")]),
    def(0xE01A, &[(0x091E, ""), (0x093C, "nukt")]),
    def(0xE01B, &[(0x091F, ""), (0x093C, "nukt")]),
    def(0xE01C, &[(0x0920, ""), (0x093C, "nukt")]),
    def(0xE01D, &[(0x0923, ""), (0x093C, "nukt")]),
    def(0xE01E, &[(0x0924, ""), (0x093C, "nukt")]),
    def(0xE01F, &[(0x0925, ""), (0x093C, "nukt")]),
    def(0xE020, &[(0x0926, ""), (0x093C, "nukt")]),
    def(0xE021, &[(0x0927, ""), (0x093C, "nukt")]),
    def(0xE022, &[(0x092A, ""), (0x093C, "nukt")]),
    def(0xE023, &[(0x092C, ""), (0x093C, "nukt")]),
    def(0xE024, &[(0x092D, ""), (0x093C, "nukt")]),
    def(0xE025, &[(0x092E, ""), (0x093C, "nukt")]),
    def(0xE026, &[(0x0932, ""), (0x093C, "nukt")]),
    def(0xE027, &[(0x0935, ""), (0x093C, "nukt")]),
    def(0xE028, &[(0x0936, ""), (0x093C, "nukt")]),
    def(0xE029, &[(0x0937, ""), (0x093C, "nukt")]),
    def(0xE02A, &[(0x0938, ""), (0x093C, "nukt")]),
    def(0xE02B, &[(0x0939, ""), (0x093C, "nukt")]),
    def(0xE02C, &[(0x0915, ""), (0x094D, ""), (0x0937, "akhn")]),
    def(0xE02D, &[(0x091C, ""), (0x094D, ""), (0x091E, "akhn")]),
    def(0xE02E, &[(0x0930, ""), (0x094D, "rphf")]),
    def(0xE030, &[(0x0915, ""), (0x094D, "half")]),
    def(0xE031, &[(0x0916, ""), (0x094D, "half")]),
    def(0xE032, &[(0x0917, ""), (0x094D, "half")]),
    def(0xE033, &[(0x0918, ""), (0x094D, "half")]),
    def(0xE034, &[(0x0919, ""), (0x094D, "half")]),
    def(0xE035, &[(0x091A, ""), (0x094D, "half")]),
    def(0xE036, &[(0x091B, ""), (0x094D, "half")]),
    def(0xE037, &[(0x091C, ""), (0x094D, "half")]),
    def(0xE038, &[(0x091D, ""), (0x094D, "half")]),
    def(0xE039, &[(0x091E, ""), (0x094D, "half")]),
    def(0xE03A, &[(0x091F, ""), (0x094D, "half")]),
    def(0xE03B, &[(0x0920, ""), (0x094D, "half")]),
    def(0xE03C, &[(0x0921, ""), (0x094D, "half")]),
    def(0xE03D, &[(0x0922, ""), (0x094D, "half")]),
    def(0xE03E, &[(0x0923, ""), (0x094D, "half")]),
    def(0xE03F, &[(0x0924, ""), (0x094D, "half")]),
    def(0xE040, &[(0x0925, ""), (0x094D, "half")]),
    def(0xE041, &[(0x0926, ""), (0x094D, "half")]),
    def(0xE042, &[(0x0927, ""), (0x094D, "half")]),
    def(0xE043, &[(0x0928, ""), (0x094D, "half")]),
    def(0xE044, &[(0x092A, ""), (0x094D, "half")]),
    def(0xE045, &[(0x092B, ""), (0x094D, "half")]),
    def(0xE046, &[(0x092C, ""), (0x094D, "half")]),
    def(0xE047, &[(0x092D, ""), (0x094D, "half")]),
    def(0xE048, &[(0x092E, ""), (0x094D, "half")]),
    def(0xE049, &[(0x092F, ""), (0x094D, "half")]),
    def(0xE04A, &[(0x0930, ""), (0x094D, ""), (0x200D, "half")]),
    def(0xE04B, &[(0x0932, ""), (0x094D, "half")]),
    def(0xE04C, &[(0x0933, ""), (0x094D, "half")]),
    def(0xE04D, &[(0x0935, ""), (0x094D, "half")]),
    def(0xE04E, &[(0x0936, ""), (0x094D, "half")]),
    def(0xE04F, &[(0x0937, ""), (0x094D, "half")]),
    def(0xE050, &[(0x0938, ""), (0x094D, "half")]),
    def(0xE051, &[(0x0939, ""), (0x094D, "half")]),
    def(0xE052, &[(0x0979, ""), (0x094D, "half")]),
    def(0xE053, &[(0x097A, ""), (0x094D, "half")]),
    def(0xE054, &[(0x0915, ""), (0x094D, ""), (0x0937, "akhn"), (0x094D, "half")]),
    def(0xE055, &[(0x091C, ""), (0x094D, ""), (0x091E, "akhn"), (0x094D, "half")]),
    def(0xE056, &[(0x0958, ""), (0x094D, "half")]),
    def(0xE057, &[(0x0959, ""), (0x094D, "half")]),
    def(0xE058, &[(0x095A, ""), (0x094D, "half")]),
    def(0xE059, &[(0x0918, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE05A, &[(0x0919, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE05B, &[(0x091A, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE05C, &[(0x091B, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE05D, &[(0x095B, ""), (0x094D, "half")]),
    def(0xE05E, &[(0x091D, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE05F, &[(0x091E, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE060, &[(0x091F, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE061, &[(0x0920, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE062, &[(0x095C, ""), (0x094D, "half")]),
    def(0xE063, &[(0x095D, ""), (0x094D, "half")]),
    def(0xE064, &[(0x0923, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE065, &[(0x0924, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE066, &[(0x0925, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE067, &[(0x0926, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE068, &[(0x0927, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE069, &[(0x0929, ""), (0x094D, "half")]),
    def(0xE06A, &[(0x092A, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE06B, &[(0x095E, ""), (0x094D, "half")]),
    def(0xE06C, &[(0x092C, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE06D, &[(0x092D, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE06E, &[(0x092E, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE06F, &[(0x095F, ""), (0x094D, "half")]),
    def(0xE070, &[(0x0932, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE071, &[(0x0934, ""), (0x094D, "half")]),
    def(0xE072, &[(0x0935, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE073, &[(0x0936, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE074, &[(0x0937, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE075, &[(0x0938, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE076, &[(0x0939, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE077, &[(0x0915, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE078, &[(0x0916, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE079, &[(0x0917, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE07A, &[(0x0918, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE07B, &[(0x0919, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE07C, &[(0x091A, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE07D, &[(0x091B, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE07E, &[(0x091C, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE07F, &[(0x091D, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE080, &[(0x091E, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE081, &[(0x091F, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE082, &[(0x0920, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE083, &[(0x0921, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE084, &[(0x0922, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE085, &[(0x0923, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE086, &[(0x0924, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE087, &[(0x0925, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE088, &[(0x0926, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE089, &[(0x0927, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE08A, &[(0x0928, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE08B, &[(0x092A, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE08C, &[(0x092B, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE08D, &[(0x092C, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE08E, &[(0x092D, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE08F, &[(0x092E, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE090, &[(0x092F, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE092, &[(0x0932, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE093, &[(0x0933, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE094, &[(0x0935, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE095, &[(0x0936, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE096, &[(0x0937, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE097, &[(0x0938, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE098, &[(0x0939, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE099, &[(0x0978, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE09A, &[(0x0979, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE09B, &[(0x097A, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE09C, &[(0x0915, ""), (0x094D, ""), (0x0937, "akhn"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE09D, &[(0x091C, ""), (0x094D, ""), (0x091E, "akhn"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE09E, &[(0x0958, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE09F, &[(0x0959, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A0, &[(0x095A, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A1, &[(0x0918, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A2, &[(0x0919, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A3, &[(0x091A, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A4, &[(0x091B, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A5, &[(0x095B, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A6, &[(0x091D, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A7, &[(0x091E, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A8, &[(0x091F, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0A9, &[(0x0920, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0AA, &[(0x095C, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0AB, &[(0x095D, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0AC, &[(0x0923, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0AD, &[(0x0924, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0AE, &[(0x0925, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0AF, &[(0x0926, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B0, &[(0x0927, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B1, &[(0x0929, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B2, &[(0x092A, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B3, &[(0x095E, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B4, &[(0x092C, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B5, &[(0x092D, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B6, &[(0x092E, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B7, &[(0x095F, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B8, &[(0x0931, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0B9, &[(0x0932, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0BA, &[(0x0934, ""), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0BB, &[(0x0935, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0BC, &[(0x0936, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0BD, &[(0x0937, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0BE, &[(0x0938, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0BF, &[(0x0939, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf")]),
    def(0xE0C0, &[(0x0915, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0C1, &[(0x0916, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0C2, &[(0x0917, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0C3, &[(0x0918, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0C4, &[(0x0919, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0C5, &[(0x091A, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0C6, &[(0x091B, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0C7, &[(0x091C, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0C8, &[(0x091D, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0C9, &[(0x091E, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0CA, &[(0x091F, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0CB, &[(0x0920, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0CC, &[(0x0921, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0CD, &[(0x0922, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0CE, &[(0x0923, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0CF, &[(0x0924, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0D0, &[(0x0925, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0D1, &[(0x0926, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0D2, &[(0x0927, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0D3, &[(0x0928, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0D4, &[(0x092A, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0D5, &[(0x092B, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0D6, &[(0x092C, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0D7, &[(0x092D, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0D8, &[(0x092E, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0D9, &[(0x092F, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0DA, &[(0x0930, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0DB, &[(0x0932, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0DC, &[(0x0933, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0DD, &[(0x0935, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0DE, &[(0x0936, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0DF, &[(0x0937, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0E0, &[(0x0938, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0E1, &[(0x0939, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0E2, &[(0x0979, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0E3, &[(0x097A, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0E4, &[(0x0915, ""), (0x094D, ""), (0x0937, "akhn"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0E5, &[(0x091C, ""), (0x094D, ""), (0x091E, "akhn"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0E6, &[(0x0958, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0E7, &[(0x0959, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0E8, &[(0x095A, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0E9, &[(0x0918, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0EA, &[(0x0919, ""), (0x093C, "nukt"), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0EB, &[(0x091A, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0EC, &[(0x091B, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0ED, &[(0x095B, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0EE, &[(0x091D, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0EF, &[(0x091E, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0F0, &[(0x091F, ""), (0x093C, "nukt"), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0F1, &[(0x0920, ""), (0x093C, "nukt"), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0F2, &[(0x095C, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0F3, &[(0x095D, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0F4, &[(0x0923, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0F5, &[(0x0924, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0F6, &[(0x0925, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0F7, &[(0x0926, ""), (0x093C, "nukt"), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE0F8, &[(0x0927, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0F9, &[(0x0929, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0FA, &[(0x092A, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0FB, &[(0x095E, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0FC, &[(0x092C, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0FD, &[(0x092D, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0FE, &[(0x092E, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE0FF, &[(0x095F, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE100, &[(0x0932, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE101, &[(0x0934, ""), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE102, &[(0x0935, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE103, &[(0x0936, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE104, &[(0x0937, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE105, &[(0x0938, ""), (0x093C, "nukt"), (0x094D, ""), (0x0930, "rkrf"), (0x094D, "half")]),
    def(0xE106, &[(0x0939, ""), (0x093C, "nukt"), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE107, &[(0x0939, ""), (0x0941, "blws")]),
    def(0xE108, &[(0x0939, ""), (0x0942, "blws")]),
    def(0xE109, &[(0x0939, ""), (0x0943, "blws")]),
    def(0xE10A, &[(0x0939, ""), (0x0944, "blws")]),
    def(0xE10B, &[(0x0939, ""), (0x093C, "nukt"), (0x0941, "blws")]),
    def(0xE10C, &[(0x0939, ""), (0x093C, "nukt"), (0x0942, "blws")]),
    def(0xE10D, &[(0x0939, ""), (0x093C, "nukt"), (0x0943, "blws")]),
    def(0xE10E, &[(0x0939, ""), (0x093C, "nukt"), (0x0944, "blws")]),
    def(0xE10F, &[(0x0939, ""), (0x094D, ""), (0x0930, "rkrf"), (0x0941, "blws")]),
    def(0xE110, &[(0x0939, ""), (0x094D, ""), (0x0930, "rkrf"), (0x0942, "blws")]),
    def(0xE111, &[(0x0930, ""), (0x0941, "blws")]),
    def(0xE112, &[(0x0930, ""), (0x0942, "blws")]),
    def(0xE113, &[(0x0926, ""), (0x0941, "blws")]),
    def(0xE114, &[(0x0926, ""), (0x0942, "blws")]),
    def(0xE115, &[(0x0926, ""), (0x0943, "blws")]),
    def(0xE116, &[(0x0931, ""), (0x0941, "blws")]),
    def(0xE117, &[(0x0931, ""), (0x0942, "blws")]),
    def(0xE118, &[(0x0926, ""), (0x093C, ""), (0x0941, "blws")]),
    def(0xE119, &[(0x0926, ""), (0x093C, ""), (0x0942, "blws")]),
    def(0xE11A, &[(0x0926, ""), (0x093C, ""), (0x0943, "blws")]),
    def(0xE11B, &[(0x093A, ""), (0x0902, "abvs")]),
    def(0xE11C, &[(0x093A, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE11D, &[(0x093A, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE11E, &[(0x093B, ""), (0x0902, "abvs")]),
    def(0xE11F, &[(0x093B, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE120, &[(0x093B, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE121, &[(0x0940, ""), (0x0902, "abvs")]),
    def(0xE123, &[(0x0940, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE124, &[(0x0945, ""), (0x0902, "abvs")]),
    def(0xE125, &[(0x0945, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE126, &[(0x0945, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE127, &[(0x0946, ""), (0x0902, "abvs")]),
    def(0xE128, &[(0x0946, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE129, &[(0x0946, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE12A, &[(0x0947, ""), (0x0902, "abvs")]),
    def(0xE12B, &[(0x0947, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE12C, &[(0x0947, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE12D, &[(0x0948, ""), (0x0902, "abvs")]),
    def(0xE12E, &[(0x0948, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE12F, &[(0x0948, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE130, &[(0x0949, ""), (0x0902, "abvs")]),
    def(0xE131, &[(0x0949, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE132, &[(0x0949, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE133, &[(0x094A, ""), (0x0902, "abvs")]),
    def(0xE134, &[(0x094A, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE135, &[(0x094A, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE136, &[(0x094B, ""), (0x0902, "abvs")]),
    def(0xE137, &[(0x094B, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE138, &[(0x094B, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE139, &[(0x094C, ""), (0x0902, "abvs")]),
    def(0xE13A, &[(0x094C, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE13B, &[(0x094C, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE13C, &[(0x094F, ""), (0x0902, "abvs")]),
    def(0xE13D, &[(0x094F, ""), (0x0930, ""), (0x094D, "rphf.abvs")]),
    def(0xE13E, &[(0x094F, ""), (0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs.abvs")]),
    def(0xE13F, &[(0x0930, ""), (0x094D, "rphf"), (0x0902, "abvs")]),
    def(0xE140, &[(0x0904, ""), (0x0902, "abvs")]),
    def(0xE141, &[(0x0908, ""), (0x0902, "abvs")]),
    def(0xE142, &[(0x090D, ""), (0x0902, "abvs")]),
    def(0xE143, &[(0x090E, ""), (0x0902, "abvs")]),
    def(0xE144, &[(0x0910, ""), (0x0902, "abvs")]),
    def(0xE145, &[(0x0911, ""), (0x0902, "abvs")]),
    def(0xE146, &[(0x0912, ""), (0x0902, "abvs")]),
    def(0xE147, &[(0x0913, ""), (0x0902, "abvs")]),
    def(0xE148, &[(0x0914, ""), (0x0902, "abvs")]),
    def(0xE149, &[(0x0972, ""), (0x0902, "abvs")]),
    def(0xE14A, &[(0x0973, ""), (0x0902, "abvs")]),
    def(0xE14B, &[(0x0974, ""), (0x0902, "abvs")]),
    def(0xE14C, &[(0x0975, ""), (0x0902, "abvs")]),
    def(0xE14D, &[(0x0904, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE14E, &[(0x0908, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE14F, &[(0x090D, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE150, &[(0x090E, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE151, &[(0x0910, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE152, &[(0x0911, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE153, &[(0x0912, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE154, &[(0x0913, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE155, &[(0x0914, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE156, &[(0x0972, ""), (0x093C, "nukt"), (0x0902, "abvs")]),
    def(0xE157, &[(0x0915, ""), (0x094D, "half"), (0x0924, "pres")]),
    def(0xE158, &[(0x0919, ""), (0x094D, ""), (0x0917, "cjct")]),
    def(0xE159, &[(0x0919, ""), (0x094D, ""), (0x092E, "cjct")]),
    def(0xE15A, &[(0x0919, ""), (0x094D, ""), (0x092F, "cjct")]),
    def(0xE15B, &[(0x091B, ""), (0x094D, "half"), (0x092F, "pres")]),
    def(0xE15C, &[(0x091E, ""), (0x094D, "half"), (0x091C, "pres")]),
    def(0xE15D, &[(0x091F, ""), (0x094D, ""), (0x091F, "cjct")]),
    def(0xE15E, &[(0x091F, ""), (0x094D, ""), (0x091F, ""), (0x0942, "cjct")]),
    def(0xE15F, &[(0x091F, ""), (0x094D, ""), (0x0920, "cjct")]),
    def(0xE160, &[(0x091F, ""), (0x094D, ""), (0x0920, ""), (0x0942, "cjct")]),
    def(0xE161, &[(0x091F, ""), (0x094D, ""), (0x092F, "cjct")]),
    def(0xE162, &[(0x0920, ""), (0x094D, ""), (0x0920, "cjct")]),
    def(0xE163, &[(0x0920, ""), (0x094D, ""), (0x092F, "cjct")]),
    def(0xE164, &[(0x0921, ""), (0x094D, ""), (0x0922, "cjct")]),
    def(0xE165, &[(0x0921, ""), (0x094D, ""), (0x0921, "cjct")]),
    def(0xE166, &[(0x0921, ""), (0x094D, ""), (0x0921, ""), (0x0942, "cjct")]),
    def(0xE167, &[(0x0921, ""), (0x094D, ""), (0x092F, "cjct")]),
    def(0xE168, &[(0x0922, ""), (0x094D, ""), (0x0922, "cjct")]),
    def(0xE169, &[(0x0922, ""), (0x094D, ""), (0x092F, "cjct")]),
    def(0xE16A, &[(0x0924, ""), (0x094D, "half"), (0x0924, "pres")]),
    def(0xE16B, &[(0x0924, ""), (0x094D, "half"), (0x0924, ""), (0x094D, "half.pres")]),
    def(0xE16C, &[(0x0926, ""), (0x094D, ""), (0x0918, "cjct")]),
    def(0xE16D, &[(0x0926, ""), (0x094D, ""), (0x0917, "cjct")]),
    def(0xE16E, &[(0x0926, ""), (0x094D, ""), (0x092C, "cjct")]),
    def(0xE16F, &[(0x0926, ""), (0x094D, ""), (0x092D, "cjct")]),
    def(0xE170, &[(0x0926, ""), (0x094D, ""), (0x0935, "cjct")]),
    def(0xE171, &[(0x0926, ""), (0x094D, ""), (0x0927, "cjct")]),
    def(0xE172, &[(0x0926, ""), (0x094D, ""), (0x0927, ""), (0x094D, "half"), (0x092F, "cjct")]),
    def(0xE173, &[(0x0926, ""), (0x094D, ""), (0x0926, "cjct")]),
    def(0xE174, &[(0x0926, ""), (0x094D, ""), (0x092E, "cjct")]),
    def(0xE175, &[(0x0926, ""), (0x094D, ""), (0x092F, "cjct")]),
    def(0xE176, &[(0x0926, ""), (0x094D, ""), (0x092F, ""), (0x094D, "half.pres")]),
    def(0xE177, &[(0x0928, ""), (0x094D, "half"), (0x0928, "pres")]),
    def(0xE178, &[(0x092A, ""), (0x094D, "half"), (0x0928, "pres")]),
    def(0xE179, &[(0x0935, ""), (0x094D, "half"), (0x092F, "pres")]),
    def(0xE17A, &[(0x0936, ""), (0x094D, "half"), (0x091A, "pres")]),
    def(0xE17B, &[(0x0936, ""), (0x094D, "half"), (0x091A, ""), (0x094D, "half.pres")]),
    def(0xE17C, &[(0x0936, ""), (0x094D, "half"), (0x0935, "pres")]),
    def(0xE17D, &[(0x0936, ""), (0x094D, "half"), (0x0935, ""), (0x094D, "half.pres")]),
    def(0xE17E, &[(0x0936, ""), (0x094D, "half"), (0x0932, "pres")]),
    def(0xE17F, &[(0x0936, ""), (0x094D, "half"), (0x0928, "pres")]),
    def(0xE180, &[(0x0937, ""), (0x094D, "half"), (0x091F, "pres")]),
    def(0xE181, &[(0x0937, ""), (0x094D, "half"), (0x091F, ""), (0x094D, ""), (0x0930, "rkrf.pres")]),
    def(0xE182, &[(0x0937, ""), (0x094D, "half"), (0x0920, "pres")]),
    def(0xE183, &[(0x0937, ""), (0x094D, "half"), (0x0920, ""), (0x094D, ""), (0x0930, "rkrf.pres")]),
    def(0xE184, &[(0x0939, ""), (0x094D, "half"), (0x0923, "pres")]),
    def(0xE185, &[(0x0939, ""), (0x094D, "half"), (0x0928, "pres")]),
    def(0xE186, &[(0x0939, ""), (0x094D, "half"), (0x092E, "pres")]),
    def(0xE187, &[(0x0939, ""), (0x094D, "half"), (0x092F, "pres")]),
    def(0xE188, &[(0x0939, ""), (0x094D, "half"), (0x0932, "pres")]),
    def(0xE189, &[(0x0939, ""), (0x094D, "half"), (0x0935, "pres")]),
    def(0xE18A, &[(0x091B, ""), (0x094D, "half")]),
    def(0xE18B, &[(0x091B, ""), (0x093C, "nukt"), (0x094D, "half")]),
    def(0xE18C, &[(0x091B, ""), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE18D, &[(0x091B, ""), (0x093C, "nukt"), (0x094D, "half"), (0x0930, ""), (0x094D, "blwf.vatu")]),
    def(0xE19E, &[(0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs")]),
    def(0xE19F, &[(0x093A, ""), (0x0901, "abvs")]),
    def(0xE1A0, &[(0x093B, ""), (0x0901, "abvs")]),
    def(0xE1A1, &[(0x0945, ""), (0x0901, "abvs")]),
    def(0xE1A2, &[(0x0946, ""), (0x0901, "abvs")]),
    def(0xE1A3, &[(0x0947, ""), (0x0901, "abvs")]),
    def(0xE1A4, &[(0x0948, ""), (0x0901, "abvs")]),
    def(0xE1A5, &[(0x0949, ""), (0x0901, "abvs")]),
    def(0xE1A6, &[(0x094A, ""), (0x0901, "abvs")]),
    def(0xE1A7, &[(0x094B, ""), (0x0901, "abvs")]),
    def(0xE1A8, &[(0x094C, ""), (0x0901, "abvs")]),
    def(0xE1A9, &[(0x094F, ""), (0x0901, "abvs")]),
    def(0xE1AA, &[(0x0940, ""), (0x0901, "abvs")]),
    def(0xE1AB, &[(0x093A, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1AC, &[(0x093B, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1AD, &[(0x0945, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1AE, &[(0x0946, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1AF, &[(0x0947, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1B0, &[(0x0948, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1B1, &[(0x0949, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1B2, &[(0x094A, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1B3, &[(0x094B, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1B4, &[(0x094C, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1B5, &[(0x094F, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1B6, &[(0x0940, ""), (0x0930, ""), (0x094D, "rphf"), (0x0901, "abvs.abvs")]),
    def(0xE1B7, &[(0xA8E1, ""), (0xA8E1, "abvs")]),
    def(0xE1B8, &[(0xA8E2, ""), (0xA8EB, "abvs")]),
    def(0xE1B9, &[(0xA8E3, ""), (0xA8EC, "abvs")]),
    def(0xE1BA, &[(0xA8E1, ""), (0xA8EF, "abvs")]),
    def(0xE1BB, &[(0xA8E2, ""), (0xA8EF, "abvs")]),
    def(0xE1BC, &[(0xA8E3, ""), (0xA8EF, "abvs")]),
    def(0xE1BD, &[(0xA8E4, ""), (0xA8EF, "abvs")]),
    def(0xE1BE, &[(0xA8E5, ""), (0xA8EF, "abvs")]),
    def(0xE1BF, &[(0xA8E2, ""), (0xA8F1, "abvs")]),
    def(0xE1C0, &[(0xA8E2, ""), (0x1CD0, "abvs")]),
    def(0xE1C1, &[(0xA8F0, ""), (0xA8EF, "abvs")]),
    def(0xE1C2, &[(0x0903, ""), (0x1CE2, "psts")]),
    def(0xE1C3, &[(0x0903, ""), (0x1CE4, "psts")]),
    def(0xE1C4, &[(0x0903, ""), (0x1CE5, "psts")]),
    def(0xE1C5, &[(0x0903, ""), (0x1CE8, "psts")]),
];

#![no_main]

use granth_text::pipeline::{is_separator, shape_text};
use granth_text::script::Script;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Interpret the bytes as UTF-16 code units.
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    for script in Script::ALL {
        // Shaping must never panic.
        let shaped = shape_text(script, &units);

        // Whitespace separators survive verbatim.
        let seps_in: Vec<u16> = units.iter().copied().filter(|&c| is_separator(c)).collect();
        let seps_out: Vec<u16> = shaped.iter().copied().filter(|&c| is_separator(c)).collect();
        assert_eq!(seps_in, seps_out);

        // Substitution only ever shrinks a word; the split-vowel passes add
        // at most one unit per code unit of input.
        assert!(shaped.len() <= units.len() * 2);
    }
});

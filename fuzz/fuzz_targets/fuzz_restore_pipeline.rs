#![no_main]

use granth_text::pipeline::{is_separator, restore_text};
use granth_text::script::{DocumentScripts, Script};
use granth_text::MAX_COMPONENTS;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|c| u16::from_le_bytes([c[0], c[1]]))
        .collect();

    for script in Script::ALL {
        // Restoration must never panic, even on text that was never shaped.
        let restored = restore_text(script, &units);

        // Each code unit expands to at most MAX_COMPONENTS.
        assert!(restored.len() <= units.len() * MAX_COMPONENTS);

        let seps_in: Vec<u16> = units.iter().copied().filter(|&c| is_separator(c)).collect();
        let seps_out: Vec<u16> = restored.iter().copied().filter(|&c| is_separator(c)).collect();
        assert_eq!(seps_in, seps_out);
    }

    // restore_all over arbitrary activation states must never panic.
    let mut doc = DocumentScripts::new();
    doc.detection_stride = 1;
    for script in Script::ALL {
        doc.ensure_active(script, &units);
    }
    let _ = doc.restore_all(&units);
});

#![no_main]

use arbitrary::Arbitrary;
use granth_text::script::{DocumentScripts, Script};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct GateInput {
    stride: u8,
    probes: Vec<Vec<u16>>,
}

fuzz_target!(|input: GateInput| {
    let mut doc = DocumentScripts::new();
    doc.detection_stride = input.stride as usize;

    for script in Script::ALL {
        let mut was_active = false;
        for probe in &input.probes {
            let active = doc.ensure_active(script, probe);

            // Activation is sticky: once on, never off.
            assert!(!was_active || active);
            assert_eq!(active, doc.is_active(script));
            was_active = active;

            // Shape/restore never panic in either activation state.
            let shaped = doc.shape(script, probe);
            let _ = doc.restore(script, &shaped);
            let _ = doc.restore_all(probe);
        }
    }
});

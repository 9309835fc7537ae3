#![no_main]

use libfuzzer_sys::fuzz_target;
use mzwave_backend_audio::mapping::map_spectrum;
use mzwave_spec::{parse_spectrum_text, AlgorithmParams};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(peaks) = parse_spectrum_text(text) else {
        return;
    };

    for algorithm in [
        AlgorithmParams::linear(),
        AlgorithmParams::inverse(),
        AlgorithmParams::modulo(),
    ] {
        // Mapping may reject a peak, but it must never panic, and every row
        // it returns must be finite.
        if let Ok(mapped) = map_spectrum(&peaks, &algorithm) {
            assert_eq!(mapped.len(), peaks.len());
            for m in &mapped {
                assert!(m.frequency.is_finite());
                assert!((0.0..=1.0).contains(&m.amplitude.linear));
            }
        }
    }
});

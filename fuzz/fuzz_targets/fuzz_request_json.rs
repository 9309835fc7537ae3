#![no_main]

use libfuzzer_sys::fuzz_target;
use mzwave_spec::{canonical_request_hash, validate_request, SonifyRequest};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(request) = SonifyRequest::from_json(text) else {
        return;
    };

    let result = validate_request(&request);
    let _ = canonical_request_hash(&request);

    // Validation implies the peak source resolves.
    if result.is_ok() {
        assert!(request.resolve_peaks().is_ok());
    }
});

//! Fuzz target for `ErrorPath::parse`.
//!
//! Anything that parses must display back to the same (trimmed) text and have consistent ancestry.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_error_path
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use propguard_types::ErrorPath;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(path) = ErrorPath::parse(text) else {
        return;
    };

    assert_eq!(path.to_string(), text.trim());
    assert_eq!(path.ancestors().count(), path.len() + 1);
    for ancestor in path.ancestors() {
        assert!(path.starts_with(&ancestor));
    }
    if let Some(parent) = path.parent() {
        assert_eq!(parent.len() + 1, path.len());
    }
});

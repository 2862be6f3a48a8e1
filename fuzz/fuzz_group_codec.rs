//! Fuzz target for the flat tag-group codec.
//!
//! Run with: cargo +nightly fuzz run fuzz_group_codec
//!
//! Decodes arbitrary text into tag groups and re-encodes the result. Decoded
//! groups must never be empty-tagged, and re-encoding must not panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

use reelmark_config::{decode_groups, encode_groups};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let groups = decode_groups(s);
        // Hard invariant: a label-only line never survives decoding.
        assert!(groups.iter().all(|g| !g.tags.is_empty()));
        let _ = encode_groups(&groups);
    }
});

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index loading.
//!
//! Arbitrary bytes must either load or be rejected with an error. A loaded
//! index must answer a plain query without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use lunrex::Index;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(index) = Index::from_json(json) {
        let _ = index.search("a");
        let _ = index.search("a*");
    }
});

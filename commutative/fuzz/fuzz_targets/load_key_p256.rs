// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Fuzz target for key loading.

#![no_main]

use commutative::cipher::key::Key;
use commutative::context::P256Ctx;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(key) = Key::<P256Ctx>::load(data) {
        assert_eq!(key.to_bytes().as_slice(), data);
    }
});

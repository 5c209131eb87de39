// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Fuzz target for P-256 element decoding.

#![no_main]

use commutative::cipher::codec;
use commutative::context::P256Ctx;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(element) = codec::decode::<P256Ctx>(data) {
        assert_eq!(codec::encode::<P256Ctx>(&element), data);
    }
});

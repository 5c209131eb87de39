// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Fuzz target for 32-byte Ristretto element decoding.

#![no_main]

use commutative::cipher::codec;
use commutative::context::RistrettoCtx;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: [u8; 32]| {
    if let Ok(element) = codec::decode::<RistrettoCtx>(&data) {
        assert_eq!(codec::encode::<RistrettoCtx>(&element), data);
    }
});

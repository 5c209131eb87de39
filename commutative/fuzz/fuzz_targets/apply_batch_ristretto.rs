// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Fuzz target for batch application: arbitrary batches either fail as a
//! whole or round trip.

#![no_main]

use commutative::cipher::batch::{self, Direction};
use commutative::cipher::key::Key;
use commutative::context::RistrettoCtx;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, Vec<Vec<u8>>)| {
    let (key, elements) = input;
    let Ok(key) = Key::<RistrettoCtx>::load(&key) else {
        return;
    };

    if let Ok(encrypted) = batch::apply(&elements, &key, Direction::Forward) {
        assert_eq!(encrypted.len(), elements.len());
        let decrypted = batch::apply(&encrypted, &key, Direction::Inverse).unwrap();
        assert_eq!(decrypted, elements);
    }
});

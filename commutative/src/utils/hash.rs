// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Hashing

use sha3::Digest;

/// 256-bit hasher, used by P-256 hash to curve.
pub type Hasher256 = sha3::Sha3_256;

/// 512-bit hasher, used by Ristretto hash to group.
pub type Hasher512 = sha3::Sha3_512;

/// Feed input slices and domain separation tags into `hasher`.
///
/// Each slice is prefixed with its length so that `["ab", "c"]` and
/// `["a", "bc"]` produce different digests.
pub fn update_hasher<D: Digest>(hasher: &mut D, input_slices: &[&[u8]], ds_tags: &[&[u8]]) {
    for tag in ds_tags {
        hasher.update((tag.len() as u64).to_be_bytes());
        hasher.update(tag);
    }
    for input in input_slices {
        hasher.update((input.len() as u64).to_be_bytes());
        hasher.update(input);
    }
}

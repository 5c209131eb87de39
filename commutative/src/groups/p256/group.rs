// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! The NIST P-256 prime order group

use crate::groups::p256::{P256Element, P256Scalar};
use crate::traits::groups::CryptographicGroup;
use crate::utils::error::Error;
use crate::utils::hash::Hasher256;

use p256::elliptic_curve::hash2curve::{ExpandMsgXmd, GroupDigest};
use p256::{NistP256, ProjectivePoint};

/// The P-256 curve group with its standard generator.
#[derive(Debug, Clone)]
pub struct P256Group;

impl CryptographicGroup for P256Group {
    type Element = P256Element;
    type Scalar = P256Scalar;

    fn generator() -> P256Element {
        P256Element::new(ProjectivePoint::GENERATOR)
    }

    /// Hash to curve with `P256_XMD:SHA3-256_SSWU_RO_`.
    ///
    /// # Errors
    ///
    /// - `HashToElementError` if `ds_tags` is empty or the hash to curve
    ///   expansion fails
    fn hash_to_element(input_slices: &[&[u8]], ds_tags: &[&[u8]]) -> Result<P256Element, Error> {
        if ds_tags.is_empty() {
            return Err(Error::HashToElementError(
                "P-256 hash to curve requires a domain separation tag".to_string(),
            ));
        }

        NistP256::hash_from_bytes::<ExpandMsgXmd<Hasher256>>(input_slices, ds_tags)
            .map(P256Element::new)
            .map_err(|e| Error::HashToElementError(e.to_string()))
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! The Ristretto prime order group

use crate::groups::ristretto255::{RistrettoElement, RistrettoScalar};
use crate::traits::groups::CryptographicGroup;
use crate::utils::error::Error;
use crate::utils::hash::{self, Hasher512};

use curve25519_dalek::RistrettoPoint;
use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;

/// The Ristretto group over curve25519, with the standard base point.
#[derive(Debug, Clone)]
pub struct Ristretto255Group;

impl CryptographicGroup for Ristretto255Group {
    type Element = RistrettoElement;
    type Scalar = RistrettoScalar;

    #[inline]
    fn generator() -> RistrettoElement {
        RistrettoElement::new(RISTRETTO_BASEPOINT_POINT)
    }

    // dalek keeps a precomputed table for the base point
    #[inline]
    fn g_exp(scalar: &RistrettoScalar) -> RistrettoElement {
        RistrettoElement::new(RistrettoPoint::mul_base(&scalar.0))
    }

    /// Maps the tagged input through a 64 byte digest and the Elligator
    /// based Ristretto map.
    ///
    /// # Errors
    ///
    /// Infallible
    fn hash_to_element(input_slices: &[&[u8]], ds_tags: &[&[u8]]) -> Result<RistrettoElement, Error> {
        let mut hasher = Hasher512::default();
        hash::update_hasher(&mut hasher, input_slices, ds_tags);

        Ok(RistrettoElement::from_hash::<Hasher512>(hasher))
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! GroupElement implementations for the Ristretto255 group

use crate::groups::ristretto255::{ELEMENT_BYTES, RistrettoScalar};
use crate::traits::groups::GroupElement;
use crate::utils::error::EncodingError;
use crate::utils::rng;
use crate::utils::serialization::{FDeserializable, FSerializable, fixed_array};
use curve25519_dalek::RistrettoPoint;
use curve25519_dalek::ristretto::CompressedRistretto;
use curve25519_dalek::traits::Identity;
use sha3::digest::Digest;
use sha3::digest::typenum::U64;

/**
 * A [`GroupElement`] implementation for the [Ristretto](https://docs.rs/curve25519-dalek/latest/curve25519_dalek/ristretto/index.html) group.
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RistrettoElement(pub RistrettoPoint);

impl RistrettoElement {
    /// Create a new `RistrettoElement` from a dalek [RistrettoPoint](https://docs.rs/curve25519-dalek/latest/curve25519_dalek/ristretto/struct.RistrettoPoint.html).
    #[must_use]
    pub fn new(point: RistrettoPoint) -> Self {
        RistrettoElement(point)
    }

    /// Create a new `RistrettoElement` from a hash.
    ///
    /// See [`RistrettoPoint::from_hash`](https://docs.rs/curve25519-dalek/latest/curve25519_dalek/ristretto/struct.RistrettoPoint.html#method.from_hash) for details.
    pub fn from_hash<D: Digest<OutputSize = U64> + Default>(hasher: D) -> Self {
        RistrettoElement(RistrettoPoint::from_hash::<D>(hasher))
    }
}

impl GroupElement for RistrettoElement {
    type Scalar = RistrettoScalar;

    #[inline]
    fn one() -> Self {
        RistrettoElement(RistrettoPoint::identity())
    }

    #[inline]
    fn mul(&self, other: &Self) -> Self {
        // curve arithmetic
        #[allow(clippy::arithmetic_side_effects)]
        RistrettoElement(self.0 + other.0)
    }

    // variable base scalar multiplication in dalek is constant time
    #[inline]
    fn exp(&self, scalar: &Self::Scalar) -> Self {
        // curve arithmetic
        #[allow(clippy::arithmetic_side_effects)]
        RistrettoElement(self.0 * scalar.0)
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.0 == RistrettoPoint::identity()
    }

    #[inline]
    fn random<R: rng::CRng>(rng: &mut R) -> Self {
        RistrettoElement(RistrettoPoint::random(rng))
    }
}

impl FSerializable for RistrettoElement {
    fn size_bytes() -> usize {
        ELEMENT_BYTES
    }

    fn ser_into(&self, buffer: &mut Vec<u8>) {
        let bytes = self.0.compress().to_bytes();
        buffer.extend_from_slice(&bytes);
    }
}

impl FDeserializable for RistrettoElement {
    /// Parses a canonical Ristretto compression.
    ///
    /// Every decompressed point is a member of the prime order group; the
    /// identity compresses to all zeroes and is rejected.
    fn deser_f(buffer: &[u8]) -> Result<Self, EncodingError> {
        let bytes = fixed_array::<ELEMENT_BYTES>(buffer)?;
        let point = CompressedRistretto(bytes)
            .decompress()
            .ok_or(EncodingError::Malformed)?;

        let element = RistrettoElement(point);
        if element.is_identity() {
            return Err(EncodingError::Identity);
        }

        Ok(element)
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! GroupElement implementations for P-256 group

use crate::groups::p256::{ELEMENT_BYTES, P256Scalar};
use crate::traits::groups::GroupElement;
use crate::utils::error::EncodingError;
use crate::utils::rng;
use crate::utils::serialization::{FDeserializable, FSerializable, fixed_array};
use p256::elliptic_curve::group::{Curve, Group};
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{AffinePoint, EncodedPoint, ProjectivePoint};

/**
 * A [`GroupElement`] implementation for the P-256 group.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P256Element(pub ProjectivePoint);

impl P256Element {
    /// Create a new `P256Element` from a p256 [ProjectivePoint](https://docs.rs/p256/latest/p256/struct.ProjectivePoint.html).
    #[must_use]
    pub fn new(point: ProjectivePoint) -> Self {
        P256Element(point)
    }
}

#[allow(clippy::arithmetic_side_effects)]
impl GroupElement for P256Element {
    type Scalar = P256Scalar;

    fn one() -> Self {
        P256Element(ProjectivePoint::IDENTITY)
    }

    fn mul(&self, other: &Self) -> Self {
        P256Element(self.0 + other.0)
    }

    // ProjectivePoint * Scalar is a constant time double-and-add
    fn exp(&self, scalar: &Self::Scalar) -> Self {
        P256Element(self.0 * scalar.0)
    }

    fn is_identity(&self) -> bool {
        self.0.is_identity().into()
    }

    fn random<R: rng::CRng>(rng: &mut R) -> Self {
        P256Element(ProjectivePoint::random(rng))
    }
}

impl FSerializable for P256Element {
    fn size_bytes() -> usize {
        ELEMENT_BYTES
    }

    /// Writes the SEC1 compressed encoding.
    ///
    /// SEC1 encodes the identity as the single byte `0x00`; it is padded here
    /// to an all-zero string of full width, which [`FDeserializable::deser_f`]
    /// then rejects.
    fn ser_into(&self, buffer: &mut Vec<u8>) {
        let encoded = self.0.to_affine().to_encoded_point(true);
        let bytes = encoded.as_bytes();
        if bytes.len() == ELEMENT_BYTES {
            buffer.extend_from_slice(bytes);
        } else {
            buffer.extend_from_slice(&[0u8; ELEMENT_BYTES]);
        }
    }
}

impl FDeserializable for P256Element {
    /// Parses a SEC1 compressed point on the curve.
    ///
    /// P-256 has cofactor one, so every point on the curve is a member of
    /// the prime order group.
    fn deser_f(buffer: &[u8]) -> Result<Self, EncodingError> {
        let bytes = fixed_array::<ELEMENT_BYTES>(buffer)?;
        if bytes.iter().all(|b| *b == 0) {
            return Err(EncodingError::Identity);
        }

        let encoded = EncodedPoint::from_bytes(bytes).map_err(|_| EncodingError::Malformed)?;
        if !encoded.is_compressed() {
            return Err(EncodingError::Malformed);
        }

        let affine: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
        let point = ProjectivePoint::from(affine.ok_or(EncodingError::Malformed)?);
        let element = P256Element(point);
        if element.is_identity() {
            return Err(EncodingError::Identity);
        }

        Ok(element)
    }
}

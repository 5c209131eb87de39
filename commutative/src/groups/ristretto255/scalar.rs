// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Ristretto scalars modulo the group order `ℓ`

use crate::groups::ristretto255::SCALAR_BYTES;
use crate::traits::groups::GroupScalar;
use crate::utils::error::EncodingError;
use crate::utils::rng;
use crate::utils::serialization::{FDeserializable, FSerializable, fixed_array};
use curve25519_dalek::scalar::Scalar as DalekScalar;
use zeroize::Zeroize;

/// A dalek [`Scalar`](https://docs.rs/curve25519-dalek/latest/curve25519_dalek/scalar/struct.Scalar.html),
/// always held in reduced form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RistrettoScalar(pub DalekScalar);

// curve arithmetic
#[allow(clippy::arithmetic_side_effects)]
impl GroupScalar for RistrettoScalar {
    fn zero() -> Self {
        Self(DalekScalar::ZERO)
    }

    fn one() -> Self {
        Self(DalekScalar::ONE)
    }

    fn random<R: rng::CRng>(rng: &mut R) -> Self {
        Self(DalekScalar::random(rng))
    }

    fn add(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        Self(self.0 * other.0)
    }

    // dalek maps zero to zero, so it is excluded here
    fn inv(&self) -> Option<Self> {
        (!self.is_zero()).then(|| Self(self.0.invert()))
    }

    fn is_zero(&self) -> bool {
        self.0 == DalekScalar::ZERO
    }
}

impl From<u32> for RistrettoScalar {
    fn from(u: u32) -> Self {
        Self(DalekScalar::from(u))
    }
}

impl Zeroize for RistrettoScalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl FSerializable for RistrettoScalar {
    fn size_bytes() -> usize {
        SCALAR_BYTES
    }

    fn ser_into(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(self.0.as_bytes());
    }
}

impl FDeserializable for RistrettoScalar {
    /// Parses a canonical little-endian scalar, strictly smaller than `ℓ`.
    fn deser_f(buffer: &[u8]) -> Result<Self, EncodingError> {
        let bytes = fixed_array::<SCALAR_BYTES>(buffer)?;
        let canonical: Option<DalekScalar> = DalekScalar::from_canonical_bytes(bytes).into();

        canonical.map(Self).ok_or(EncodingError::Malformed)
    }
}

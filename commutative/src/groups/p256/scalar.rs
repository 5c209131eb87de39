// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! P-256 scalars modulo the group order `n`

use crate::groups::p256::SCALAR_BYTES;
use crate::traits::groups::GroupScalar;
use crate::utils::error::EncodingError;
use crate::utils::rng;
use crate::utils::serialization::{FDeserializable, FSerializable, fixed_array};
use p256::Scalar;
use p256::elliptic_curve::{Field, PrimeField};
use zeroize::Zeroize;

/// A p256 [`Scalar`](https://docs.rs/p256/latest/p256/struct.Scalar.html).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct P256Scalar(pub Scalar);

#[allow(clippy::arithmetic_side_effects)]
impl GroupScalar for P256Scalar {
    fn zero() -> Self {
        Self(Scalar::ZERO)
    }

    fn one() -> Self {
        Self(Scalar::ONE)
    }

    fn random<R: rng::CRng>(rng: &mut R) -> Self {
        Self(Scalar::random(rng))
    }

    fn add(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        Self(self.0 * other.0)
    }

    // constant time inversion; none for zero
    fn inv(&self) -> Option<Self> {
        Option::<Scalar>::from(self.0.invert()).map(Self)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero().into()
    }
}

impl From<u32> for P256Scalar {
    fn from(u: u32) -> Self {
        Self(Scalar::from(u64::from(u)))
    }
}

impl Zeroize for P256Scalar {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

impl FSerializable for P256Scalar {
    fn size_bytes() -> usize {
        SCALAR_BYTES
    }

    fn ser_into(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&self.0.to_bytes());
    }
}

impl FDeserializable for P256Scalar {
    /// Parses a big-endian integer strictly smaller than `n`.
    fn deser_f(buffer: &[u8]) -> Result<Self, EncodingError> {
        let bytes = fixed_array::<SCALAR_BYTES>(buffer)?;
        let reduced: Option<Scalar> = Scalar::from_repr(bytes.into()).into();

        reduced.map(Self).ok_or(EncodingError::Malformed)
    }
}

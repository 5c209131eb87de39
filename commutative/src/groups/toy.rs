// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Quadratic residues modulo the safe prime 2039, a cyclic group of prime order 1019.
//!
//! Discrete log is trivial here and the arithmetic is not constant time. The
//! group exists so that batch, codec and error handling logic can be tested
//! quickly and with hand-computable values.

use crate::traits::groups::{CryptographicGroup, GroupElement, GroupScalar};
use crate::utils::error::{EncodingError, Error};
use crate::utils::hash;
use crate::utils::rng;
use crate::utils::serialization::{FDeserializable, FSerializable, fixed_array};
use sha3::Digest;
use zeroize::Zeroize;

/// Safe prime modulus `P = 2Q + 1`.
pub(crate) const P: u32 = 2039;
/// Prime order of the residue subgroup.
pub(crate) const Q: u32 = 1019;
/// Generator of the residue subgroup (`2^2`).
const G: u32 = 4;

fn mod_pow(base: u32, mut exp: u32, modulus: u32) -> u32 {
    let m = u64::from(modulus);
    let mut base = u64::from(base) % m;
    let mut acc = 1u64;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    // acc < modulus <= u32::MAX
    acc as u32
}

/// An element of the toy group, stored as its residue in `[1, P)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ToyElement(pub u32);

/// A scalar of the toy group, stored in `[0, Q)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Zeroize)]
pub(crate) struct ToyScalar(pub u32);

impl GroupElement for ToyElement {
    type Scalar = ToyScalar;

    fn one() -> Self {
        ToyElement(1)
    }

    fn mul(&self, other: &Self) -> Self {
        ToyElement(((u64::from(self.0) * u64::from(other.0)) % u64::from(P)) as u32)
    }

    fn exp(&self, scalar: &Self::Scalar) -> Self {
        ToyElement(mod_pow(self.0, scalar.0, P))
    }

    fn is_identity(&self) -> bool {
        self.0 == 1
    }

    fn random<R: rng::CRng>(rng: &mut R) -> Self {
        ToyElement(G).exp(&ToyScalar::random(rng))
    }
}

impl GroupScalar for ToyScalar {
    fn zero() -> Self {
        ToyScalar(0)
    }

    fn one() -> Self {
        ToyScalar(1)
    }

    fn random<R: rng::CRng>(rng: &mut R) -> Self {
        ToyScalar(rng.next_u32() % Q)
    }

    fn add(&self, other: &Self) -> Self {
        ToyScalar((self.0 + other.0) % Q)
    }

    fn mul(&self, other: &Self) -> Self {
        ToyScalar(((u64::from(self.0) * u64::from(other.0)) % u64::from(Q)) as u32)
    }

    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(ToyScalar(mod_pow(self.0, Q - 2, Q)))
        }
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl FSerializable for ToyElement {
    fn size_bytes() -> usize {
        2
    }

    fn ser_into(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&(self.0 as u16).to_be_bytes());
    }
}

impl FDeserializable for ToyElement {
    fn deser_f(buffer: &[u8]) -> Result<Self, EncodingError> {
        let value = u32::from(u16::from_be_bytes(fixed_array::<2>(buffer)?));
        if value == 0 || value >= P || mod_pow(value, Q, P) != 1 {
            return Err(EncodingError::Malformed);
        }
        if value == 1 {
            return Err(EncodingError::Identity);
        }

        Ok(ToyElement(value))
    }
}

impl FSerializable for ToyScalar {
    fn size_bytes() -> usize {
        2
    }

    fn ser_into(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(&(self.0 as u16).to_be_bytes());
    }
}

impl FDeserializable for ToyScalar {
    fn deser_f(buffer: &[u8]) -> Result<Self, EncodingError> {
        let value = u32::from(u16::from_be_bytes(fixed_array::<2>(buffer)?));
        if value >= Q {
            return Err(EncodingError::Malformed);
        }

        Ok(ToyScalar(value))
    }
}

/// Toy implementation of [`CryptographicGroup`]
#[derive(Debug, Clone)]
pub(crate) struct ToyGroup;

impl CryptographicGroup for ToyGroup {
    type Element = ToyElement;
    type Scalar = ToyScalar;

    fn generator() -> Self::Element {
        ToyElement(G)
    }

    /// Squares a hashed residue, retrying with a counter until the result is not the identity.
    fn hash_to_element(input_slices: &[&[u8]], ds_tags: &[&[u8]]) -> Result<Self::Element, Error> {
        for counter in 0u32..64 {
            let mut hasher = hash::Hasher256::new();
            hash::update_hasher(&mut hasher, input_slices, ds_tags);
            hasher.update(counter.to_be_bytes());
            let digest = hasher.finalize();

            let mut prefix = [0u8; 8];
            prefix.copy_from_slice(&digest[..8]);
            let x = (u64::from_be_bytes(prefix) % u64::from(P - 1)) as u32 + 1;
            let element = ToyElement(x).mul(&ToyElement(x));
            if !element.is_identity() {
                return Ok(element);
            }
        }

        Err(Error::HashToElementError(
            "Failed to hash into the toy group".to_string(),
        ))
    }
}

mod tests {
    use super::*;

    #[test]
    fn test_toy_generator_has_prime_order() {
        assert_eq!(mod_pow(G, Q, P), 1);
        assert_ne!(G, 1);
    }

    #[test]
    fn test_toy_decode_rejects_non_residues() {
        // 2039 = 7 mod 8, so 2 is a residue and -1 is not
        let minus_one = (P - 1) as u16;
        assert_eq!(
            ToyElement::deser_f(&minus_one.to_be_bytes()),
            Err(EncodingError::Malformed)
        );
        assert_eq!(ToyElement::deser_f(&2u16.to_be_bytes()), Ok(ToyElement(2)));
        assert_eq!(
            ToyElement::deser_f(&1u16.to_be_bytes()),
            Err(EncodingError::Identity)
        );
        assert_eq!(
            ToyElement::deser_f(&(P as u16).to_be_bytes()),
            Err(EncodingError::Malformed)
        );
    }

    #[test]
    fn test_toy_scalar_inverse() {
        for k in 1..Q {
            let s = ToyScalar(k);
            assert_eq!(s.mul(&s.inv().unwrap()), ToyScalar::one());
        }
        assert!(ToyScalar::zero().inv().is_none());
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Private keys of the commutative cipher.

use crate::context::Context;
use crate::traits::groups::{CryptographicGroup, GroupScalar};
use crate::utils::error::{EncodingError, Error, KeyError};
use crate::utils::rng::CRng;
use crate::utils::serialization::{FDeserializable, FSerializable};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/**
 * A commutative cipher key: a scalar in `[1, order - 1]`.
 *
 * Keys are supplied fresh with every call and dropped when the call
 * returns; the scalar is zeroized on drop. `Key` implements neither
 * `PartialEq` nor a `Debug` that reveals the scalar.
 *
 * # Examples
 *
 * ```
 * use commutative::cipher::key::Key;
 * use commutative::context::P256Ctx;
 *
 * let key = Key::<P256Ctx>::generate();
 * let bytes = key.to_bytes();
 * assert_eq!(bytes.len(), 32);
 *
 * let loaded = Key::<P256Ctx>::load(&bytes).unwrap();
 * assert_eq!(*loaded.to_bytes(), *bytes);
 *
 * assert!(Key::<P256Ctx>::load(&[0u8; 32]).is_err());
 * ```
 */
pub struct Key<C: Context> {
    scalar: C::Scalar,
}

impl<C: Context> Key<C> {
    /// Load a key from its fixed width encoding.
    ///
    /// The encoding is that of the context's scalars (see
    /// [`Context`][`crate::context::Context`] implementors).
    ///
    /// # Errors
    ///
    /// - `InvalidKey(WrongLength)` if `secret` is not exactly one scalar wide
    /// - `InvalidKey(OutOfRange)` if the value is not smaller than the group order
    /// - `InvalidKey(Zero)` if the value is zero
    pub fn load(secret: &[u8]) -> Result<Self, Error> {
        let scalar = C::Scalar::deser_f(secret).map_err(|e| match e {
            EncodingError::WrongLength { expected, actual } => {
                KeyError::WrongLength { expected, actual }
            }
            EncodingError::Malformed | EncodingError::Identity => KeyError::OutOfRange,
        })?;

        Self::from_scalar(scalar)
    }

    /// Wrap an existing scalar.
    ///
    /// # Errors
    ///
    /// - `InvalidKey(Zero)` if `scalar` is zero
    pub fn from_scalar(mut scalar: C::Scalar) -> Result<Self, Error> {
        if scalar.is_zero() {
            scalar.zeroize();
            return Err(KeyError::Zero.into());
        }

        Ok(Key { scalar })
    }

    /// Generate a fresh key from the context's random number generator.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&mut C::get_rng())
    }

    /// Generate a fresh key from the given generator.
    #[must_use]
    pub fn generate_with<R: CRng>(rng: &mut R) -> Self {
        loop {
            // a zero draw has negligible probability in cryptographic groups
            if let Ok(key) = Self::from_scalar(C::G::random_scalar(rng)) {
                return key;
            }
        }
    }

    /// Export the key in the encoding accepted by [`Key::load`].
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.scalar.ser_f())
    }

    /// The key scalar.
    pub fn scalar(&self) -> &C::Scalar {
        &self.scalar
    }

    /// The multiplicative inverse of the key scalar, used to strip a layer.
    ///
    /// # Errors
    ///
    /// - `InternalArithmeticFailure` if the scalar has no inverse, which a
    ///   validated key never does
    pub fn inverse(&self) -> Result<Zeroizing<C::Scalar>, Error> {
        self.scalar
            .inv()
            .map(Zeroizing::new)
            .ok_or_else(|| Error::InternalArithmeticFailure("key scalar is not invertible".into()))
    }
}

impl<C: Context> Drop for Key<C> {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl<C: Context> ZeroizeOnDrop for Key<C> {}

impl<C: Context> std::fmt::Debug for Key<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(<redacted>)")
    }
}

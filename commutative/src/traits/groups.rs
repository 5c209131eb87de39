// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Group capability traits.
//!
//! The commutative cipher only needs a narrow slice of group arithmetic:
//! exponentiation of elements by scalars, scalar inversion, and identity
//! checks. Concrete groups implement these traits in [`crate::groups`]; the
//! rest of the crate is generic over them through
//! [`Context`][`crate::context::Context`].
//!
//! Groups are written multiplicatively, so scalar multiplication on a curve
//! is `exp`.

use crate::utils::error::Error;
use crate::utils::rng;
use std::fmt::Debug;
use zeroize::Zeroize;

/// An element of a prime order group.
pub trait GroupElement: Sized + Clone + Debug + Eq {
    /// The scalar type by which elements are exponentiated.
    type Scalar: GroupScalar;

    /// Returns the identity element.
    fn one() -> Self;

    /// Returns the group operation applied to `self` and `other`.
    fn mul(&self, other: &Self) -> Self;

    /// Returns `self` raised to `scalar`.
    ///
    /// Implementations must run in time independent of the bits of `scalar`.
    fn exp(&self, scalar: &Self::Scalar) -> Self;

    /// Returns true if this is the identity element.
    fn is_identity(&self) -> bool;

    /// Returns a uniformly random element.
    fn random<R: rng::CRng>(rng: &mut R) -> Self;
}

/// A scalar in the exponent field of a prime order group.
pub trait GroupScalar: Sized + Clone + Debug + Eq + Zeroize {
    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns the multiplicative identity.
    fn one() -> Self;

    /// Returns a uniformly random scalar.
    fn random<R: rng::CRng>(rng: &mut R) -> Self;

    /// Returns `self + other` modulo the group order.
    fn add(&self, other: &Self) -> Self;

    /// Returns `self * other` modulo the group order.
    fn mul(&self, other: &Self) -> Self;

    /// Returns the multiplicative inverse, or `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// Returns true if this is the zero scalar.
    fn is_zero(&self) -> bool;
}

/// A cyclic group of prime order with a fixed generator.
pub trait CryptographicGroup {
    /// Group elements.
    type Element: GroupElement<Scalar = Self::Scalar>;
    /// Exponent field scalars.
    type Scalar: GroupScalar;

    /// Returns the fixed group generator.
    fn generator() -> Self::Element;

    /// Returns the generator raised to `scalar`.
    ///
    /// Backends with a precomputed base table override this.
    fn g_exp(scalar: &Self::Scalar) -> Self::Element {
        Self::generator().exp(scalar)
    }

    /// Hash the input slices to a group element, under the given domain separation tags.
    ///
    /// This is the hashing-to-group step that maps identifiers into the group
    /// before they enter the cipher.
    ///
    /// # Errors
    ///
    /// - `HashToElementError` if the backend cannot hash the input
    fn hash_to_element(input_slices: &[&[u8]], ds_tags: &[&[u8]])
    -> Result<Self::Element, Error>;

    /// Returns a uniformly random element.
    fn random_element<R: rng::CRng>(rng: &mut R) -> Self::Element {
        Self::Element::random(rng)
    }

    /// Returns a uniformly random scalar.
    fn random_scalar<R: rng::CRng>(rng: &mut R) -> Self::Scalar {
        Self::Scalar::random(rng)
    }
}

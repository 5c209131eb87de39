// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Group selection for the commutative cipher.
//!
//! Every cipher and protocol entry point is generic over a [`Context`].
//! Ciphertexts from different contexts never interoperate: two parties
//! matching identifiers must agree on the context beforehand.
//!
//! | Context          | Group      | Element bytes | Key bytes | Key byte order |
//! |------------------|------------|---------------|-----------|----------------|
//! | [`P256Ctx`]      | NIST P-256 | 33            | 32        | big-endian     |
//! | [`RistrettoCtx`] | Ristretto  | 32            | 32        | little-endian  |

use rand::rngs::OsRng;

use crate::groups::{P256Group, Ristretto255Group};
use crate::traits::groups::{CryptographicGroup, GroupElement, GroupScalar};
use crate::utils::rng::Rng;
use crate::utils::serialization::FSer;

/**
 * The group, encodings and key generator a cipher instance runs over.
 *
 * The trait is sealed; the supported contexts are the ones in this module.
 *
 * # Examples
 *
 * ```
 * use commutative::context::{Context, P256Ctx};
 * use commutative::traits::groups::GroupElement;
 *
 * assert_eq!(P256Ctx::NAME, "p256");
 *
 * let e = P256Ctx::random_element();
 * let k = P256Ctx::random_scalar();
 * let g_k = P256Ctx::generator().exp(&k);
 * assert_ne!(g_k, e);
 * ```
 */
pub trait Context:
    private::Sealed + std::fmt::Debug + PartialEq + Clone + Send + Sync + 'static
{
    /// Short group name, recorded on protocol operation spans.
    const NAME: &'static str;

    /// Group elements, i.e. hashed identifiers and their ciphertexts.
    type Element: GroupElement<Scalar = Self::Scalar> + FSer + Send + Sync;

    /// Exponents, i.e. keys and their inverses.
    type Scalar: GroupScalar + FSer + Send + Sync;

    /// Key generation source.
    type Rng: Rng;

    /// The prime order group.
    type G: CryptographicGroup<Element = Self::Element, Scalar = Self::Scalar>;

    /// Returns a fresh key generation source.
    #[inline]
    #[must_use]
    fn get_rng() -> Self::Rng {
        Self::Rng::rng()
    }

    /// Returns a uniformly random element, e.g. a stand-in hashed identifier.
    #[must_use]
    fn random_element() -> Self::Element {
        Self::G::random_element(&mut Self::get_rng())
    }

    /// Returns a uniformly random scalar, possibly zero.
    #[must_use]
    fn random_scalar() -> Self::Scalar {
        Self::G::random_scalar(&mut Self::get_rng())
    }

    /// Returns the group generator.
    #[inline]
    #[must_use]
    fn generator() -> Self::Element {
        Self::G::generator()
    }
}

/// NIST P-256 with SEC1 compressed points; the [default][`DefaultCtx`].
#[derive(Debug, PartialEq, Clone, Hash)]
pub struct P256Ctx;

impl Context for P256Ctx {
    const NAME: &'static str = "p256";

    type Element = <P256Group as CryptographicGroup>::Element;
    type Scalar = <P256Group as CryptographicGroup>::Scalar;
    type Rng = OsRng;
    type G = P256Group;
}

/// Ristretto over curve25519 with canonical compressed points.
#[derive(Debug, PartialEq, Clone, Hash)]
pub struct RistrettoCtx;

impl Context for RistrettoCtx {
    const NAME: &'static str = "ristretto255";

    type Element = <Ristretto255Group as CryptographicGroup>::Element;
    type Scalar = <Ristretto255Group as CryptographicGroup>::Scalar;
    type Rng = OsRng;
    type G = Ristretto255Group;
}

/// The context used when none is specified: P-256, the curve deployed for
/// identifier matching.
pub type DefaultCtx = P256Ctx;

/// Test-only context over the [toy group][`crate::groups::toy`].
#[cfg(test)]
#[derive(Debug, PartialEq, Clone, Hash)]
pub(crate) struct ToyCtx;

#[cfg(test)]
impl Context for ToyCtx {
    const NAME: &'static str = "toy";

    type Element = crate::groups::toy::ToyElement;
    type Scalar = crate::groups::toy::ToyScalar;
    type Rng = OsRng;
    type G = crate::groups::toy::ToyGroup;
}

mod private {
    #[allow(unnameable_types)]
    pub trait Sealed {}

    impl Sealed for super::P256Ctx {}
    impl Sealed for super::RistrettoCtx {}
    #[cfg(test)]
    impl Sealed for super::ToyCtx {}
}

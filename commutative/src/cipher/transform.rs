// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! The keyed operation on a single group element.
//!
//! This is the only place in the crate where elements are exponentiated by
//! key material. Exponentiation delegates to
//! [`GroupElement::exp`][`crate::traits::groups::GroupElement::exp`], whose
//! curve implementations are constant time in the scalar.

use crate::cipher::key::Key;
use crate::context::Context;
use crate::traits::groups::GroupElement;
use crate::utils::error::Error;
use zeroize::Zeroizing;

/// Which way a transform moves an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Add a layer: `x -> x^k`.
    Forward,
    /// Strip a layer: `x -> x^(k^-1)`.
    Inverse,
}

/**
 * A transform bound to the exponent derived from one key and one direction.
 *
 * The exponent is computed once, so that inverting the key is not repeated
 * for every element of a batch, and is zeroized on drop.
 *
 * # Examples
 *
 * ```
 * use commutative::cipher::key::Key;
 * use commutative::cipher::transform::ScalarTransform;
 * use commutative::context::{Context, RistrettoCtx as Ctx};
 *
 * let key = Key::<Ctx>::generate();
 * let x = Ctx::random_element();
 *
 * let forward = ScalarTransform::forward(&key);
 * let inverse = ScalarTransform::inverse(&key).unwrap();
 *
 * let y = forward.apply(&x).unwrap();
 * assert_eq!(inverse.apply(&y).unwrap(), x);
 * ```
 */
pub struct ScalarTransform<C: Context> {
    exponent: Zeroizing<C::Scalar>,
    direction: Direction,
}

impl<C: Context> ScalarTransform<C> {
    /// Create a transform for the given key and direction.
    ///
    /// # Errors
    ///
    /// - `InternalArithmeticFailure` if the key cannot be inverted (see [`Key::inverse`])
    pub fn new(key: &Key<C>, direction: Direction) -> Result<Self, Error> {
        match direction {
            Direction::Forward => Ok(Self::forward(key)),
            Direction::Inverse => Self::inverse(key),
        }
    }

    /// Create a transform that adds the key's layer.
    #[must_use]
    pub fn forward(key: &Key<C>) -> Self {
        ScalarTransform {
            exponent: Zeroizing::new(key.scalar().clone()),
            direction: Direction::Forward,
        }
    }

    /// Create a transform that strips the key's layer.
    ///
    /// # Errors
    ///
    /// - `InternalArithmeticFailure` if the key cannot be inverted (see [`Key::inverse`])
    pub fn inverse(key: &Key<C>) -> Result<Self, Error> {
        Ok(ScalarTransform {
            exponent: key.inverse()?,
            direction: Direction::Inverse,
        })
    }

    /// The direction of this transform.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Apply the transform to one element.
    ///
    /// # Errors
    ///
    /// - `InternalArithmeticFailure` if the result is the identity. In a prime
    ///   order group this only happens for an identity input or a zero
    ///   exponent, both of which are rejected upstream.
    pub fn apply(&self, element: &C::Element) -> Result<C::Element, Error> {
        let ret = element.exp(&self.exponent);
        if ret.is_identity() {
            return Err(Error::InternalArithmeticFailure(format!(
                "{:?} transform produced the identity element",
                self.direction
            )));
        }

        Ok(ret)
    }
}

/// Add the key's layer to one element: `x^k`.
///
/// # Errors
///
/// See [`ScalarTransform::apply`].
pub fn forward<C: Context>(element: &C::Element, key: &Key<C>) -> Result<C::Element, Error> {
    ScalarTransform::forward(key).apply(element)
}

/// Strip the key's layer from one element: `x^(k^-1)`.
///
/// # Errors
///
/// See [`ScalarTransform::inverse`] and [`ScalarTransform::apply`].
pub fn inverse<C: Context>(element: &C::Element, key: &Key<C>) -> Result<C::Element, Error> {
    ScalarTransform::inverse(key)?.apply(element)
}

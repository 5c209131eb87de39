// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Randomness for key generation.
//!
//! Keys are the only secret values this crate draws at random. Any
//! generator that is both [`RngCore`] and [`CryptoRng`] may be passed to
//! [`Key::generate_with`][`crate::cipher::key::Key::generate_with`]; the
//! [context][`crate::context::Context`] supplies a default one.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// A cryptographically secure random number generator.
pub trait CRng: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng + ?Sized> CRng for T {}

/**
 * The default generator of a [context][`crate::context::Context`].
 *
 * A fresh instance is obtained for every draw, so concurrent key generation
 * never contends on shared generator state.
 */
pub trait Rng: CRng {
    /// Returns a generator instance.
    fn rng() -> Self;
}

/// Operating system entropy; stateless, so every instance is equivalent.
impl Rng for OsRng {
    fn rng() -> OsRng {
        OsRng
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Curve arithmetic backends
//!
//! # [`p256`]
//!
//! Group over curve P-256, backed by the [p256](https://github.com/RustCrypto/elliptic-curves/tree/master/p256) crate
//!
//! # [`ristretto255`]
//!
//! Group over the Ristretto group, backed by the [curve25519-dalek](https://github.com/dalek-cryptography/curve25519-dalek) crate
//!
//! # Examples
//!
//! ```
//! use commutative::context::Context;
//! use commutative::context::RistrettoCtx as Ctx;
//! use commutative::traits::groups::{GroupElement, GroupScalar};
//!
//! let e = Ctx::random_element();
//! let k1 = Ctx::random_scalar();
//! let k2 = Ctx::random_scalar();
//!
//! // exponentiation commutes across keys
//! assert_eq!(e.exp(&k1).exp(&k2), e.exp(&k2).exp(&k1));
//!
//! // and is undone by the inverse exponent
//! let k1_inv = k1.inv().unwrap();
//! assert_eq!(e.exp(&k1).exp(&k1_inv), e);
//! ```

/// Group over curve P-256, backed by the [p256](https://github.com/RustCrypto/elliptic-curves/tree/master/p256) crate
pub mod p256;

/// Group over the Ristretto group, backed by the [curve25519-dalek](https://github.com/dalek-cryptography/curve25519-dalek) crate
pub mod ristretto255;

/// Small quadratic residue group for fast tests of batch and error logic
#[cfg(test)]
pub(crate) mod toy;

pub use p256::P256Group;
pub use ristretto255::Ristretto255Group;

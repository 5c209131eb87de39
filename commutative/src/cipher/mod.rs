// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Commutative cipher primitives.
//!
//! A key `k` acts on a group element `x` as `x^k`. Because exponents
//! multiply, layering two keys commutes:
//!
//! ```text
//! (x^k1)^k2 = x^(k1 * k2) = (x^k2)^k1
//! ```
//!
//! and one layer is removed by raising to the inverse exponent,
//! `(x^k)^(k^-1) = x`.
//!
//! # [`codec`]
//!
//! Validation and fixed width (de)serialization of group elements.
//!
//! # [`key`]
//!
//! Loading, validating and generating private keys.
//!
//! # [`transform`]
//!
//! The keyed forward and inverse operation on a single element.
//!
//! # [`batch`]
//!
//! Parallel, order preserving, all-or-nothing application of a transform
//! to a batch of encoded elements.
//!
//! # Examples
//!
//! ```
//! use commutative::cipher::batch::{self, Direction};
//! use commutative::cipher::codec;
//! use commutative::cipher::key::Key;
//! use commutative::context::{Context, RistrettoCtx as Ctx};
//! use commutative::traits::groups::CryptographicGroup;
//!
//! let x = <Ctx as Context>::G::hash_to_element(&[b"alice@example.com"], &[b"example"]).unwrap();
//! let input = vec![codec::encode::<Ctx>(&x)];
//!
//! let k1 = Key::<Ctx>::generate();
//! let k2 = Key::<Ctx>::generate();
//!
//! let a = batch::apply(&input, &k1, Direction::Forward).unwrap();
//! let ab = batch::apply(&a, &k2, Direction::Forward).unwrap();
//!
//! let b = batch::apply(&input, &k2, Direction::Forward).unwrap();
//! let ba = batch::apply(&b, &k1, Direction::Forward).unwrap();
//!
//! assert_eq!(ab, ba);
//! ```

pub mod batch;
pub mod codec;
pub mod key;
pub mod transform;

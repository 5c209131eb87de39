// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! The NIST P-256 curve group.
//!
//! Elements travel as 33 byte SEC1 compressed points: a `0x02` or `0x03`
//! tag carrying the parity of y, then the big-endian x coordinate. SEC1
//! has no fixed width identity, so the identity is written as 33 zero
//! bytes. Scalars travel as 32 byte big-endian integers strictly below the
//! group order `n`. The cofactor is one, so every point on the curve is a
//! group member.

pub use element::P256Element;
pub use group::P256Group;
pub use scalar::P256Scalar;

/// Width of an encoded element.
pub const ELEMENT_BYTES: usize = 33;

/// Width of an encoded scalar.
pub const SCALAR_BYTES: usize = 32;

/// Curve points
pub mod element;

/// The group and its hashing
pub mod group;

/// Scalars modulo `n`
pub mod scalar;

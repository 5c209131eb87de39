// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! The Ristretto group over curve25519.
//!
//! Elements travel as 32 byte canonical Ristretto compressions, which
//! decode only to members of the prime order group; the identity is the
//! all zero compression. Scalars travel as 32 byte little-endian integers
//! that must be canonical, i.e. strictly below the group order
//! `2^252 + 27742317777372353535851937790883648493`.

pub use element::RistrettoElement;
pub use group::Ristretto255Group;
pub use scalar::RistrettoScalar;

/// Width of an encoded element.
pub const ELEMENT_BYTES: usize = 32;

/// Width of an encoded scalar.
pub const SCALAR_BYTES: usize = 32;

/// Ristretto points
pub mod element;

/// The group and its hashing
pub mod group;

/// Scalars modulo the group order
pub mod scalar;

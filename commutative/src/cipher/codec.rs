// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Group element codec.
//!
//! Thin wrappers around the [fixed width serialization][`crate::utils::serialization`]
//! of a context's elements. Decoding is strict: wrong lengths, non-canonical
//! or off-group encodings and the identity are all rejected.

use crate::context::Context;
use crate::utils::error::EncodingError;
use crate::utils::serialization::{FDeserializable, FSerializable};

/// Width in bytes of every element encoding in context `C`.
#[must_use]
pub fn element_width<C: Context>() -> usize {
    C::Element::size_bytes()
}

/// Decode one element.
///
/// # Errors
///
/// - `WrongLength` if `bytes` is not [`element_width`] long
/// - `Malformed` if `bytes` does not encode a member of the group
/// - `Identity` if `bytes` encodes the group identity
pub fn decode<C: Context>(bytes: &[u8]) -> Result<C::Element, EncodingError> {
    C::Element::deser_f(bytes)
}

/// Encode one element.
///
/// Total over the group; the output is always [`element_width`] long.
#[must_use]
pub fn encode<C: Context>(element: &C::Element) -> Vec<u8> {
    element.ser_f()
}

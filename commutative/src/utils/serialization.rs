// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Fixed length serialization.
//!
//! A type that implements these traits requires that all its instances
//! serialize to a sequence of bytes of equal and fixed length. Group
//! elements and scalars of every [context][`crate::context::Context`]
//! implement them; they are the wire format of the
//! [protocol operations][`crate::protocol::operations`].
//!
//! * NOTE: It is the responsibility of the implementor to ensure consistency across builds.
//!   Changing an encoding breaks matching against ciphertexts produced by older builds.

use crate::utils::error::EncodingError;

/// Types that serialize to a fixed number of bytes.
pub trait FSerializable {
    /// The fixed length of every serialization of this type.
    fn size_bytes() -> usize;

    /// Append the serialization of this value to `buffer`.
    fn ser_into(&self, buffer: &mut Vec<u8>);

    /// Serialize this value into a new vector of exactly [`size_bytes`][`FSerializable::size_bytes`] bytes.
    fn ser_f(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(Self::size_bytes());
        self.ser_into(&mut buffer);
        buffer
    }
}

/// Types that deserialize from a fixed number of bytes.
pub trait FDeserializable: Sized {
    /// Parse a value, rejecting buffers of the wrong length or content.
    ///
    /// # Errors
    ///
    /// - `WrongLength` if `buffer.len() != size_bytes()`
    /// - `Malformed` or `Identity` depending on the implementing type
    fn deser_f(buffer: &[u8]) -> Result<Self, EncodingError>;
}

/// Shorthand for types implementing both fixed length traits.
pub trait FSer: FSerializable + FDeserializable {}

impl<T: FSerializable + FDeserializable> FSer for T {}

/// Convert `buffer` into an array of length `N`.
///
/// # Errors
///
/// - `WrongLength` if `buffer.len() != N`
pub(crate) fn fixed_array<const N: usize>(buffer: &[u8]) -> Result<[u8; N], EncodingError> {
    <[u8; N]>::try_from(buffer).map_err(|_| EncodingError::WrongLength {
        expected: N,
        actual: buffer.len(),
    })
}

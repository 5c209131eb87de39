// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Error types for this library

use thiserror::Error;

/**
 * Error type for the commutative cipher.
 *
 * Every variant aborts the whole batch operation that raised it; no partial
 * output accompanies an error. None of the variants carries key material.
 */
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An input byte string at `position` does not decode to a valid group member.
    #[error("Invalid encoding at position {position}: {reason}")]
    InvalidEncoding {
        /// Zero-based index of the offending element in the input batch.
        position: usize,
        /// Why the element was rejected.
        reason: EncodingError,
    },

    /// The supplied key is malformed or outside `[1, order - 1]`.
    #[error("Invalid key: {0}")]
    InvalidKey(KeyError),

    /// The engine produced an output batch whose length differs from the input.
    #[error("Batch size mismatch: expected {expected} elements, produced {actual}")]
    BatchSizeMismatch {
        /// Input batch length.
        expected: usize,
        /// Output batch length.
        actual: usize,
    },

    /// Group arithmetic produced a value it never should for valid inputs.
    #[error("Internal arithmetic failure: {0}")]
    InternalArithmeticFailure(String),

    /// Occurs when a hash to curve error occurs in the underlying group backend
    #[error("{0}")]
    HashToElementError(String),
}

/// Reasons a fixed-width encoding is rejected by a [`FDeserializable`][`crate::utils::serialization::FDeserializable`] implementation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// Buffer length does not match the fixed width of the type.
    #[error("expected {expected} bytes, found {actual}")]
    WrongLength {
        /// Fixed width of the encoding.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },

    /// Bytes of the right length that do not encode a canonical group value.
    #[error("bytes do not encode a canonical group value")]
    Malformed,

    /// The group identity, which is never a valid cipher input.
    #[error("identity element is not a valid input")]
    Identity,
}

/// Reasons a key is rejected by the [key store][`crate::cipher::key`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Key bytes do not match the scalar width of the group.
    #[error("expected {expected} bytes, found {actual}")]
    WrongLength {
        /// Scalar width of the group.
        expected: usize,
        /// Length of the supplied key.
        actual: usize,
    },

    /// The zero scalar.
    #[error("key is zero")]
    Zero,

    /// A scalar equal to or larger than the group order.
    #[error("key is not smaller than the group order")]
    OutOfRange,
}

impl Error {
    /// Attach a batch position to an element-level encoding error.
    pub(crate) fn encoding_at(position: usize, reason: EncodingError) -> Self {
        Error::InvalidEncoding { position, reason }
    }
}

impl From<KeyError> for Error {
    fn from(e: KeyError) -> Self {
        Error::InvalidKey(e)
    }
}

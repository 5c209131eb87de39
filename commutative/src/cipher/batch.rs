// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Batch application of a [`ScalarTransform`].
//!
//! Batches are ordered: position `i` of the output always corresponds to
//! position `i` of the input. Processing is all or nothing. Either every
//! element is transformed, or an error is returned and no output is
//! produced. Work is spread over the global [rayon](https://docs.rs/rayon)
//! pool, since no element depends on another.

use crate::cipher::codec;
use crate::cipher::key::Key;
use crate::cipher::transform::ScalarTransform;
use crate::context::Context;
use crate::utils::error::{EncodingError, Error};

use rayon::prelude::*;

pub use crate::cipher::transform::Direction;

/// Apply `key` in the given `direction` to every encoded element of `elements`.
///
/// The whole batch is decoded before any key material is used, so an invalid
/// batch never reaches the exponentiation step.
///
/// # Errors
///
/// - `InvalidEncoding` with the lowest failing position, if any element does not decode
/// - `InternalArithmeticFailure` if a transform fails
/// - `BatchSizeMismatch` if the output length differs from the input length
pub fn apply<C: Context, B: AsRef<[u8]> + Sync>(
    elements: &[B],
    key: &Key<C>,
    direction: Direction,
) -> Result<Vec<Vec<u8>>, Error> {
    let decoded = decode_batch::<C, B>(elements)?;
    let transform = ScalarTransform::new(key, direction)?;
    let output = transform_batch(&decoded, &transform)?;
    check_length(elements.len(), output.len())?;

    Ok(output)
}

/// Decode every element of a batch.
///
/// Elements are decoded in parallel; when several are invalid, the error
/// reports the lowest position so that results do not depend on scheduling.
///
/// # Errors
///
/// - `InvalidEncoding` with the lowest failing position
pub fn decode_batch<C: Context, B: AsRef<[u8]> + Sync>(
    elements: &[B],
) -> Result<Vec<C::Element>, Error> {
    let decoded: Vec<Result<C::Element, EncodingError>> = elements
        .par_iter()
        .map(|bytes| codec::decode::<C>(bytes.as_ref()))
        .collect();

    decoded
        .into_iter()
        .enumerate()
        .map(|(position, result)| result.map_err(|reason| Error::encoding_at(position, reason)))
        .collect()
}

/// Transform and encode every element of an already decoded batch.
///
/// # Errors
///
/// - `InternalArithmeticFailure` if any transform fails
pub fn transform_batch<C: Context>(
    elements: &[C::Element],
    transform: &ScalarTransform<C>,
) -> Result<Vec<Vec<u8>>, Error> {
    let transformed: Vec<Result<Vec<u8>, Error>> = elements
        .par_iter()
        .map(|element| {
            transform
                .apply(element)
                .map(|ret| codec::encode::<C>(&ret))
        })
        .collect();

    transformed.into_iter().collect()
}

/// Check the batch length invariant.
///
/// # Errors
///
/// - `BatchSizeMismatch` if `expected != actual`
pub(crate) fn check_length(expected: usize, actual: usize) -> Result<(), Error> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::BatchSizeMismatch { expected, actual })
    }
}

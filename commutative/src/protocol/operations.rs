// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Protocol entry points.
//!
//! Every operation loads and validates the key, then decodes the whole
//! batch, and only then exponentiates. A response is returned only when
//! every element was processed; otherwise the first error aborts the call.
//!
//! # Examples
//!
//! ```
//! use commutative::protocol::messages::*;
//! use commutative::protocol::operations::*;
//! use commutative::cipher::codec;
//! use commutative::context::{Context, P256Ctx as Ctx};
//! use commutative::traits::groups::CryptographicGroup;
//!
//! let id = <Ctx as Context>::G::hash_to_element(&[b"alice@example.com"], &[b"example"]).unwrap();
//! let plaintexts = vec![codec::encode::<Ctx>(&id)];
//!
//! let key_a = generate_commutative_encryption_key::<Ctx>();
//! let key_b = generate_commutative_encryption_key::<Ctx>();
//!
//! let request = ApplyCommutativeEncryptionRequest::new(key_a.to_vec(), plaintexts.clone());
//! let a = apply_commutative_encryption::<Ctx>(&request).unwrap();
//!
//! let request = ReApplyCommutativeEncryptionRequest::new(key_b.to_vec(), a.encrypted_texts);
//! let ab = reapply_commutative_encryption::<Ctx>(&request).unwrap();
//!
//! let request = ApplyCommutativeDecryptionRequest::new(key_a.to_vec(), ab.reencrypted_texts);
//! let b = apply_commutative_decryption::<Ctx>(&request).unwrap();
//!
//! let request = ApplyCommutativeDecryptionRequest::new(key_b.to_vec(), b.decrypted_texts);
//! let plain = apply_commutative_decryption::<Ctx>(&request).unwrap();
//!
//! assert_eq!(plain.decrypted_texts, plaintexts);
//! ```

use crate::cipher::batch::{self, Direction};
use crate::cipher::key::Key;
use crate::context::Context;
use crate::protocol::messages::{
    ApplyCommutativeDecryptionRequest, ApplyCommutativeDecryptionResponse,
    ApplyCommutativeEncryptionRequest, ApplyCommutativeEncryptionResponse,
    ReApplyCommutativeEncryptionRequest, ReApplyCommutativeEncryptionResponse,
};
use crate::utils::error::Error;
use zeroize::Zeroizing;

/// Encrypt a batch of hashed identifiers with the caller's key.
///
/// # Errors
///
/// - `InvalidKey` if `encryption_key` is not a valid key
/// - `InvalidEncoding` if any of `plaintexts` is not a valid element encoding
/// - `InternalArithmeticFailure`, `BatchSizeMismatch` on internal defects
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(group = C::NAME, batch_len = request.plaintexts.len())
)]
pub fn apply_commutative_encryption<C: Context>(
    request: &ApplyCommutativeEncryptionRequest,
) -> Result<ApplyCommutativeEncryptionResponse, Error> {
    let encrypted_texts = process::<C>(
        &request.encryption_key,
        &request.plaintexts,
        Direction::Forward,
    )?;

    Ok(ApplyCommutativeEncryptionResponse { encrypted_texts })
}

/// Add the caller's layer to a batch already encrypted by another party.
///
/// Arithmetically identical to [`apply_commutative_encryption`]; the
/// distinction is the protocol role of the input.
///
/// # Errors
///
/// - `InvalidKey` if `encryption_key` is not a valid key
/// - `InvalidEncoding` if any of `encrypted_texts` is not a valid element encoding
/// - `InternalArithmeticFailure`, `BatchSizeMismatch` on internal defects
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(group = C::NAME, batch_len = request.encrypted_texts.len())
)]
pub fn reapply_commutative_encryption<C: Context>(
    request: &ReApplyCommutativeEncryptionRequest,
) -> Result<ReApplyCommutativeEncryptionResponse, Error> {
    let reencrypted_texts = process::<C>(
        &request.encryption_key,
        &request.encrypted_texts,
        Direction::Forward,
    )?;

    Ok(ReApplyCommutativeEncryptionResponse { reencrypted_texts })
}

/// Strip the caller's layer from a batch.
///
/// Any other party's layer is left in place.
///
/// # Errors
///
/// - `InvalidKey` if `encryption_key` is not a valid key
/// - `InvalidEncoding` if any of `encrypted_texts` is not a valid element encoding
/// - `InternalArithmeticFailure`, `BatchSizeMismatch` on internal defects
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(group = C::NAME, batch_len = request.encrypted_texts.len())
)]
pub fn apply_commutative_decryption<C: Context>(
    request: &ApplyCommutativeDecryptionRequest,
) -> Result<ApplyCommutativeDecryptionResponse, Error> {
    let decrypted_texts = process::<C>(
        &request.encryption_key,
        &request.encrypted_texts,
        Direction::Inverse,
    )?;

    Ok(ApplyCommutativeDecryptionResponse { decrypted_texts })
}

/// Generate a fresh key, encoded for the `encryption_key` field of requests.
#[must_use]
pub fn generate_commutative_encryption_key<C: Context>() -> Zeroizing<Vec<u8>> {
    let key = Key::<C>::generate();
    tracing::debug!("generated commutative encryption key");

    key.to_bytes()
}

fn process<C: Context>(
    encryption_key: &[u8],
    elements: &[Vec<u8>],
    direction: Direction,
) -> Result<Vec<Vec<u8>>, Error> {
    let key = Key::<C>::load(encryption_key).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected encryption key");
    })?;

    let output = batch::apply(elements, &key, direction).inspect_err(|e| match e {
        Error::InvalidEncoding { position, reason } => {
            tracing::warn!(position, %reason, "rejected batch element");
        }
        e => tracing::warn!(error = %e, "batch processing failed"),
    })?;

    tracing::debug!(?direction, output_len = output.len(), "batch processed");
    Ok(output)
}

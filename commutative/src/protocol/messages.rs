// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

/*!
Request and response messages of the [protocol operations][`crate::protocol::operations`].

Requests own the key bytes, which are zeroized when the request is dropped
and redacted from its `Debug` output. Responses own only group element
encodings.

With the `serde` feature enabled, every message implements `Serialize` and
`Deserialize`.
*/

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Redacted stand-in for key bytes in `Debug` output.
const REDACTED: &str = "<redacted>";

// --- Apply ---

/// Input of [`apply_commutative_encryption`][`crate::protocol::operations::apply_commutative_encryption`].
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplyCommutativeEncryptionRequest {
    /// Private key of the calling party.
    pub encryption_key: Vec<u8>,
    /// Element encodings of hashed identifiers.
    #[zeroize(skip)]
    pub plaintexts: Vec<Vec<u8>>,
}

impl ApplyCommutativeEncryptionRequest {
    /// Create a new request.
    #[must_use]
    pub fn new(encryption_key: Vec<u8>, plaintexts: Vec<Vec<u8>>) -> Self {
        ApplyCommutativeEncryptionRequest {
            encryption_key,
            plaintexts,
        }
    }
}

impl std::fmt::Debug for ApplyCommutativeEncryptionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplyCommutativeEncryptionRequest")
            .field("encryption_key", &REDACTED)
            .field("plaintexts", &self.plaintexts.len())
            .finish()
    }
}

/// Output of [`apply_commutative_encryption`][`crate::protocol::operations::apply_commutative_encryption`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplyCommutativeEncryptionResponse {
    /// `plaintexts[i]^k`, in input order.
    pub encrypted_texts: Vec<Vec<u8>>,
}

// --- Re-apply ---

/// Input of [`reapply_commutative_encryption`][`crate::protocol::operations::reapply_commutative_encryption`].
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReApplyCommutativeEncryptionRequest {
    /// Private key of the calling party.
    pub encryption_key: Vec<u8>,
    /// Element encodings already encrypted by another party.
    #[zeroize(skip)]
    pub encrypted_texts: Vec<Vec<u8>>,
}

impl ReApplyCommutativeEncryptionRequest {
    /// Create a new request.
    #[must_use]
    pub fn new(encryption_key: Vec<u8>, encrypted_texts: Vec<Vec<u8>>) -> Self {
        ReApplyCommutativeEncryptionRequest {
            encryption_key,
            encrypted_texts,
        }
    }
}

impl std::fmt::Debug for ReApplyCommutativeEncryptionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReApplyCommutativeEncryptionRequest")
            .field("encryption_key", &REDACTED)
            .field("encrypted_texts", &self.encrypted_texts.len())
            .finish()
    }
}

/// Output of [`reapply_commutative_encryption`][`crate::protocol::operations::reapply_commutative_encryption`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReApplyCommutativeEncryptionResponse {
    /// `encrypted_texts[i]^k`, in input order.
    pub reencrypted_texts: Vec<Vec<u8>>,
}

// --- Decrypt ---

/// Input of [`apply_commutative_decryption`][`crate::protocol::operations::apply_commutative_decryption`].
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplyCommutativeDecryptionRequest {
    /// Private key whose layer is stripped.
    pub encryption_key: Vec<u8>,
    /// Element encodings carrying a layer of `encryption_key`.
    #[zeroize(skip)]
    pub encrypted_texts: Vec<Vec<u8>>,
}

impl ApplyCommutativeDecryptionRequest {
    /// Create a new request.
    #[must_use]
    pub fn new(encryption_key: Vec<u8>, encrypted_texts: Vec<Vec<u8>>) -> Self {
        ApplyCommutativeDecryptionRequest {
            encryption_key,
            encrypted_texts,
        }
    }
}

impl std::fmt::Debug for ApplyCommutativeDecryptionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplyCommutativeDecryptionRequest")
            .field("encryption_key", &REDACTED)
            .field("encrypted_texts", &self.encrypted_texts.len())
            .finish()
    }
}

/// Output of [`apply_commutative_decryption`][`crate::protocol::operations::apply_commutative_decryption`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ApplyCommutativeDecryptionResponse {
    /// `encrypted_texts[i]^(k^-1)`, in input order.
    pub decrypted_texts: Vec<Vec<u8>>,
}

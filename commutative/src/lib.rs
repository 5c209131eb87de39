// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Commutative encryption library for private identifier matching

#![doc = include_str!("../README.md")]

/// Primitives for commutative encryption: codec, keys, transforms and batches.
pub mod cipher;
/// Defines implementation choices for the underlying group.
pub mod context;
pub mod groups;
/// Batch-level protocol operations and their request/response messages.
pub mod protocol;
/// Abstractions for curve arithmetic, groups, elements and scalars.
pub mod traits;
/// Utilities such as random number generation, hashing, serialization and errors.
pub mod utils;

pub use context::{Context, DefaultCtx, P256Ctx, RistrettoCtx};
pub use protocol::operations::{
    apply_commutative_decryption, apply_commutative_encryption,
    generate_commutative_encryption_key, reapply_commutative_encryption,
};
pub use utils::error::Error;

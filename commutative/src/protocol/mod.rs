// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Batch-level protocol operations.
//!
//! Two parties A and B match identifiers without revealing them as follows:
//!
//! 1. each party hashes its identifiers into the group and
//!    [applies][`operations::apply_commutative_encryption`] its own key,
//! 2. the parties exchange batches and each
//!    [re-applies][`operations::reapply_commutative_encryption`] its key to
//!    the other's batch,
//! 3. doubly encrypted values are compared; equal values mean equal
//!    identifiers, regardless of which key was applied first.
//!
//! A party can [strip][`operations::apply_commutative_decryption`] its own
//! layer from a batch at any point, leaving the other party's layer intact.
//!
//! Requests carry the key bytes and a batch of fixed width element encodings
//! (see [`crate::cipher::codec`]); responses carry a batch of the same length
//! and order. No state survives a call.

pub mod messages;
pub mod operations;

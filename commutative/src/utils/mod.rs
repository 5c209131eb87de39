// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Utilities: hashing, rng, serialization, error handling

/// Error handling.
pub mod error;

/// Hashing utilities for the hash-to-group helpers.
pub mod hash;

/// Random number generation utilities and [context][`crate::context::Context`] dependency.
pub mod rng;

/// Fixed-width serialization of elements and scalars.
pub mod serialization;

pub use error::Error;

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// MGF1 error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mgf1Error {
    /// The requested hash algorithm is not in the supported set
    #[error("unsupported hash algorithm")]
    UnsupportedAlgorithm,
    /// Seed material must not be empty
    #[error("seed material must not be empty")]
    EmptySeed,
    /// The 32-bit block counter space is used up
    #[error("mask stream exhausted (32-bit block counter overflow)")]
    StreamExhausted,
}

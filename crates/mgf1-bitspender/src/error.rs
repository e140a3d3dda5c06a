// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use mgf1::Mgf1Error;
use thiserror::Error;

/// Bit spender error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitSpenderError {
    /// Requested bit-field width does not fit the 32-bit result register
    #[error("bit width {width} exceeds the 32-bit limit")]
    WidthTooLarge {
        /// The rejected width.
        width: u32,
    },
    /// The underlying mask generator failed
    #[error(transparent)]
    Mask(#[from] Mgf1Error),
}

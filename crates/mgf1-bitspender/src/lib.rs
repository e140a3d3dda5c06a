// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bit-level reader over an MGF1 mask stream
//!
//! [`BitSpender`] owns a [`mgf1::MaskGenerator`] and serves bit-fields of
//! 0 to 32 bits as well as single octets from one unified bit cursor. Bits
//! are delivered in strict stream order, most-significant bit of each octet
//! first, and a field may straddle octet and hash-block boundaries.
//!
//! ## Example
//!
//! ```rust
//! use mgf1::{HashAlgorithm, Seed};
//! use mgf1_bitspender::BitSpender;
//!
//! let mut spender = BitSpender::new(HashAlgorithm::Sha256, Seed::Raw(b"seed"))
//!     .expect("Failed to create BitSpender");
//!
//! let tag = spender.get_bits(3).expect("Failed to get_bits(..)");
//! assert!(tag < 8);
//! let octet = spender.get_byte().expect("Failed to get_byte()");
//! let _ = octet;
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod bitspender;
mod error;

pub use bitspender::{BitSpender, MAX_BIT_WIDTH};
pub use error::BitSpenderError;

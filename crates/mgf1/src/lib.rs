// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! MGF1 mask generation with resumable streaming output
//!
//! Counter-mode hash expansion per RFC 8017 Appendix B.2.1: a short seed is
//! expanded into an arbitrarily long pseudorandom octet string by
//! concatenating `Hash(seed || be32(counter))` blocks. Unlike the one-shot
//! textbook definition, [`MaskGenerator`] keeps its position between calls,
//! so a sequence of reads is a true continuation of one logical stream.
//!
//! The underlying hash is consumed through the RustCrypto [`digest`]
//! capability; SHA-1, SHA-256 and SHA-512 are wired up via [`HashAlgorithm`].
//!
//! References:
//! - RFC 8017: PKCS #1 v2.2, Appendix B.2.1 (MGF1)
//!   <https://datatracker.ietf.org/doc/html/rfc8017#appendix-B.2.1>
//!
//! ## Example
//!
//! ```rust
//! use mgf1::{HashAlgorithm, MaskGenerator, Seed};
//!
//! let mut generator = MaskGenerator::new(HashAlgorithm::Sha256, Seed::Raw(b"seed"))
//!     .expect("Failed to create MaskGenerator");
//!
//! // Two batched reads yield the same octets as one read of 48.
//! let mut mask = [0u8; 48];
//! let (head, tail) = mask.split_at_mut(20);
//! generator.get_mask(head).expect("Failed to get_mask(..)");
//! generator.get_mask(tail).expect("Failed to get_mask(..)");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod algorithm;
mod error;
mod mask;
mod seed;

pub use algorithm::HashAlgorithm;
pub use error::Mgf1Error;
pub use mask::MaskGenerator;
pub use seed::Seed;

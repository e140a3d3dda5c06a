// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Seed material for a [`MaskGenerator`](crate::MaskGenerator).
///
/// The two variants make the keying contract explicit instead of hiding it
/// behind a boolean flag: both yield byte-for-byte identical streams when
/// `PreHashed` holds the digest of the `Raw` seed under the same algorithm.
#[derive(Clone, Copy)]
pub enum Seed<'a> {
    /// Caller-supplied seed material, digested once at construction.
    Raw(&'a [u8]),
    /// An already computed digest of the original seed, used verbatim.
    ///
    /// Contract: the buffer must equal `Hash(original seed)` under the
    /// generator's algorithm, so a caller holding that digest can resume
    /// derivation without recomputing it.
    PreHashed(&'a [u8]),
}

impl Seed<'_> {
    pub(crate) fn bytes(&self) -> &[u8] {
        match self {
            Self::Raw(bytes) | Self::PreHashed(bytes) => bytes,
        }
    }
}

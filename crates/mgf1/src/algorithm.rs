// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use core::fmt;
use core::str::FromStr;

use digest::{Digest, DynDigest};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

use crate::error::Mgf1Error;

/// Hash algorithms usable as the MGF1 block function.
///
/// The digest size fixes the block granularity of the generated stream:
/// each counter value contributes exactly [`hash_size`](Self::hash_size)
/// octets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-1 (20-octet blocks)
    Sha1,
    /// SHA-256 (32-octet blocks)
    Sha256,
    /// SHA-512 (64-octet blocks)
    Sha512,
}

impl HashAlgorithm {
    /// Returns the digest size in octets.
    pub fn hash_size(&self) -> usize {
        match self {
            Self::Sha1 => <Sha1 as Digest>::output_size(),
            Self::Sha256 => <Sha256 as Digest>::output_size(),
            Self::Sha512 => <Sha512 as Digest>::output_size(),
        }
    }

    /// Resolves a canonical lowercase algorithm name (e.g. `"sha256"`).
    ///
    /// # Errors
    ///
    /// Returns [`Mgf1Error::UnsupportedAlgorithm`] for any name outside the
    /// supported set.
    pub fn from_name(name: &str) -> Result<Self, Mgf1Error> {
        match name {
            "sha1" => Ok(Self::Sha1),
            "sha256" => Ok(Self::Sha256),
            "sha512" => Ok(Self::Sha512),
            _ => Err(Mgf1Error::UnsupportedAlgorithm),
        }
    }

    /// Creates a fresh one-shot hasher for this algorithm.
    pub(crate) fn new_digest(&self) -> Box<dyn DynDigest> {
        match self {
            Self::Sha1 => Box::new(Sha1::new()),
            Self::Sha256 => Box::new(Sha256::new()),
            Self::Sha512 => Box::new(Sha512::new()),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = Mgf1Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
            Self::Sha512 => "sha512",
        };
        f.write_str(name)
    }
}

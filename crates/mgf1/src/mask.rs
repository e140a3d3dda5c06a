// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::min;

use digest::DynDigest;
use zeroize::{Zeroize, Zeroizing};

use crate::algorithm::HashAlgorithm;
use crate::error::Mgf1Error;
use crate::seed::Seed;

/// Streaming MGF1 mask generator.
///
/// Produces the canonical MGF1 octet stream
///
/// ```text
/// Hash(seed || be32(0)) || Hash(seed || be32(1)) || Hash(seed || be32(2)) || ...
/// ```
///
/// one request at a time. The generator remembers its position, so any
/// partition of a total length into successive [`get_mask`](Self::get_mask)
/// calls yields the same octets as a single call for the whole length.
///
/// The stream ends once the 32-bit block counter space is used up; a request
/// past that point fails with [`Mgf1Error::StreamExhausted`].
///
/// Seed and block buffers are zeroized on drop.
pub struct MaskGenerator {
    digest: Box<dyn DynDigest>,
    hash_size: usize,
    seed: Zeroizing<Vec<u8>>,
    /// Index of the next hash block; `None` once the counter space is used up.
    counter: Option<u32>,
    block: Zeroizing<Vec<u8>>,
    block_used: usize,
}

impl MaskGenerator {
    /// Creates a generator from an algorithm and seed material.
    ///
    /// [`Seed::Raw`] material is digested once here; [`Seed::PreHashed`]
    /// material is taken verbatim as the keyed seed.
    ///
    /// # Errors
    ///
    /// Returns [`Mgf1Error::EmptySeed`] if the seed bytes are empty.
    pub fn new(algorithm: HashAlgorithm, seed: Seed<'_>) -> Result<Self, Mgf1Error> {
        if seed.bytes().is_empty() {
            return Err(Mgf1Error::EmptySeed);
        }

        let mut digest = algorithm.new_digest();
        let keyed_seed = match seed {
            Seed::Raw(bytes) => {
                digest.update(bytes);
                Zeroizing::new(digest.finalize_reset().into_vec())
            }
            Seed::PreHashed(bytes) => Zeroizing::new(bytes.to_vec()),
        };
        let hash_size = algorithm.hash_size();

        Ok(Self {
            digest,
            hash_size,
            seed: keyed_seed,
            counter: Some(0),
            block: Zeroizing::new(vec![0u8; hash_size]),
            block_used: hash_size,
        })
    }

    /// Returns the digest size in octets of the underlying hash.
    pub fn hash_size(&self) -> usize {
        self.hash_size
    }

    /// Fills `mask` with the next `mask.len()` octets of the stream.
    ///
    /// Leftover octets of the buffered block are consumed first; further
    /// blocks are computed on demand. An empty `mask` is a no-op and does
    /// not consume a hash block.
    ///
    /// # Errors
    ///
    /// Returns [`Mgf1Error::StreamExhausted`] if satisfying the request
    /// would overflow the 32-bit block counter. The stream position is
    /// unspecified after a failed call.
    pub fn get_mask(&mut self, mask: &mut [u8]) -> Result<(), Mgf1Error> {
        let mut written = 0;

        while written < mask.len() {
            if self.block_used == self.hash_size {
                self.refill_block()?;
            }

            let n = min(mask.len() - written, self.hash_size - self.block_used);
            mask[written..written + n]
                .copy_from_slice(&self.block[self.block_used..self.block_used + n]);
            self.block_used += n;
            written += n;
        }

        Ok(())
    }

    /// Returns the next `length` octets of the stream in a fresh buffer.
    ///
    /// Identical semantics to [`get_mask`](Self::get_mask); `length == 0`
    /// yields an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Mgf1Error::StreamExhausted`] if satisfying the request
    /// would overflow the 32-bit block counter.
    pub fn allocate_mask(&mut self, length: usize) -> Result<Vec<u8>, Mgf1Error> {
        let mut mask = vec![0u8; length];
        self.get_mask(&mut mask)?;
        Ok(mask)
    }

    /// Computes `Hash(seed || be32(counter))` into the block buffer and
    /// advances the counter.
    fn refill_block(&mut self) -> Result<(), Mgf1Error> {
        let counter = self.counter.ok_or(Mgf1Error::StreamExhausted)?;

        self.digest.update(&self.seed);
        self.digest.update(&counter.to_be_bytes());

        let mut output = self.digest.finalize_reset();
        self.block.copy_from_slice(&output);
        output.zeroize();

        self.counter = counter.checked_add(1);
        self.block_used = 0;

        Ok(())
    }

    /// Overrides the block counter (testing only).
    ///
    /// `None` marks the counter space as already used up; buffered block
    /// octets remain readable.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn set_counter(&mut self, counter: Option<u32>) {
        self.counter = counter;
    }
}

// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use mgf1::{HashAlgorithm, MaskGenerator, Seed};
use zeroize::Zeroize;

use crate::error::BitSpenderError;

/// Widest bit-field a single [`BitSpender::get_bits`] call can return.
pub const MAX_BIT_WIDTH: u32 = 32;

/// MSB-first bit-level reader over an MGF1 octet stream.
///
/// The spender pulls octets from its owned [`MaskGenerator`] on demand and
/// keeps undelivered bits in an accumulator, so requests of any widths
/// consume the logical bit stream without gaps: a field spanning octets N
/// and N+1 takes the trailing bits of octet N followed by the leading bits
/// of octet N+1.
///
/// [`get_byte`](Self::get_byte) shares the same cursor as
/// [`get_bits`](Self::get_bits), so a byte read is interchangeable with any
/// combination of bit reads summing to 8.
///
/// The accumulator is zeroized on drop; buffered partial bits are not
/// recoverable across instances.
pub struct BitSpender {
    source: MaskGenerator,
    /// Pending bits in stream order; at most 39 (7 leftover + one 32-bit pull).
    bit_buffer: u64,
    bit_count: u32,
}

impl BitSpender {
    /// Creates a spender over a fresh mask generator.
    ///
    /// # Errors
    ///
    /// Propagates [`MaskGenerator::new`] failures, e.g.
    /// [`Mgf1Error::EmptySeed`](mgf1::Mgf1Error::EmptySeed).
    pub fn new(algorithm: HashAlgorithm, seed: Seed<'_>) -> Result<Self, BitSpenderError> {
        Ok(Self::from(MaskGenerator::new(algorithm, seed)?))
    }

    /// Returns the next `width` bits of the stream as an unsigned value.
    ///
    /// `width == 0` succeeds with 0 and consumes nothing. Octets are pulled
    /// from the generator only once the accumulator runs short, so a failed
    /// width check never advances the stream.
    ///
    /// # Errors
    ///
    /// Returns [`BitSpenderError::WidthTooLarge`] for `width > 32`, or a
    /// propagated generator error if the octet stream is exhausted.
    pub fn get_bits(&mut self, width: u32) -> Result<u32, BitSpenderError> {
        if width > MAX_BIT_WIDTH {
            return Err(BitSpenderError::WidthTooLarge { width });
        }

        while self.bit_count < width {
            let mut octet = [0u8; 1];
            self.source.get_mask(&mut octet)?;

            self.bit_buffer = (self.bit_buffer << 8) | u64::from(octet[0]);
            self.bit_count += 8;
        }

        self.bit_count -= width;
        let value = (self.bit_buffer >> self.bit_count) & ((1u64 << width) - 1);
        self.bit_buffer &= (1u64 << self.bit_count) - 1;

        Ok(value as u32)
    }

    /// Returns the next 8 bits of the stream as an octet.
    ///
    /// Equivalent to [`get_bits(8)`](Self::get_bits) narrowed to `u8`.
    ///
    /// # Errors
    ///
    /// Propagates generator errors, e.g. stream exhaustion.
    pub fn get_byte(&mut self) -> Result<u8, BitSpenderError> {
        self.get_bits(8).map(|bits| bits as u8)
    }
}

impl From<MaskGenerator> for BitSpender {
    /// Takes ownership of an already positioned generator.
    fn from(source: MaskGenerator) -> Self {
        Self {
            source,
            bit_buffer: 0,
            bit_count: 0,
        }
    }
}

impl Drop for BitSpender {
    fn drop(&mut self) {
        self.bit_buffer.zeroize();
        self.bit_count.zeroize();
    }
}

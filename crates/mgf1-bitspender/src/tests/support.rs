// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Extracts `width` bits starting at bit offset `offset` of `stream`,
/// MSB-first, as the reference for cursor-tracking assertions.
pub(crate) fn bits_at(stream: &[u8], offset: usize, width: u32) -> u32 {
    let mut value: u64 = 0;

    for i in 0..width as usize {
        let bit_index = offset + i;
        let bit = (stream[bit_index / 8] >> (7 - (bit_index % 8))) & 1;
        value = (value << 1) | u64::from(bit);
    }

    value as u32
}

#[test]
fn test_bits_at_reads_msb_first() {
    let stream = [0b1010_1100, 0b0011_0101];

    assert_eq!(bits_at(&stream, 0, 1), 1);
    assert_eq!(bits_at(&stream, 0, 4), 0b1010);
    assert_eq!(bits_at(&stream, 4, 8), 0b1100_0011);
    assert_eq!(bits_at(&stream, 8, 8), 0b0011_0101);
    assert_eq!(bits_at(&stream, 3, 0), 0);
}

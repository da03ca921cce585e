// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! LSB embedder and extractor.
//!
//! Both paths walk the carrier through the shared [`BitAddress`] function,
//! one continuous cursor from offset 0. The extractor in particular must not
//! restart its position between the header and payload phases: the header
//! ends mid-pixel, and re-deriving the payload start from anything but the
//! running cursor is exactly the misalignment bug this module exists to rule
//! out.
//!
//! Extractor state machine:
//!
//! ```text
//! START -> READING_HEADER(32 bits) -> VALIDATE_LENGTH
//!       -> { ABORT(absent) | READING_PAYLOAD(L bits) } -> DONE
//! ```

use crate::carrier::{BitAddress, Pixels, PixelsMut};
use crate::stego::capacity;
use crate::stego::frame::HEADER_BITS;

/// Write a framed bit sequence into the carrier's channel LSBs.
///
/// Returns `true` when all bits were written. Returns `false` without
/// touching a single byte when the sequence exceeds the carrier's capacity;
/// callers treat the unchanged carrier as the failure signal.
pub fn embed(pixels: &mut PixelsMut<'_>, bits: &[u8]) -> bool {
    if !capacity::fits(pixels.pixel_count(), bits.len()) {
        return false;
    }

    let mut cursor = BitAddress::ZERO;
    for &bit in bits {
        pixels.set_lsb(cursor, bit);
        cursor = cursor.next();
    }
    true
}

/// Read a framed bit sequence back out of the carrier.
///
/// Returns the full `header || payload` sequence for [`frame::unpack`], or
/// `None` (no hidden data) when the carrier cannot hold a header or the
/// declared payload length is implausible: zero, or larger than
/// `capacity - 32`. Never fails otherwise; a carrier that was never written
/// decodes to `None` or, rarely, a nonsense sequence.
///
/// [`frame::unpack`]: crate::stego::frame::unpack
pub fn extract(pixels: &Pixels<'_>) -> Option<Vec<u8>> {
    let capacity = capacity::capacity_bits(pixels.pixel_count());
    if capacity < HEADER_BITS {
        return None;
    }

    // READING_HEADER: the same cursor keeps running into the payload phase.
    let mut cursor = BitAddress::ZERO;
    let mut bits = Vec::with_capacity(HEADER_BITS);
    let mut declared = 0u32;
    for _ in 0..HEADER_BITS {
        let bit = pixels.lsb(cursor);
        declared = (declared << 1) | u32::from(bit);
        bits.push(bit);
        cursor = cursor.next();
    }

    // VALIDATE_LENGTH: an implausible length means there is nothing here.
    let declared = declared as usize;
    if declared == 0 || declared > capacity - HEADER_BITS {
        return None;
    }

    // READING_PAYLOAD: continue from the exact position the header ended at.
    bits.reserve(declared);
    for _ in 0..declared {
        bits.push(pixels.lsb(cursor));
        cursor = cursor.next();
    }

    Some(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stego::frame;

    fn rgba(pixel_count: usize, fill: u8) -> Vec<u8> {
        vec![fill; pixel_count * 4]
    }

    #[test]
    fn embed_extract_roundtrip() {
        let mut data = rgba(20, 0xFF);
        let bits = frame::pack("Hi"); // 48 bits, capacity 60
        let mut pixels = PixelsMut::from_rgba(&mut data).unwrap();
        assert!(embed(&mut pixels, &bits));

        let pixels = Pixels::from_rgba(&data).unwrap();
        let recovered = extract(&pixels).unwrap();
        assert_eq!(recovered, bits);
        assert_eq!(frame::unpack(&recovered), "Hi");
    }

    #[test]
    fn capacity_overflow_is_a_noop() {
        // 6 pixels: 18 bits of capacity, 48 needed.
        let mut data = rgba(6, 0xAB);
        let before = data.clone();
        let bits = frame::pack("Hi");
        let mut pixels = PixelsMut::from_rgba(&mut data).unwrap();
        assert!(!embed(&mut pixels, &bits));
        assert_eq!(data, before, "failed embed must not touch the carrier");
    }

    #[test]
    fn single_pixel_refused() {
        // 1x1 carrier cannot even hold the header.
        let mut data = rgba(1, 0x42);
        let before = data.clone();
        let bits = frame::pack("");
        let mut pixels = PixelsMut::from_rgba(&mut data).unwrap();
        assert!(!embed(&mut pixels, &bits));
        assert_eq!(data, before);
    }

    #[test]
    fn only_lsbs_change_and_alpha_survives() {
        let mut data = rgba(20, 0xFF);
        let bits = frame::pack("Hi");
        let mut pixels = PixelsMut::from_rgba(&mut data).unwrap();
        assert!(embed(&mut pixels, &bits));

        for (i, &byte) in data.iter().enumerate() {
            if i % 4 == 3 {
                assert_eq!(byte, 0xFF, "alpha byte {i} was modified");
            } else {
                assert!(byte == 0xFF || byte == 0xFE, "byte {i} lost high bits: {byte:#04x}");
            }
        }

        // Pixels past the last written bit (offset 47 -> byte 62) untouched.
        for (i, &byte) in data.iter().enumerate().skip(63) {
            assert_eq!(byte, 0xFF, "byte {i} past the payload was modified");
        }
    }

    #[test]
    fn embedding_is_deterministic() {
        let bits = frame::pack("determinism");
        let mut a = rgba(64, 0x7E);
        let mut b = rgba(64, 0x7E);
        assert!(embed(&mut PixelsMut::from_rgba(&mut a).unwrap(), &bits));
        assert!(embed(&mut PixelsMut::from_rgba(&mut b).unwrap(), &bits));
        assert_eq!(a, b);
    }

    #[test]
    fn payload_starts_where_the_header_ends() {
        // pack("A"): header = 8, payload bits 'A' = 01000001 at offsets 32..40.
        let mut data = rgba(20, 0x00);
        let bits = frame::pack("A");
        let mut pixels = PixelsMut::from_rgba(&mut data).unwrap();
        assert!(embed(&mut pixels, &bits));

        // Offset 31 (last header bit): pixel 10, channel 1 -> byte 41.
        assert_eq!(BitAddress::new(31).byte_offset(), 41);
        assert_eq!(data[41] & 1, 0);
        // Offset 32 (payload bit 0 = 0): pixel 10, channel 2 -> byte 42.
        assert_eq!(data[42] & 1, 0);
        // Offset 33 (payload bit 1 = 1) carries into pixel 11, channel 0 -> byte 44.
        assert_eq!(data[44] & 1, 1);
        // Offset 34 (payload bit 2 = 0): pixel 11, channel 1 -> byte 45.
        assert_eq!(data[45] & 1, 0);
        // Offset 39 (payload bit 7 = 1): pixel 13, channel 0 -> byte 52.
        assert_eq!(data[52] & 1, 1);
    }

    #[test]
    fn extractor_cursor_is_continuous() {
        // Fill the whole writable address space with a known pattern, then
        // check the extractor reads payload bits from the running cursor and
        // not from a re-zeroed loop.
        let mut data = rgba(30, 0x00);
        let mut bits = vec![0u8; 32];
        bits[28] = 1;
        bits[29] = 1; // header = 12
        bits.extend_from_slice(&[1, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1, 0]);
        let mut pixels = PixelsMut::from_rgba(&mut data).unwrap();
        assert!(embed(&mut pixels, &bits));

        let pixels = Pixels::from_rgba(&data).unwrap();
        let recovered = extract(&pixels).unwrap();
        assert_eq!(recovered.len(), 44);
        assert_eq!(recovered, bits);
    }

    #[test]
    fn zeroed_carrier_is_absent() {
        // All-zero LSBs decode to a declared length of 0.
        let data = rgba(64, 0x00);
        let pixels = Pixels::from_rgba(&data).unwrap();
        assert!(extract(&pixels).is_none());
    }

    #[test]
    fn implausible_length_is_absent() {
        // All-ones LSBs declare u32::MAX bits, far beyond capacity.
        let data = rgba(64, 0xFF);
        let pixels = Pixels::from_rgba(&data).unwrap();
        assert!(extract(&pixels).is_none());
    }

    #[test]
    fn tiny_carrier_is_absent() {
        // 10 pixels: 30 bits of capacity, not even a full header.
        let data = rgba(10, 0xFF);
        let pixels = Pixels::from_rgba(&data).unwrap();
        assert!(extract(&pixels).is_none());
    }

    #[test]
    fn declared_length_at_capacity_is_read() {
        // 20 pixels: capacity 60, so the largest plausible payload is 28 bits.
        let mut data = rgba(20, 0x00);
        let mut bits = vec![0u8; 32];
        bits[27] = 1;
        bits[28] = 1;
        bits[29] = 1; // header = 16 + 8 + 4 = 28
        bits.extend(std::iter::repeat(1u8).take(28));
        let mut pixels = PixelsMut::from_rgba(&mut data).unwrap();
        assert!(embed(&mut pixels, &bits));

        let pixels = Pixels::from_rgba(&data).unwrap();
        assert_eq!(extract(&pixels).unwrap(), bits);
    }
}

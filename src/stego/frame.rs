// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! Length-prefixed bit framing for the hidden payload.
//!
//! The wire format is a flat bit sequence (one `u8` per bit, MSB first):
//!
//! ```text
//! [32 bits] header: big-endian bit length of the payload (not byte length)
//! [L bits ] payload: 8 bits per character code point, MSB first
//! ```
//!
//! The wire format is single-byte only: each character is carried as its
//! code point truncated to 8 bits. Characters above U+00FF are therefore
//! corrupted on pack. This is a documented limitation of the format, not a
//! bug to fix silently; widening to multi-byte text changes the framing and
//! must land as an explicit versioned change.

/// Number of header bits preceding the payload.
pub const HEADER_BITS: usize = 32;

/// Frame `text` into `header || payload` bits.
///
/// The header value is `8 * char_count`, the exact bit length of the payload
/// that follows.
pub fn pack(text: &str) -> Vec<u8> {
    let payload_bits = text.chars().count() * 8;
    let mut bits = Vec::with_capacity(HEADER_BITS + payload_bits);

    let header = payload_bits as u32;
    for bit_pos in (0..HEADER_BITS).rev() {
        bits.push(((header >> bit_pos) & 1) as u8);
    }

    for ch in text.chars() {
        // Low byte of the code point; above U+00FF truncates (see module docs).
        let code = (ch as u32 & 0xFF) as u8;
        for bit_pos in (0..8).rev() {
            bits.push((code >> bit_pos) & 1);
        }
    }

    bits
}

/// Recover the text from a framed bit sequence.
///
/// Reads the first 32 bits as the payload bit length `L`, takes the `L`
/// following bits (or as many as are present), drops a trailing group
/// shorter than 8 bits, and maps each 8-bit group back to the character
/// with that code point. Input shorter than a header yields `""`.
pub fn unpack(bits: &[u8]) -> String {
    if bits.len() < HEADER_BITS {
        return String::new();
    }

    let mut declared = 0u32;
    for &bit in &bits[..HEADER_BITS] {
        declared = (declared << 1) | u32::from(bit & 1);
    }

    let available = bits.len() - HEADER_BITS;
    let take = (declared as usize).min(available);
    let payload = &bits[HEADER_BITS..HEADER_BITS + take];

    let mut text = String::with_capacity(take / 8);
    for group in payload.chunks_exact(8) {
        let mut byte = 0u8;
        for &bit in group {
            byte = (byte << 1) | (bit & 1);
        }
        text.push(char::from(byte));
    }
    text
}

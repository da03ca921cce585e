// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! Carrier capacity validation.
//!
//! A carrier holds exactly three hidden bits per pixel (R, G, B LSBs; alpha
//! is never addressed). Any successful embed satisfies
//! `header + payload bits <= capacity_bits(pixel_count)`.

use crate::carrier::WRITABLE_CHANNELS;

/// Maximum number of hidden bits the carrier can hold.
pub fn capacity_bits(pixel_count: usize) -> usize {
    pixel_count * WRITABLE_CHANNELS
}

/// Whether a framed bit sequence of `required_bits` fits the carrier.
///
/// On a `false` result the embed path must leave the carrier byte-for-byte
/// unchanged; capacity overflow is a sentinel condition, not an error.
pub fn fits(pixel_count: usize, required_bits: usize) -> bool {
    required_bits <= capacity_bits(pixel_count)
}

// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! Carrier boundary: borrowed views over an RGBA pixel buffer, plus the
//! virtual bit-address space shared by the embed and extract paths.
//!
//! The buffer itself is produced and persisted by external collaborators
//! (QR rasterization, PNG encoding); this module only defines how the codec
//! addresses it. Each pixel is a fixed (R, G, B, A) tuple of 8-bit values
//! stored row-major. Only R, G and B carry hidden bits; the alpha channel is
//! never part of the address space.

use crate::stego::error::StegoError;

/// Bytes per pixel in the carrier buffer (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Channels per pixel that carry hidden bits (R, G, B; alpha is skipped).
pub const WRITABLE_CHANNELS: usize = 3;

/// Virtual cursor over the writable-channel stream.
///
/// Maps a linear bit offset `b` to `(pixel = b / 3, channel = b % 3)`. Both
/// the embedder and the extractor walk this space with the same function,
/// which is what guarantees header/payload alignment: the last header bit
/// (offset 31) sits at pixel 10, channel 1, and the first payload bit
/// (offset 32) at pixel 10, channel 2, with no per-case branching anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct BitAddress(usize);

impl BitAddress {
    /// The first writable slot: pixel 0, red channel.
    pub const ZERO: Self = Self(0);

    /// Address of the `offset`-th writable bit slot.
    pub fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Linear offset within the writable-channel stream.
    pub fn offset(self) -> usize {
        self.0
    }

    /// Index of the pixel holding this bit.
    pub fn pixel(self) -> usize {
        self.0 / WRITABLE_CHANNELS
    }

    /// Channel within the pixel: 0 = R, 1 = G, 2 = B.
    pub fn channel(self) -> usize {
        self.0 % WRITABLE_CHANNELS
    }

    /// Byte offset in the raw RGBA buffer. Never lands on an alpha byte.
    pub fn byte_offset(self) -> usize {
        self.pixel() * CHANNELS + self.channel()
    }

    /// The next writable slot, carrying across the pixel boundary.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Read-only view over an RGBA carrier buffer.
pub struct Pixels<'a> {
    data: &'a [u8],
}

impl<'a> Pixels<'a> {
    /// Wrap a raw RGBA byte buffer.
    ///
    /// # Errors
    /// [`StegoError::MalformedCarrier`] if `data` is not a whole number of
    /// 4-byte RGBA pixels.
    pub fn from_rgba(data: &'a [u8]) -> Result<Self, StegoError> {
        if data.len() % CHANNELS != 0 {
            return Err(StegoError::MalformedCarrier { len: data.len() });
        }
        Ok(Self { data })
    }

    /// Number of pixels in the carrier.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Least-significant bit (0 or 1) of the channel byte at `addr`.
    pub fn lsb(&self, addr: BitAddress) -> u8 {
        self.data[addr.byte_offset()] & 1
    }
}

/// Mutable view over an RGBA carrier buffer.
///
/// The embedder flips channel LSBs in place through this view; the 7 high
/// bits of every channel, all alpha bytes, and every pixel past the last
/// written bit stay byte-for-byte unchanged.
pub struct PixelsMut<'a> {
    data: &'a mut [u8],
}

impl<'a> PixelsMut<'a> {
    /// Wrap a raw RGBA byte buffer for in-place embedding.
    ///
    /// # Errors
    /// [`StegoError::MalformedCarrier`] if `data` is not a whole number of
    /// 4-byte RGBA pixels.
    pub fn from_rgba(data: &'a mut [u8]) -> Result<Self, StegoError> {
        if data.len() % CHANNELS != 0 {
            return Err(StegoError::MalformedCarrier { len: data.len() });
        }
        Ok(Self { data })
    }

    /// Number of pixels in the carrier.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Overwrite the LSB of the channel byte at `addr` with `bit`.
    pub fn set_lsb(&mut self, addr: BitAddress, bit: u8) {
        let byte = &mut self.data[addr.byte_offset()];
        *byte = (*byte & 0xFE) | (bit & 1);
    }
}

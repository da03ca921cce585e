// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! Error types for the steganography core.
//!
//! Only hard boundary failures surface as [`StegoError`]. Expected conditions
//! deliberately do not: capacity overflow leaves the carrier untouched and is
//! reported as a sentinel (`false`), an implausible declared length on
//! extraction yields `None`, and a wrong passphrase decrypts to garbage or an
//! empty string without any error at all.

use core::fmt;

/// Errors that can occur at the carrier or scanner boundary.
#[derive(Debug)]
pub enum StegoError {
    /// The carrier byte buffer is not a whole number of 4-byte RGBA pixels.
    MalformedCarrier {
        /// Length of the rejected buffer in bytes.
        len: usize,
    },
    /// The injected QR symbol scanner failed in its environment
    /// (camera unavailable, decoder not loaded).
    ScanFailed(String),
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCarrier { len } => {
                write!(f, "carrier buffer of {len} bytes is not whole RGBA pixels")
            }
            Self::ScanFailed(reason) => write!(f, "QR symbol scan failed: {reason}"),
        }
    }
}

impl std::error::Error for StegoError {}

// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! Injected QR-scanning capability.
//!
//! Detecting and decoding the visible QR symbol is a dynamically loaded
//! collaborator (a camera/decoder stack in the app shell), not part of this
//! codec. It is modelled here as a capability interface so the boundary can
//! inject whatever implementation the platform provides. Nothing in the
//! codec core calls it: the core only ever sees the pixel buffer the scanner
//! already produced.

use crate::stego::error::StegoError;

/// Decodes the visible QR symbol from a rendered RGBA frame.
pub trait SymbolScanner {
    /// Scan one frame. Returns the decoded symbol text, or `None` when no
    /// symbol was found in the frame.
    ///
    /// # Errors
    /// [`StegoError::ScanFailed`] for environment faults (camera unavailable,
    /// decoder not loaded); a frame that merely contains no symbol is not an
    /// error.
    fn scan(&self, rgba: &[u8], width: u32, height: u32) -> Result<Option<String>, StegoError>;
}

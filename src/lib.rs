// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! # safeqr-core
//!
//! Pure-Rust covert-channel payload codec for hiding encrypted text messages
//! in the least-significant bits of a raster image's color channels. This is
//! the engine behind SafeQR's hidden-data feature: the visible QR symbol
//! carries the public content, while an encrypted payload rides invisibly in
//! the pixel data of the rendered image.
//!
//! The crate is purely computational: it borrows an RGBA pixel buffer from
//! its caller and either mutates channel LSBs in place (embed) or reads them
//! without mutation (extract). Rasterizing the QR symbol, persisting the
//! stego image, and detecting/decoding QR symbols from camera frames are all
//! external collaborators; see [`SymbolScanner`] for the injected scanning
//! capability.
//!
//! # Quick start
//!
//! ```rust
//! use safeqr_core::{conceal, reveal};
//!
//! // A 64x64 RGBA raster produced by the external rasterizer.
//! let mut rgba = vec![0xF0u8; 64 * 64 * 4];
//!
//! let written = conceal(&mut rgba, "meet at dawn", "passphrase").unwrap();
//! assert!(written);
//!
//! let message = reveal(&rgba, "passphrase").unwrap();
//! assert_eq!(message.as_deref(), Some("meet at dawn"));
//! ```

pub mod carrier;
pub mod scan;
pub mod stego;

pub use carrier::{BitAddress, Pixels, PixelsMut, CHANNELS, WRITABLE_CHANNELS};
pub use scan::SymbolScanner;
pub use stego::frame::HEADER_BITS;
pub use stego::{conceal, extract_hidden, reveal, StegoError};

// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! Steganographic payload codec.
//!
//! Four components, composed by the pipeline ([`conceal`], [`extract_hidden`],
//! [`reveal`]):
//!
//! - [`crypto`]: passphrase-based symmetric encryption of the payload into a
//!   self-describing ASCII token (salt and IV travel inside the token).
//! - [`frame`]: length-prefixed bit framing; a 32-bit big-endian header
//!   declares the payload's bit length.
//! - [`capacity`]: three hidden bits per pixel; embeds that do not fit are
//!   refused without touching the carrier.
//! - [`lsb`]: the embedder/extractor pair walking the carrier's R, G and B
//!   channel LSBs through one shared bit-address function.
//!
//! All operations are synchronous and purely computational. Nothing here
//! holds state across calls; the only shared resource is the thread-local
//! CSPRNG used for salt/IV generation, which is safe for concurrent use. A
//! carrier being mutated by [`conceal`] must not be read or written by
//! anyone else until the call returns.

pub mod capacity;
pub mod crypto;
pub mod error;
pub mod frame;
pub mod lsb;
mod pipeline;

pub use error::StegoError;
pub use pipeline::{conceal, extract_hidden, reveal};

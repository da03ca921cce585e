// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! Conceal/reveal pipeline.
//!
//! Embed: plaintext -> [`crypto::encrypt`] -> token -> [`frame::pack`] ->
//! capacity-gated [`lsb::embed`] -> mutated carrier.
//!
//! Extract: carrier -> [`lsb::extract`] -> [`frame::unpack`] -> token ->
//! [`crypto::decrypt`] -> plaintext (garbage when the passphrase is wrong).
//!
//! Extraction and decryption are exposed separately because the app performs
//! them at different times: the scanner extracts the token the moment an
//! image is decoded, and decryption happens later, once the user has typed a
//! passphrase.

use crate::carrier::{Pixels, PixelsMut};
use crate::stego::error::StegoError;
use crate::stego::{crypto, frame, lsb};

/// Encrypt `plaintext` under `passphrase` and embed it into the carrier.
///
/// Returns `Ok(true)` when the payload was written, `Ok(false)` when it
/// exceeds the carrier's capacity; in the latter case the buffer is left
/// byte-for-byte unchanged.
///
/// # Errors
/// [`StegoError::MalformedCarrier`] if `rgba` is not whole RGBA pixels.
pub fn conceal(rgba: &mut [u8], plaintext: &str, passphrase: &str) -> Result<bool, StegoError> {
    let token = crypto::encrypt(plaintext, passphrase);
    let bits = frame::pack(&token);
    let mut pixels = PixelsMut::from_rgba(rgba)?;
    Ok(lsb::embed(&mut pixels, &bits))
}

/// Extract the embedded ciphertext token without decrypting it.
///
/// Returns `Ok(None)` when the carrier holds no plausible hidden data.
///
/// # Errors
/// [`StegoError::MalformedCarrier`] if `rgba` is not whole RGBA pixels.
pub fn extract_hidden(rgba: &[u8]) -> Result<Option<String>, StegoError> {
    let pixels = Pixels::from_rgba(rgba)?;
    Ok(lsb::extract(&pixels).map(|bits| frame::unpack(&bits)))
}

/// Extract and decrypt the hidden message in one step.
///
/// A wrong passphrase still yields `Ok(Some(..))`, usually an empty or
/// garbled string; absence of an error does not imply the passphrase was
/// correct.
///
/// # Errors
/// [`StegoError::MalformedCarrier`] if `rgba` is not whole RGBA pixels.
pub fn reveal(rgba: &[u8], passphrase: &str) -> Result<Option<String>, StegoError> {
    Ok(extract_hidden(rgba)?.map(|token| crypto::decrypt(&token, passphrase)))
}

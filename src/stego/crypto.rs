// Copyright (c) 2026 SafeQR contributors
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/safeqr/safeqr-core

//! Passphrase-based payload encryption.
//!
//! The hidden payload is encrypted before framing so that the bits embedded
//! in the carrier are indistinguishable from noise without the passphrase.
//! The token format is self-describing:
//!
//! ```text
//! base64( [16 bytes] salt  -- Argon2id key derivation, random per call
//!         [16 bytes] iv    -- AES-CBC initialization vector, random per call
//!         [N bytes ] ciphertext (AES-256-CBC, PKCS#7 padded) )
//! ```
//!
//! Two calls to [`encrypt`] with identical inputs produce different tokens
//! because salt and IV are freshly drawn each time.
//!
//! There is deliberately no authentication tag. A wrong passphrase or a
//! corrupted token does not raise: [`decrypt`] returns whatever bytes the
//! cipher produces, usually an empty string (padding check fails) and
//! occasionally garbled text. Callers must not infer success from the
//! absence of an error. Switching to an AEAD mode would change this
//! observable contract and has to land as an opt-in, versioned format.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use argon2::Argon2;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use zeroize::Zeroizing;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Argon2 salt length in bytes.
pub const SALT_LEN: usize = 16;
/// AES-CBC initialization vector length in bytes.
pub const IV_LEN: usize = 16;
/// AES block length in bytes; ciphertext length is always a multiple of this.
const BLOCK_LEN: usize = 16;

/// Derive the AES-256 encryption key from passphrase + salt.
pub fn derive_key(passphrase: &str, salt: &[u8]) -> Zeroizing<[u8; 32]> {
    let mut key = Zeroizing::new([0u8; 32]);
    Argon2::default()
        .hash_password_into(passphrase.as_bytes(), salt, &mut *key)
        .expect("Argon2 key derivation should not fail");
    key
}

/// Encrypt `plaintext` under `passphrase` into a self-describing ASCII token.
///
/// Non-deterministic: a fresh random salt and IV are drawn on every call, so
/// identical inputs produce different tokens that all decrypt to the same
/// plaintext.
pub fn encrypt(plaintext: &str, passphrase: &str) -> String {
    use rand::RngCore;
    let mut rng = rand::thread_rng();

    let mut salt = [0u8; SALT_LEN];
    rng.fill_bytes(&mut salt);

    let mut iv = [0u8; IV_LEN];
    rng.fill_bytes(&mut iv);

    let key = derive_key(passphrase, &salt);
    let cipher = Aes256CbcEnc::new_from_slices(&*key, &iv).expect("valid key/iv length");
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    let mut blob = Vec::with_capacity(SALT_LEN + IV_LEN + ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&iv);
    blob.extend_from_slice(&ciphertext);

    BASE64.encode(blob)
}

/// Decrypt a token produced by [`encrypt`].
///
/// Silent contract: never raises and never panics. A token that is not valid
/// base64, too short to hold salt + IV, or whose ciphertext is not whole AES
/// blocks yields `""`. A wrong passphrase usually trips the PKCS#7 padding
/// check (also `""`) but can slip through as garbled text. Plaintext bytes
/// that are not valid UTF-8 are decoded lossily.
pub fn decrypt(token: &str, passphrase: &str) -> String {
    let Ok(blob) = BASE64.decode(token.trim()) else {
        return String::new();
    };
    if blob.len() < SALT_LEN + IV_LEN {
        return String::new();
    }

    let (salt, rest) = blob.split_at(SALT_LEN);
    let (iv, ciphertext) = rest.split_at(IV_LEN);
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_LEN != 0 {
        return String::new();
    }

    let key = derive_key(passphrase, salt);
    let cipher = Aes256CbcDec::new_from_slices(&*key, iv).expect("valid key/iv length");
    match cipher.decrypt_padded_vec_mut::<Pkcs7>(ciphertext) {
        Ok(plaintext) => String::from_utf8_lossy(&plaintext).into_owned(),
        Err(_) => String::new(),
    }
}

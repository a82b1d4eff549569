// src/crypto/codec.rs
//! Pure cryptographic primitives: no I/O, no database

use aes::Aes256;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use sha2::{Digest, Sha256};

use crate::aliases::{ColumnKey32, DbSecret};
use crate::consts::{BLOCK_SIZE, KEY_SIZE};
use crate::error::CryptoError;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// Derive the column key: SHA-256 of the secret, which is exactly the AES-256 key length
pub fn derive_key(secret: &[u8]) -> ColumnKey32 {
    let mut key = [0u8; KEY_SIZE];
    key.copy_from_slice(&Sha256::digest(secret));
    ColumnKey32::new(key)
}

fn iv_for(key: &[u8; KEY_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut iv = [0u8; BLOCK_SIZE];
    iv.copy_from_slice(&key[..BLOCK_SIZE]);
    iv
}

/// Encrypt a UTF-8 string → raw ciphertext (a whole number of blocks)
pub fn encrypt(plaintext: &str, key: &ColumnKey32) -> Vec<u8> {
    let key = key.expose_secret();
    let iv = iv_for(key);
    Aes256CbcEnc::new(&(*key).into(), &iv.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes())
}

/// Decrypt raw ciphertext → UTF-8 string
pub fn decrypt(ciphertext: &[u8], key: &ColumnKey32) -> Result<String> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::Malformed {
            len: ciphertext.len(),
        });
    }

    let key = key.expose_secret();
    let iv = iv_for(key);
    let plaintext = Aes256CbcDec::new(&(*key).into(), &iv.into())
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| CryptoError::PaddingInvalid)?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::NotUtf8)
}

/// The process-wide column cipher
///
/// Built once at startup from the configured secret and handed to whatever
/// touches encrypted columns. A codec built without a secret still exists so
/// that code paths which never touch encrypted data work; every
/// encrypt/decrypt call on it fails with `SecretUnavailable`.
pub struct CryptoCodec {
    key: Option<ColumnKey32>,
}

impl CryptoCodec {
    pub fn new(secret: &DbSecret) -> Self {
        Self::from_secret(secret.expose_secret())
    }

    pub fn from_secret(secret: &str) -> Self {
        Self {
            key: Some(derive_key(secret.as_bytes())),
        }
    }

    /// A codec with no secret configured
    pub fn unavailable() -> Self {
        Self { key: None }
    }

    pub fn is_available(&self) -> bool {
        self.key.is_some()
    }

    fn key(&self) -> Result<&ColumnKey32> {
        self.key.as_ref().ok_or(CryptoError::SecretUnavailable)
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<Vec<u8>> {
        Ok(encrypt(plaintext, self.key()?))
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<String> {
        decrypt(ciphertext, self.key()?)
    }

    /// Encrypt and base64-encode, the form stored in encrypted columns
    pub fn encode(&self, plaintext: &str) -> Result<String> {
        Ok(STANDARD.encode(self.encrypt(plaintext)?))
    }

    /// Base64-decode and decrypt a stored column value
    pub fn decode(&self, stored: &str) -> Result<String> {
        // Check the secret first so a missing secret is reported as such
        let key = self.key()?;
        let raw = STANDARD.decode(stored)?;
        decrypt(&raw, key)
    }
}

impl std::fmt::Debug for CryptoCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoCodec")
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

// src/crypto/mod.rs
//! Deterministic column encryption
//!
//! AES-256-CBC keyed by `SHA-256(DB_SECRET)`, with the IV fixed to the first
//! block of the key and PKCS#7 padding. Same plaintext + same secret always
//! yields the same ciphertext, so unique indexes and `WHERE col = ?` lookups
//! keep working on encrypted columns. That determinism leaks plaintext
//! equality to anyone who can read the column; fields that never need an
//! equality lookup belong in a randomized type instead.

pub mod codec;
pub mod length;

pub use codec::{decrypt, derive_key, encrypt, CryptoCodec};
pub use length::{calculate_encrypted_length, padded_length};

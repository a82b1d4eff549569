// src/crypto/length.rs
//! Ciphertext length budgeting
//!
//! Column widths are planned from the plaintext budget, never discovered.

use crate::consts::BLOCK_SIZE;

/// Raw ciphertext bytes for a plaintext of at most `n` bytes: `ceil((n + 1) / 16) * 16`
pub const fn padded_length(n: usize) -> usize {
    (n + 1).div_ceil(BLOCK_SIZE) * BLOCK_SIZE
}

/// Stored width of an encrypted column with a plaintext budget of `n` bytes
///
/// The padded ciphertext is base64-encoded, so the result is the padded
/// length × 4/3 rounded up to a multiple of 4. Use it as
/// `VARCHAR(calculate_encrypted_length(n))`.
pub const fn calculate_encrypted_length(n: usize) -> usize {
    padded_length(n).div_ceil(3) * 4
}

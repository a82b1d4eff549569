// tests/crypto_tests.rs
use appointment_schema::aliases::{DbSecret, SecureConversionsExt};
use appointment_schema::crypto::*;
use appointment_schema::error::CryptoError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use proptest::prelude::*;

mod support;
use support::{codec, TEST_SECRET};

// Produced with `openssl enc -aes-256-cbc -K sha256(secret) -iv sha256(secret)[..16]`
const VECTORS: &[(&str, &str)] = &[
    ("hello", "HlxKoyl8JNhX2dlpNiWL2Q=="),
    ("", "GH58fyyI+hLU517MvvPJpw=="),
    ("alice@example.com", "yBReHT8laalKaMJyQhBtsjvaem8XnepKYmy8YcuVhRY="),
    ("0123456789abcdef", "tddyWKJxVPP5ZBllCh1MJEqYUebh6w/7ewLbyG+RE2Y="),
];

#[test]
fn test_known_vectors_match_openssl() {
    let codec = codec();
    for (plain, stored) in VECTORS {
        assert_eq!(codec.encode(plain).unwrap(), *stored, "encoding {plain:?}");
        assert_eq!(codec.decode(stored).unwrap(), *plain);
    }
}

#[test]
fn test_derive_key_is_sha256_of_secret() {
    let key = derive_key(TEST_SECRET.as_bytes());
    assert_eq!(
        key.expose_secret().to_hex(),
        "c2f9832f3110958aaacc8cfed7d8a3c24d91deedb5bc5bea1966f7884c3c1b10"
    );
}

#[test]
fn test_encryption_is_deterministic() {
    let a = codec();
    let b = CryptoCodec::new(&DbSecret::new(TEST_SECRET.to_string()));
    assert_eq!(
        a.encode("booking@example.com").unwrap(),
        b.encode("booking@example.com").unwrap()
    );
}

#[test]
fn test_different_secrets_give_different_ciphertext() {
    let a = codec();
    let b = CryptoCodec::from_secret("another-secret");
    assert_ne!(a.encode("same").unwrap(), b.encode("same").unwrap());
}

#[test]
fn test_wrong_secret_does_not_yield_plaintext() {
    let stored = codec().encode("alice@example.com").unwrap();
    let other = CryptoCodec::from_secret("another-secret");
    match other.decode(&stored) {
        Ok(plain) => assert_ne!(plain, "alice@example.com"),
        Err(e) => assert!(matches!(
            e,
            CryptoError::PaddingInvalid | CryptoError::NotUtf8
        )),
    }
}

#[test]
fn test_empty_string_encrypts_to_one_block() {
    let raw = codec().encrypt("").unwrap();
    assert_eq!(raw.len(), 16);
    assert_eq!(codec().decrypt(&raw).unwrap(), "");
}

#[test]
fn test_block_aligned_plaintext_gets_full_padding_block() {
    let raw = codec().encrypt("0123456789abcdef").unwrap();
    assert_eq!(raw.len(), 32);
}

#[test]
fn test_multibyte_utf8_roundtrip() {
    let codec = codec();
    let plain = "Zürich → 東京 🗓";
    assert_eq!(codec.decode(&codec.encode(plain).unwrap()).unwrap(), plain);
}

#[test]
fn test_malformed_ciphertext_length_rejected() {
    let key = derive_key(TEST_SECRET.as_bytes());
    assert!(matches!(
        decrypt(&[0u8; 15], &key),
        Err(CryptoError::Malformed { len: 15 })
    ));
    assert!(matches!(
        decrypt(&[], &key),
        Err(CryptoError::Malformed { len: 0 })
    ));
}

#[test]
fn test_invalid_base64_rejected() {
    assert!(matches!(
        codec().decode("not base64!!"),
        Err(CryptoError::Base64(_))
    ));
}

#[test]
fn test_corrupted_padding_rejected() {
    let codec = codec();
    let mut raw = codec.encrypt("hello").unwrap();
    // Flipping the last byte of a single-block message scrambles the whole block
    let last = raw.len() - 1;
    raw[last] ^= 0xff;
    let stored = STANDARD.encode(&raw);
    match codec.decode(&stored) {
        Err(CryptoError::PaddingInvalid) | Err(CryptoError::NotUtf8) => {}
        Ok(plain) => assert_ne!(plain, "hello"),
        Err(other) => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_secret_is_reported() {
    let codec = CryptoCodec::unavailable();
    assert!(!codec.is_available());
    assert!(matches!(
        codec.encode("x"),
        Err(CryptoError::SecretUnavailable)
    ));
    assert!(matches!(
        codec.decode("HlxKoyl8JNhX2dlpNiWL2Q=="),
        Err(CryptoError::SecretUnavailable)
    ));
}

#[test]
fn test_debug_output_redacts_key() {
    let shown = format!("{:?}", codec());
    assert!(shown.contains("REDACTED"));
    assert!(!shown.contains("c2f9832f"));
}

#[test]
fn test_encrypted_length_known_values() {
    assert_eq!(calculate_encrypted_length(0), 24);
    assert_eq!(calculate_encrypted_length(15), 24);
    assert_eq!(calculate_encrypted_length(16), 44);
    assert_eq!(calculate_encrypted_length(32), 64);
    assert_eq!(calculate_encrypted_length(255), 344);
    assert_eq!(calculate_encrypted_length(2048), 2752);
}

#[test]
fn test_padded_length_boundaries() {
    assert_eq!(padded_length(0), 16);
    assert_eq!(padded_length(15), 16);
    assert_eq!(padded_length(16), 32);
    assert_eq!(padded_length(31), 32);
    assert_eq!(padded_length(32), 48);
}

proptest! {
    #[test]
    fn prop_roundtrip_any_string(s in "\\PC{0,200}") {
        let codec = codec();
        let stored = codec.encode(&s).unwrap();
        prop_assert_eq!(codec.decode(&stored).unwrap(), s);
    }

    #[test]
    fn prop_stored_length_matches_budget(s in "\\PC{0,300}") {
        let stored = codec().encode(&s).unwrap();
        prop_assert_eq!(stored.len(), calculate_encrypted_length(s.len()));
    }

    #[test]
    fn prop_length_monotone_and_block_aligned(n in 0usize..10_000) {
        prop_assert!(calculate_encrypted_length(n + 1) >= calculate_encrypted_length(n));
        prop_assert_eq!(padded_length(n) % 16, 0);
        prop_assert!(padded_length(n) > n);
        prop_assert_eq!(calculate_encrypted_length(n) % 4, 0);
    }
}

// src/types.rs
//! Encrypted column types
//!
//! Application code sees strings (or enum values); the database sees
//! base64 ciphertext in a `VARCHAR` whose width comes from the length
//! formula. NULL is never encrypted: it round-trips as SQL NULL.

use std::marker::PhantomData;

use crate::crypto::{calculate_encrypted_length, CryptoCodec};
use crate::enums::StoredEnum;
use crate::error::CryptoError;

pub type Result<T> = std::result::Result<T, CryptoError>;

/// A string column stored as deterministic ciphertext
#[derive(Debug, Clone, Copy)]
pub struct EncryptedString<'c> {
    codec: &'c CryptoCodec,
    length: Option<usize>,
}

impl<'c> EncryptedString<'c> {
    /// Column with a plaintext budget of `length` bytes
    pub fn new(codec: &'c CryptoCodec, length: usize) -> Self {
        Self {
            codec,
            length: Some(length),
        }
    }

    /// Unbounded column stored as `TEXT`
    pub fn text(codec: &'c CryptoCodec) -> Self {
        Self {
            codec,
            length: None,
        }
    }

    pub fn plaintext_length(&self) -> Option<usize> {
        self.length
    }

    /// Physical width of the column, in characters of base64
    pub fn column_length(&self) -> Option<usize> {
        self.length.map(calculate_encrypted_length)
    }

    /// DDL type for this column
    pub fn sql_type(&self) -> String {
        match self.column_length() {
            Some(width) => format!("VARCHAR({width})"),
            None => "TEXT".to_string(),
        }
    }

    /// Value to write: plaintext → stored ciphertext
    pub fn bind(&self, value: Option<&str>) -> Result<Option<String>> {
        value.map(|v| self.codec.encode(v)).transpose()
    }

    /// Value read back: stored ciphertext → plaintext
    pub fn result(&self, value: Option<&str>) -> Result<Option<String>> {
        value.map(|v| self.codec.decode(v)).transpose()
    }
}

/// An enum column whose serialized member name is stored encrypted
///
/// Membership is checked before encryption on write and after decryption
/// on read.
#[derive(Debug, Clone, Copy)]
pub struct EncryptedEnum<'c, E> {
    inner: EncryptedString<'c>,
    _members: PhantomData<E>,
}

impl<'c, E: StoredEnum> EncryptedEnum<'c, E> {
    pub fn new(codec: &'c CryptoCodec, length: usize) -> Self {
        Self {
            inner: EncryptedString::new(codec, length),
            _members: PhantomData,
        }
    }

    pub fn sql_type(&self) -> String {
        self.inner.sql_type()
    }

    pub fn column_length(&self) -> Option<usize> {
        self.inner.column_length()
    }

    pub fn bind(&self, value: Option<E>) -> Result<Option<String>> {
        self.inner.bind(value.map(|v| v.as_str()))
    }

    /// Bind an untyped value, rejecting anything outside the enum
    pub fn bind_str(&self, value: Option<&str>) -> Result<Option<String>> {
        let member = value.map(parse_member::<E>).transpose()?;
        self.bind(member)
    }

    pub fn result(&self, value: Option<&str>) -> Result<Option<E>> {
        self.inner
            .result(value)?
            .map(|plain| parse_member::<E>(&plain))
            .transpose()
    }
}

fn parse_member<E: StoredEnum>(value: &str) -> Result<E> {
    E::parse(value).ok_or_else(|| CryptoError::InvalidEnumMember {
        enum_name: E::NAME,
        value: value.to_string(),
    })
}

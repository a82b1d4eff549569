// src/aliases.rs
//! Re-exports secure-gate's secret types
//!
//! Key material and the process secret never live in plain `Vec`/`String`s;
//! both zeroize on drop.

pub use secure_gate::{dynamic_alias, fixed_alias, SecureConversionsExt};

// Fixed-size secrets
fixed_alias!(ColumnKey32, 32); // AES-256 key derived from DB_SECRET

// Dynamic secrets
dynamic_alias!(DbSecret, String); // raw DB_SECRET as read from the environment

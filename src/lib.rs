// src/lib.rs
//! appointment-schema: schema migrations for the appointment backend
//!
//! Features:
//! - Deterministic AES-256-CBC column encryption (equality lookups keep working)
//! - Revision graph with fork/merge validation and a single linear order
//! - Transactional upgrade/downgrade with one transaction per revision
//! - Enum column widening for SQLite and MySQL
//! - File-based cron mutex for scheduled jobs

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod db;
pub mod enums;
pub mod error;
pub mod lock;
pub mod migrate;
pub mod revisions;
pub mod types;

// Re-export everything users need at the crate root
pub use aliases::{ColumnKey32, DbSecret};
pub use config::load as load_config;
pub use crypto::{calculate_encrypted_length, CryptoCodec};
pub use error::{
    ConfigError, CoreError, CryptoError, MigrationError, MutexError, RegistryError,
};
pub use lock::{CronGuard, CronMutex};
pub use migrate::{
    Direction, MigrationContext, MigrationReport, MigrationRunner, Registry, Revision, Target,
};
pub use types::{EncryptedEnum, EncryptedString};

// src/consts.rs
//! Shared constants: cipher parameters and operational defaults

/// AES block size in bytes; ciphertext is always a multiple of this
pub const BLOCK_SIZE: usize = 16;

/// AES-256 key length produced by the SHA-256 key derivation
pub const KEY_SIZE: usize = 32;

/// Table holding the AppliedVersion row
pub const DEFAULT_VERSION_TABLE: &str = "alembic_version";

/// Width of `version_num` in the version table
pub const VERSION_NUM_LENGTH: usize = 32;

/// Environment variable holding the column-encryption secret
pub const DEFAULT_SECRET_ENV: &str = "DB_SECRET";

/// Directory where cron lock files live
pub const DEFAULT_LOCK_DIR: &str = "/tmp";

/// Mutex name used by the operator CLI for mutating commands
pub const DEFAULT_LOCK_NAME: &str = "appointment-migrate";

/// Default SQLite database file
pub const DEFAULT_DATABASE_PATH: &str = "appointment.db";

/// Default config file, overridable with `APPT_CONFIG`
pub const DEFAULT_CONFIG_PATH: &str = "appointment.toml";

/// Milliseconds SQLite waits on a locked database before failing
pub const DB_BUSY_TIMEOUT_MS: u32 = 5_000;

/// Number of hex digits in a generated revision id
pub const REVISION_ID_HEX_LEN: usize = 12;

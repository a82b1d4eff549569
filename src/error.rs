// src/error.rs
//! Public error types for the entire crate
//!
//! One enum per subsystem; `CoreError` unifies them for callers that
//! cross subsystem boundaries (the CLI, mostly).

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the deterministic column cipher and the encrypted column types
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("column secret is not configured")]
    SecretUnavailable,

    #[error("ciphertext length {len} is not a multiple of the block size")]
    Malformed { len: usize },

    #[error("ciphertext padding is invalid")]
    PaddingInvalid,

    #[error("decrypted bytes are not valid UTF-8")]
    NotUtf8,

    #[error("stored ciphertext is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("{value:?} is not a member of {enum_name}")]
    InvalidEnumMember {
        enum_name: &'static str,
        value: String,
    },
}

/// Revision graph validation failures; all of them are fatal at load time
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("revision id {0} is declared more than once")]
    DuplicateId(String),

    #[error("revision {id} names unknown parent {parent}")]
    UnknownParent { id: String, parent: String },

    #[error("revision graph contains a cycle through {0}")]
    CycleDetected(String),

    #[error("revision graph has several heads ({}); add a merge revision", .0.join(", "))]
    AmbiguousHead(Vec<String>),

    #[error("revision graph has no head")]
    MissingHead,

    #[error("revision graph has several roots ({})", .0.join(", "))]
    MultipleRoots(Vec<String>),
}

/// Direction of a migration run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Upgrade,
    Downgrade,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Upgrade => f.write_str("upgrade"),
            Direction::Downgrade => f.write_str("downgrade"),
        }
    }
}

/// Runner failures, plus everything a revision step can raise
#[derive(Error, Debug)]
pub enum MigrationError {
    #[error("no revision matches target {0:?}")]
    NoSuchTarget(String),

    #[error("target {target:?} matches several revisions: {}", .candidates.join(", "))]
    AmbiguousTarget {
        target: String,
        candidates: Vec<String>,
    },

    #[error("cannot {direction} from {} to {}", .from.as_deref().unwrap_or("base"), .to.as_deref().unwrap_or("base"))]
    TargetNotReachable {
        direction: Direction,
        from: Option<String>,
        to: Option<String>,
    },

    #[error("database is stamped with unknown revision {0}")]
    UnknownAppliedVersion(String),

    #[error("revision {id} failed")]
    RevisionFailed {
        id: String,
        #[source]
        source: Box<MigrationError>,
    },

    #[error("{0:?} is not a valid SQL identifier")]
    InvalidIdentifier(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MigrationError {
    /// Id of the revision that failed, if this is a revision failure
    pub fn failed_revision(&self) -> Option<&str> {
        match self {
            MigrationError::RevisionFailed { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Cron mutex failures
#[derive(Error, Debug)]
pub enum MutexError {
    #[error("lock {} is already held", .path.display())]
    AlreadyHeld { path: PathBuf },

    #[error("failed to release lock {}: {source}", .path.display())]
    ReleaseFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0:?} is not a valid lock name")]
    InvalidName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Config file failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Crate-wide error
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Migration(#[from] MigrationError),

    #[error(transparent)]
    Mutex(#[from] MutexError),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),
}

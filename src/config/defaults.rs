// src/config/defaults.rs
use crate::config::app::{Crypto, Database, Locks};
use crate::consts::{
    DEFAULT_DATABASE_PATH, DEFAULT_LOCK_DIR, DEFAULT_LOCK_NAME, DEFAULT_SECRET_ENV,
    DEFAULT_VERSION_TABLE,
};

pub fn default_database() -> Database {
    Database {
        path: DEFAULT_DATABASE_PATH.into(),
        version_table: DEFAULT_VERSION_TABLE.into(),
    }
}

pub fn default_crypto() -> Crypto {
    Crypto {
        secret_env: DEFAULT_SECRET_ENV.into(),
    }
}

pub fn default_locks() -> Locks {
    Locks {
        dir: DEFAULT_LOCK_DIR.into(),
        name: DEFAULT_LOCK_NAME.into(),
    }
}

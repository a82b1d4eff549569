// src/db.rs
//! Opening the database a migration run binds to

use std::time::Duration;
use std::{fs, path::Path};

use rusqlite::{Connection, Result};
use tracing::warn;

use crate::consts::DB_BUSY_TIMEOUT_MS;

pub fn open_database(path: impl AsRef<Path>) -> Result<Connection> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!(dir = %parent.display(), "failed to create database directory: {e}");
        }
    }

    let conn = Connection::open(path)?;
    configure(&conn)?;
    Ok(conn)
}

pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(Duration::from_millis(u64::from(DB_BUSY_TIMEOUT_MS)))?;
    Ok(())
}

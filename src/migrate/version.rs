// src/migrate/version.rs
//! The AppliedVersion table
//!
//! Single column, at most one row. No row (or no table) means nothing has
//! been applied.

use rusqlite::{Connection, OptionalExtension};

use super::enum_ddl::validate_identifier;
use crate::consts::{DEFAULT_VERSION_TABLE, VERSION_NUM_LENGTH};
use crate::error::MigrationError;

#[derive(Debug, Clone)]
pub struct VersionTable {
    name: String,
}

impl Default for VersionTable {
    fn default() -> Self {
        Self {
            name: DEFAULT_VERSION_TABLE.to_string(),
        }
    }
}

impl VersionTable {
    pub fn new(name: &str) -> Result<Self, MigrationError> {
        Ok(Self {
            name: validate_identifier(name)?.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn exists(&self, conn: &Connection) -> Result<bool, MigrationError> {
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [&self.name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn ensure(&self, conn: &Connection) -> Result<(), MigrationError> {
        conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {name} (
                version_num VARCHAR({VERSION_NUM_LENGTH}) NOT NULL,
                CONSTRAINT {name}_pkc PRIMARY KEY (version_num)
            );",
            name = self.name
        ))?;
        Ok(())
    }

    pub fn read(&self, conn: &Connection) -> Result<Option<String>, MigrationError> {
        if !self.exists(conn)? {
            return Ok(None);
        }
        let mut stmt = conn.prepare(&format!("SELECT version_num FROM {}", self.name))?;
        let mut rows: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<_>>()?;
        // More than one row only happens through manual edits; report the first
        rows.truncate(1);
        Ok(rows.pop())
    }

    /// Replace the row with `id`, or delete it for base
    pub fn write(&self, conn: &Connection, id: Option<&str>) -> Result<(), MigrationError> {
        self.ensure(conn)?;
        conn.execute(&format!("DELETE FROM {}", self.name), [])?;
        if let Some(id) = id {
            conn.execute(
                &format!("INSERT INTO {} (version_num) VALUES (?1)", self.name),
                [id],
            )?;
        }
        Ok(())
    }
}

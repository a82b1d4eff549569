// src/migrate/context.rs
//! What a revision's `forward`/`reverse` gets to work with

use rusqlite::{Connection, Params, Transaction};
use tracing::info;

use super::enum_ddl::Dialect;
use crate::crypto::CryptoCodec;
use crate::enums::StoredEnum;
use crate::error::MigrationError;
use crate::types::{EncryptedEnum, EncryptedString};

/// Execution context for one revision
///
/// Everything issued through it runs inside the revision's transaction,
/// so on SQLite schema and row changes commit or roll back together with
/// the AppliedVersion update. The dialect is always [`Dialect::Sqlite`].
pub struct MigrationContext<'a> {
    tx: &'a Transaction<'a>,
    codec: &'a CryptoCodec,
    dialect: Dialect,
    revision: &'static str,
}

impl<'a> MigrationContext<'a> {
    pub fn new(tx: &'a Transaction<'a>, codec: &'a CryptoCodec, revision: &'static str) -> Self {
        Self {
            tx,
            codec,
            dialect: Dialect::Sqlite,
            revision,
        }
    }

    /// Id of the revision being executed
    pub fn revision(&self) -> &'static str {
        self.revision
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Handle for DDL
    pub fn bind(&self) -> &Connection {
        self.tx
    }

    /// Transactional handle for DML in data migrations
    pub fn session(&self) -> &Transaction<'a> {
        self.tx
    }

    pub fn execute<P: Params>(&self, sql: &str, params: P) -> Result<usize, MigrationError> {
        Ok(self.tx.execute(sql, params)?)
    }

    pub fn execute_batch(&self, sql: &str) -> Result<(), MigrationError> {
        Ok(self.tx.execute_batch(sql)?)
    }

    pub fn codec(&self) -> &'a CryptoCodec {
        self.codec
    }

    /// Encrypted column with a plaintext budget of `length` bytes
    pub fn encrypted_type(&self, length: usize) -> EncryptedString<'a> {
        EncryptedString::new(self.codec, length)
    }

    pub fn encrypted_text(&self) -> EncryptedString<'a> {
        EncryptedString::text(self.codec)
    }

    pub fn encrypted_enum<E: StoredEnum>(&self, length: usize) -> EncryptedEnum<'a, E> {
        EncryptedEnum::new(self.codec, length)
    }

    /// Column definition for a NOT NULL enum column in this dialect
    pub fn enum_column(&self, column: &str, values: &[&str]) -> Result<String, MigrationError> {
        self.dialect.enum_column(column, values)
    }

    /// Move `table.column` from `old_values` to `new_values`; see [`Dialect::alter_enum`]
    pub fn alter_enum(
        &self,
        table: &str,
        column: &str,
        old_values: &[&str],
        new_values: &[&str],
    ) -> Result<(), MigrationError> {
        for statement in self
            .dialect
            .alter_enum(table, column, old_values, new_values)?
        {
            self.tx.execute_batch(&statement)?;
        }
        info!(
            revision = self.revision,
            "Altered {table}.{column} to ({})",
            new_values.join(", ")
        );
        Ok(())
    }

    /// Progress line for data migrations
    pub fn report_filled(&self, table: &str, rows: usize) {
        info!(revision = self.revision, "Filled {rows} rows in {table}");
    }
}

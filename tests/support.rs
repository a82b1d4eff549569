// tests/support.rs
//! Test utilities: throwaway databases and a fixed column secret

use std::path::{Path, PathBuf};

use appointment_schema::crypto::CryptoCodec;
use appointment_schema::db::open_database;
use appointment_schema::migrate::{MigrationRunner, Registry, VersionTable};
use rusqlite::Connection;
use tempfile::TempDir;

pub const TEST_SECRET: &str = "test-db-secret-2025";

#[allow(dead_code)]
pub fn codec() -> CryptoCodec {
    CryptoCodec::from_secret(TEST_SECRET)
}

/// A database file in its own temp dir; both go away on drop
#[allow(dead_code)] // not every test binary uses every helper
pub struct TestDb {
    pub conn: Connection,
    path: PathBuf,
    _dir: TempDir,
}

#[allow(dead_code)]
impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("appointment.db");
        let conn = open_database(&path).expect("open test db");
        Self {
            conn,
            path,
            _dir: dir,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A second connection to the same file
    pub fn reopen(&self) -> Connection {
        open_database(&self.path).expect("reopen test db")
    }

    pub fn table_exists(&self, table: &str) -> bool {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |row| row.get::<_, i64>(0),
            )
            .expect("query sqlite_master")
            > 0
    }

    pub fn index_exists(&self, index: &str) -> bool {
        self.conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'index' AND name = ?1",
                [index],
                |row| row.get::<_, i64>(0),
            )
            .expect("query sqlite_master")
            > 0
    }

    pub fn columns(&self, table: &str) -> Vec<String> {
        let mut stmt = self
            .conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .expect("prepare table_info");
        stmt.query_map([], |row| row.get::<_, String>(1))
            .expect("query table_info")
            .collect::<Result<_, _>>()
            .expect("read table_info")
    }

    pub fn has_column(&self, table: &str, column: &str) -> bool {
        self.columns(table).iter().any(|c| c == column)
    }

    pub fn count(&self, table: &str) -> i64 {
        self.conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })
            .expect("count rows")
    }

    /// Every user table, sorted; the version table included
    pub fn tables(&self) -> Vec<String> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT name FROM sqlite_master WHERE type = 'table' \
                 AND name NOT LIKE 'sqlite_%' ORDER BY name",
            )
            .expect("prepare table list");
        stmt.query_map([], |row| row.get::<_, String>(0))
            .expect("query table list")
            .collect::<Result<_, _>>()
            .expect("read table list")
    }

    pub fn version(&self) -> Option<String> {
        VersionTable::default()
            .read(&self.conn)
            .expect("read version")
    }
}

#[allow(dead_code)]
pub fn corpus() -> Registry {
    appointment_schema::revisions::registry().expect("corpus is well-formed")
}

#[allow(dead_code)]
pub fn runner<'r>(registry: &'r Registry, codec: &'r CryptoCodec) -> MigrationRunner<'r> {
    MigrationRunner::new(registry, codec)
}

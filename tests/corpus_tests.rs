// tests/corpus_tests.rs
//! The full revision corpus against a fresh database

use std::collections::BTreeMap;

use appointment_schema::migrate::MigrationRunner;
use appointment_schema::revisions;
use rusqlite::params;

mod common;
mod support;
use support::{codec, corpus, TestDb};

/// Column name → (type, notnull, default), per table, plus index names
type Snapshot = BTreeMap<String, (BTreeMap<String, (String, bool, Option<String>)>, Vec<String>)>;

fn snapshot(db: &TestDb) -> Snapshot {
    let mut out = Snapshot::new();
    for table in db.tables() {
        let mut stmt = db
            .conn
            .prepare(&format!("PRAGMA table_info({table})"))
            .unwrap();
        let columns = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(1)?,
                    (row.get(2)?, row.get::<_, i64>(3)? != 0, row.get(4)?),
                ))
            })
            .unwrap()
            .collect::<Result<BTreeMap<_, _>, _>>()
            .unwrap();

        let mut stmt = db
            .conn
            .prepare(
                "SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = ?1 \
                 AND name NOT LIKE 'sqlite_autoindex%' ORDER BY name",
            )
            .unwrap();
        let indexes = stmt
            .query_map(params![table], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<String>, _>>()
            .unwrap();

        out.insert(table, (columns, indexes));
    }
    out
}

#[test]
fn test_fresh_database_upgrades_to_head() {
    common::setup();
    let mut db = TestDb::new();
    let registry = corpus();
    let codec = codec();
    let runner = MigrationRunner::new(&registry, &codec);

    let report = runner.upgrade(&mut db.conn, "head").unwrap();
    assert_eq!(report.steps.len(), registry.len());
    assert_eq!(db.version().as_deref(), Some(revisions::HEAD));

    assert_eq!(
        db.tables(),
        vec![
            "alembic_version",
            "appointments",
            "attendees",
            "availabilities",
            "calendars",
            "external_connections",
            "invites",
            "schedules",
            "slots",
            "subscribers",
            "waiting_list",
        ]
    );
    for (table, column) in [
        ("appointments", "uuid"),
        ("appointments", "meeting_link_provider"),
        ("slots", "booking_status"),
        ("slots", "meeting_link_url"),
        ("schedules", "slug"),
        ("schedules", "use_custom_availabilities"),
        ("subscribers", "minimum_valid_iat_time"),
        ("calendars", "external_connection_id"),
    ] {
        assert!(db.has_column(table, column), "{table}.{column} missing");
    }
    assert!(!db.has_column("slots", "booking_status__widen"));
}

#[test]
fn test_head_accepts_widened_enum_members() {
    let mut db = TestDb::new();
    let registry = corpus();
    let codec = codec();
    let runner = MigrationRunner::new(&registry, &codec);
    runner.upgrade(&mut db.conn, "head").unwrap();

    db.conn
        .execute("INSERT INTO subscribers (username, email) VALUES ('u', 'e')", [])
        .unwrap();
    for kind in ["zoom", "google", "fxa", "caldav"] {
        db.conn
            .execute(
                "INSERT INTO external_connections (owner_id, name, type, type_id, token) \
                 VALUES (1, 'n', ?1, 't', 'k')",
                params![kind],
            )
            .unwrap();
    }
    db.conn
        .execute("INSERT INTO slots (booking_status) VALUES ('cancelled')", [])
        .unwrap();
    assert!(db
        .conn
        .execute("INSERT INTO slots (booking_status) VALUES ('lost')", [])
        .is_err());
}

#[test]
fn test_full_downgrade_returns_to_base() {
    let mut db = TestDb::new();
    let registry = corpus();
    let codec = codec();
    let runner = MigrationRunner::new(&registry, &codec);

    runner.upgrade(&mut db.conn, "head").unwrap();
    let report = runner.downgrade(&mut db.conn, "base").unwrap();
    assert_eq!(report.steps.len(), registry.len());
    assert_eq!(db.version(), None);
    assert_eq!(db.tables(), vec!["alembic_version"]);
}

#[test]
fn test_every_revision_downgrade_restores_prior_schema() {
    let mut db = TestDb::new();
    let registry = corpus();
    let codec = codec();
    let runner = MigrationRunner::new(&registry, &codec);

    for rev in registry.linearize() {
        let before = snapshot(&db);
        runner.upgrade(&mut db.conn, rev.id).unwrap();
        runner.downgrade(&mut db.conn, "-1").unwrap();
        let mut after = snapshot(&db);
        // The version table is created by the first write and then stays
        if before.get("alembic_version").is_none() {
            after.remove("alembic_version");
        }
        assert_eq!(before, after, "downgrading {} changed the schema", rev.id);
        runner.upgrade(&mut db.conn, rev.id).unwrap();
    }
    assert_eq!(db.version().as_deref(), Some(revisions::HEAD));
}

#[test]
fn test_corpus_forks_are_merged() {
    let registry = corpus();
    let merges: Vec<_> = registry.iter().filter(|r| r.is_merge()).map(|r| r.id).collect();
    assert_eq!(merges, vec!["7a2b8c1d9e0f", "156b3b0d77b9"]);

    // Both merge parents sit before the merge in the linear order
    for id in merges {
        let rev = registry.get(id).unwrap();
        let pos = registry.position(id).unwrap();
        assert!(rev
            .parents
            .iter()
            .all(|p| registry.position(p).unwrap() < pos));
    }
}

#[test]
fn test_irreversible_revisions_are_data_migrations() {
    let registry = corpus();
    let irreversible: Vec<_> = registry
        .iter()
        .filter(|r| r.is_irreversible())
        .map(|r| r.title)
        .collect();
    assert!(!irreversible.is_empty());
    assert!(irreversible
        .iter()
        .all(|t| t.starts_with("fill") || t.starts_with("backfill")));
}

#[test]
fn test_secondary_email_equality_lookup_at_head() {
    let mut db = TestDb::new();
    let registry = corpus();
    let codec = codec();
    let runner = MigrationRunner::new(&registry, &codec);
    runner.upgrade(&mut db.conn, "head").unwrap();

    for (username, secondary) in [("alice", "alice@example.org"), ("bob", "bob@example.org")] {
        db.conn
            .execute(
                "INSERT INTO subscribers (username, email, secondary_email) VALUES (?1, ?2, ?3)",
                params![
                    codec.encode(username).unwrap(),
                    codec.encode(&format!("{username}@work.example")).unwrap(),
                    codec.encode(secondary).unwrap()
                ],
            )
            .unwrap();
    }

    let mut stmt = db
        .conn
        .prepare("SELECT username FROM subscribers WHERE secondary_email = ?1")
        .unwrap();
    let found: Vec<String> = stmt
        .query_map(params![codec.encode("bob@example.org").unwrap()], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(codec.decode(&found[0]).unwrap(), "bob");
}

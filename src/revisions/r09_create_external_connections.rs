//! Create external connections table
//!
//! Third-party accounts linked to a subscriber. `type` is widened twice
//! later on, so it stays unindexed.

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "01d80f00243f",
    parents: &["ad7cc2de5ff8"],
    branch_labels: &[],
    title: "create external connections table",
    created: "2023-07-11 15:38:56",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let e255 = ctx.encrypted_type(255).sql_type();
    let kind = ctx.enum_column("type", &["zoom", "google"])?;

    ctx.execute_batch(&format!(
        "CREATE TABLE external_connections (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            owner_id INTEGER NOT NULL REFERENCES subscribers (id),
            name {e255} NOT NULL,
            {kind},
            type_id {e255} NOT NULL,
            token {token} NOT NULL,
            time_created DATETIME DEFAULT CURRENT_TIMESTAMP,
            time_updated DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        CREATE INDEX ix_external_connections_owner_id ON external_connections (owner_id);",
        token = ctx.encrypted_type(2048).sql_type(),
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("DROP TABLE external_connections")
}

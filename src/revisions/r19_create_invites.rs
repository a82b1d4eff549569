//! Create invites table

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "0c22678e25db",
    parents: &["f9f2d7b3a1c4"],
    branch_labels: &[],
    title: "create invites table",
    created: "2023-09-26 16:22:18",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let status = ctx.enum_column("status", &["active", "revoked"])?;
    ctx.execute_batch(&format!(
        "CREATE TABLE invites (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            subscriber_id INTEGER REFERENCES subscribers (id),
            code {code} NOT NULL,
            {status},
            time_created DATETIME,
            time_updated DATETIME
        );
        CREATE UNIQUE INDEX ix_invites_code ON invites (code);",
        code = ctx.encrypted_type(255).sql_type(),
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("DROP TABLE invites")
}

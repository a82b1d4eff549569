//! Link calendars to the external connection they came from

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "2b1d96fb4f27",
    parents: &["89e1197d980d"],
    branch_labels: &[],
    title: "add calendar external connection id",
    created: "2023-12-12 10:27:59",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "ALTER TABLE calendars ADD COLUMN external_connection_id INTEGER;
         CREATE INDEX ix_calendars_external_connection_id ON calendars (external_connection_id);",
    )
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "DROP INDEX ix_calendars_external_connection_id;
         ALTER TABLE calendars DROP COLUMN external_connection_id;",
    )
}

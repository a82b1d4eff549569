use super::drop_columns;
use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "0dc429ca07f5",
    parents: &["01d80f00243f"],
    branch_labels: &[],
    title: "add calendar connected flag",
    created: "2023-07-19 10:44:03",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "ALTER TABLE calendars ADD COLUMN connected BOOLEAN NOT NULL DEFAULT 0;
         ALTER TABLE calendars ADD COLUMN connected_at DATETIME;",
    )
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    drop_columns(ctx, "calendars", &["connected_at", "connected"])
}

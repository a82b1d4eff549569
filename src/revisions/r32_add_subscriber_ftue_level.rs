use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "c4e2a3f81d90",
    parents: &["645fd31f827d"],
    branch_labels: &[],
    title: "add subscriber ftue level",
    created: "2024-04-16 09:19:57",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE subscribers ADD COLUMN ftue_level INTEGER NOT NULL DEFAULT 0")
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE subscribers DROP COLUMN ftue_level")
}

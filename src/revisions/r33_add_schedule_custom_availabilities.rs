use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "d791a6a6f2e0",
    parents: &["c4e2a3f81d90"],
    branch_labels: &[],
    title: "add schedule use custom availabilities",
    created: "2024-05-07 14:37:21",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "ALTER TABLE schedules ADD COLUMN use_custom_availabilities BOOLEAN NOT NULL DEFAULT 0",
    )
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE schedules DROP COLUMN use_custom_availabilities")
}

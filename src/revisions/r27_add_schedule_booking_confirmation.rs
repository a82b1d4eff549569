use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "47c3e8f1d3a2",
    parents: &["9fe08ba6f2ed"],
    branch_labels: &[],
    title: "add schedule booking confirmation",
    created: "2024-01-30 16:58:02",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "ALTER TABLE schedules ADD COLUMN booking_confirmation BOOLEAN NOT NULL DEFAULT 1",
    )
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE schedules DROP COLUMN booking_confirmation")
}

//! Add attendee timezone

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "5aec90f60d85",
    parents: &["f9660871710e"],
    branch_labels: &[],
    title: "add attendee timezone",
    created: "2023-04-03 16:41:27",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE attendees ADD COLUMN timezone VARCHAR(255)")
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE attendees DROP COLUMN timezone")
}

//! Add appointment uuid
//!
//! Nullable for now; existing rows are filled by the next revision.

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "bbdfad87a7fb",
    parents: &["7a2b8c1d9e0f"],
    branch_labels: &[],
    title: "add appointment uuid",
    created: "2023-08-02 12:25:37",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "ALTER TABLE appointments ADD COLUMN uuid VARCHAR(36);
         CREATE UNIQUE INDEX ix_appointments_uuid ON appointments (uuid);",
    )
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "DROP INDEX ix_appointments_uuid;
         ALTER TABLE appointments DROP COLUMN uuid;",
    )
}

//! Add slot meeting link fields

use super::drop_columns;
use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "12c7e1b34dd6",
    parents: &["e4c5a32de9fb"],
    branch_labels: &[],
    title: "add slot meeting link fields",
    created: "2023-08-16 15:47:21",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(&format!(
        "ALTER TABLE slots ADD COLUMN meeting_link_id {};
         ALTER TABLE slots ADD COLUMN meeting_link_url {};",
        ctx.encrypted_type(1024).sql_type(),
        ctx.encrypted_type(2048).sql_type(),
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    drop_columns(ctx, "slots", &["meeting_link_url", "meeting_link_id"])
}

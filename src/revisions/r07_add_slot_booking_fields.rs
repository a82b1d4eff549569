//! Add slot booking fields
//!
//! Slots booked through a schedule carry a confirmation token that expires.

use super::drop_columns;
use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "f9bfd5b0a0b5",
    parents: &["3789c9fd57c5"],
    branch_labels: &[],
    title: "add slot booking fields",
    created: "2023-06-07 14:55:19",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let booking_status = ctx.enum_column("booking_status", &["none", "requested", "booked"])?;
    ctx.execute_batch(&format!(
        "ALTER TABLE slots ADD COLUMN schedule_id INTEGER;
         ALTER TABLE slots ADD COLUMN booking_tkn {};
         ALTER TABLE slots ADD COLUMN booking_expires_at DATETIME;
         ALTER TABLE slots ADD COLUMN {booking_status};",
        ctx.encrypted_type(512).sql_type()
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    drop_columns(
        ctx,
        "slots",
        &["booking_status", "booking_expires_at", "booking_tkn", "schedule_id"],
    )
}

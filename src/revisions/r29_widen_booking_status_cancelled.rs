use crate::migrate::{MigrationContext, Result, Revision};

const BEFORE: &[&str] = &["none", "requested", "booked"];
const AFTER: &[&str] = &["none", "requested", "booked", "cancelled"];

pub const REVISION: Revision = Revision {
    id: "b0b6bc6d6c36",
    parents: &["e6ed0429ed46"],
    branch_labels: &[],
    title: "widen slot booking status with cancelled",
    created: "2024-02-27 12:15:44",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.alter_enum("slots", "booking_status", BEFORE, AFTER)
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.alter_enum("slots", "booking_status", AFTER, BEFORE)
}

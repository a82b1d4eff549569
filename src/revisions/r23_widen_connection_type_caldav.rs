use crate::migrate::{MigrationContext, Result, Revision};

const BEFORE: &[&str] = &["zoom", "google", "fxa"];
const AFTER: &[&str] = &["zoom", "google", "fxa", "caldav"];

pub const REVISION: Revision = Revision {
    id: "89e1197d980d",
    parents: &["ea551afc3c2f"],
    branch_labels: &[],
    title: "widen external connection type with caldav",
    created: "2023-11-29 15:12:26",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.alter_enum("external_connections", "type", BEFORE, AFTER)
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.alter_enum("external_connections", "type", AFTER, BEFORE)
}

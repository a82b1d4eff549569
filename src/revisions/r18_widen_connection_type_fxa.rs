//! Allow Mozilla account connections

use crate::migrate::{MigrationContext, Result, Revision};

const BEFORE: &[&str] = &["zoom", "google"];
const AFTER: &[&str] = &["zoom", "google", "fxa"];

pub const REVISION: Revision = Revision {
    id: "f9f2d7b3a1c4",
    parents: &["156b3b0d77b9"],
    branch_labels: &[],
    title: "widen external connection type with fxa",
    created: "2023-09-05 13:09:30",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.alter_enum("external_connections", "type", BEFORE, AFTER)
}

/// Fails on the CHECK if any `fxa` connections exist.
fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.alter_enum("external_connections", "type", AFTER, BEFORE)
}

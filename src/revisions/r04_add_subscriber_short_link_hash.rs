//! Add subscriber short link hash
//!
//! Salt for the subscriber's public short link.

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "f9c5471478d0",
    parents: &["da069f44bca7"],
    branch_labels: &[],
    title: "add subscriber short link hash",
    created: "2023-05-02 13:20:05",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(&format!(
        "ALTER TABLE subscribers ADD COLUMN short_link_hash {}",
        ctx.encrypted_type(255).sql_type()
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE subscribers DROP COLUMN short_link_hash")
}

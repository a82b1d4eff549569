//! Add subscriber minimum valid iat time
//!
//! Tokens issued before this instant are rejected; bumping it logs the
//! subscriber out everywhere.

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "e6ed0429ed46",
    parents: &["47c3e8f1d3a2"],
    branch_labels: &[],
    title: "add subscriber minimum valid iat time",
    created: "2024-02-13 08:41:50",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE subscribers ADD COLUMN minimum_valid_iat_time DATETIME")
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE subscribers DROP COLUMN minimum_valid_iat_time")
}

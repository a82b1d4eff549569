//! Encrypt calendar colors
//!
//! `color` was the last plaintext column on calendars. Forward leaves
//! values that already decode untouched; reversing needs the same secret
//! that encrypted them.

use super::rewrite_column;
use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "16c0299eee0c",
    parents: &["d791a6a6f2e0"],
    branch_labels: &[],
    title: "encrypt calendar colors",
    created: "2024-05-28 11:05:46",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let color = ctx.encrypted_type(32);
    // Values that already decode were encrypted by an earlier run
    rewrite_column(ctx, "calendars", "color", &color.sql_type(), |value| {
        if ctx.codec().decode(value).is_ok() {
            return Ok(value.to_string());
        }
        Ok(ctx.codec().encode(value)?)
    })
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    rewrite_column(ctx, "calendars", "color", "VARCHAR(32)", |stored| {
        Ok(ctx.codec().decode(stored)?)
    })
}

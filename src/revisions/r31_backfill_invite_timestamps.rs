//! Backfill invite timestamps
//!
//! Invites were created without timestamps. Missing values become the
//! time of the migration run.

use chrono::Utc;

use super::fill_nulls;
use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "645fd31f827d",
    parents: &["4a15d01919b8"],
    branch_labels: &[],
    title: "backfill invite timestamps",
    created: "2024-03-26 15:03:39",
    forward,
    reverse: None,
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let now = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
    fill_nulls(ctx, "invites", "time_created", &now)?;
    fill_nulls(ctx, "invites", "time_updated", &now)?;
    Ok(())
}

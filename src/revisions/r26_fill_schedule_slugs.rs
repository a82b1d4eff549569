//! Give every schedule without one a slug
//!
//! Slugs are stored encrypted like the rest of the schedule. Rows that
//! already have a slug are skipped.

use rusqlite::params;
use uuid::Uuid;

use super::null_rows;
use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "9fe08ba6f2ed",
    parents: &["71cf5cf3a8a7"],
    branch_labels: &[],
    title: "fill schedule slugs",
    created: "2024-01-09 14:02:17",
    forward,
    reverse: None,
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let ids = null_rows(ctx, "schedules", "slug")?;
    if ids.is_empty() {
        ctx.report_filled("schedules", 0);
        return Ok(());
    }

    let slug = ctx.encrypted_type(255);
    for id in &ids {
        let value = Uuid::new_v4().simple().to_string();
        ctx.execute(
            "UPDATE schedules SET slug = ?1 WHERE id = ?2 AND slug IS NULL",
            params![slug.bind(Some(value.as_str()))?, id],
        )?;
    }
    ctx.report_filled("schedules", ids.len());
    Ok(())
}

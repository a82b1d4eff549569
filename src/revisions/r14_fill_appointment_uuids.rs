//! Give every appointment without one a uuid
//!
//! Only rows still lacking a uuid are touched, so a re-run after a stamp
//! leaves already-assigned values alone.

use rusqlite::params;
use uuid::Uuid;

use super::null_rows;
use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "e4c5a32de9fb",
    parents: &["bbdfad87a7fb"],
    branch_labels: &[],
    title: "fill appointment uuids",
    created: "2023-08-02 12:41:09",
    forward,
    reverse: None,
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let ids = null_rows(ctx, "appointments", "uuid")?;
    for id in &ids {
        ctx.execute(
            "UPDATE appointments SET uuid = ?1 WHERE id = ?2 AND uuid IS NULL",
            params![Uuid::new_v4().to_string(), id],
        )?;
    }
    ctx.report_filled("appointments", ids.len());
    Ok(())
}

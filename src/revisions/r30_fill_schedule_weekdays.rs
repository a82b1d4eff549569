//! Default schedules without weekdays to Monday through Friday
//!
//! Weekdays are stored as a JSON array of ISO weekday numbers.

use super::{fill_nulls, null_rows};
use crate::migrate::{MigrationContext, Result, Revision};

const WORKWEEK: [u8; 5] = [1, 2, 3, 4, 5];

pub const REVISION: Revision = Revision {
    id: "4a15d01919b8",
    parents: &["b0b6bc6d6c36"],
    branch_labels: &[],
    title: "fill schedule weekdays",
    created: "2024-03-12 10:30:08",
    forward,
    reverse: None,
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    if null_rows(ctx, "schedules", "weekdays")?.is_empty() {
        return Ok(());
    }
    let weekdays = serde_json::to_string(&WORKWEEK)?;
    fill_nulls(ctx, "schedules", "weekdays", &weekdays)?;
    Ok(())
}

//! Create schedules table

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "d9ecfdd1fde3",
    parents: &["f9c5471478d0"],
    branch_labels: &[],
    title: "create schedules table",
    created: "2023-05-22 11:07:48",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let e255 = ctx.encrypted_type(255).sql_type();
    let location_type = ctx.enum_column("location_type", &["inperson", "online"])?;

    ctx.execute_batch(&format!(
        "CREATE TABLE schedules (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            calendar_id INTEGER REFERENCES calendars (id),
            active BOOLEAN DEFAULT 1,
            name {e255} NOT NULL,
            {location_type},
            location_url {e2048},
            details {e255},
            start_date DATE,
            end_date DATE,
            start_time TIME,
            end_time TIME,
            earliest_booking INTEGER,
            farthest_booking INTEGER,
            weekdays TEXT,
            slot_duration INTEGER,
            time_created DATETIME DEFAULT CURRENT_TIMESTAMP,
            time_updated DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        CREATE INDEX ix_schedules_calendar_id ON schedules (calendar_id);",
        e2048 = ctx.encrypted_type(2048).sql_type(),
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("DROP TABLE schedules")
}

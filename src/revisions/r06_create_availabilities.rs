use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "3789c9fd57c5",
    parents: &["d9ecfdd1fde3"],
    branch_labels: &[],
    title: "create availabilities table",
    created: "2023-05-22 11:31:02",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let e255 = ctx.encrypted_type(255).sql_type();
    ctx.execute_batch(&format!(
        "CREATE TABLE availabilities (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            schedule_id INTEGER REFERENCES schedules (id),
            day_of_week {e255} NOT NULL,
            start_time {e255},
            end_time {e255},
            min_time_before_meeting {e255},
            slot_duration INTEGER,
            time_created DATETIME DEFAULT CURRENT_TIMESTAMP,
            time_updated DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        CREATE INDEX ix_availabilities_schedule_id ON availabilities (schedule_id);"
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("DROP TABLE availabilities")
}

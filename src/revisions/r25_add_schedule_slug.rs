use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "71cf5cf3a8a7",
    parents: &["2b1d96fb4f27"],
    branch_labels: &[],
    title: "add schedule slug",
    created: "2024-01-09 13:44:35",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(&format!(
        "ALTER TABLE schedules ADD COLUMN slug {};
         CREATE UNIQUE INDEX ix_schedules_slug ON schedules (slug);",
        ctx.encrypted_type(255).sql_type()
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "DROP INDEX ix_schedules_slug;
         ALTER TABLE schedules DROP COLUMN slug;",
    )
}

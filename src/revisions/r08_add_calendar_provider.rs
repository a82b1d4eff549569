use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "ad7cc2de5ff8",
    parents: &["f9bfd5b0a0b5"],
    branch_labels: &[],
    title: "add calendar provider",
    created: "2023-06-21 08:12:40",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let provider = ctx.enum_column("provider", &["caldav", "google"])?;
    ctx.execute_batch(&format!("ALTER TABLE calendars ADD COLUMN {provider}"))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE calendars DROP COLUMN provider")
}

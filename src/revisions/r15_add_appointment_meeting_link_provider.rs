use super::{add_column_once, fill_nulls, null_rows};
use crate::enums::MeetingLinkProviderType;
use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "a9ca5a4325ec",
    parents: &["e4c5a32de9fb"],
    branch_labels: &[],
    title: "add appointment meeting link provider",
    created: "2023-08-15 10:03:54",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let provider = ctx.encrypted_enum::<MeetingLinkProviderType>(255);
    add_column_once(ctx, "appointments", "meeting_link_provider", &provider.sql_type())?;

    if null_rows(ctx, "appointments", "meeting_link_provider")?.is_empty() {
        return Ok(());
    }
    if let Some(none) = provider.bind(Some(MeetingLinkProviderType::None))? {
        fill_nulls(ctx, "appointments", "meeting_link_provider", &none)?;
    }
    Ok(())
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE appointments DROP COLUMN meeting_link_provider")
}

//! Add schedule meeting link provider
//!
//! Existing schedules get the encrypted `none` provider.

use super::{add_column_once, null_rows};
use crate::enums::MeetingLinkProviderType;
use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "6e1d5a1f3b2c",
    parents: &["01d80f00243f"],
    branch_labels: &[],
    title: "add schedule meeting link provider",
    created: "2023-07-20 17:16:29",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let provider = ctx.encrypted_enum::<MeetingLinkProviderType>(255);
    add_column_once(ctx, "schedules", "meeting_link_provider", &provider.sql_type())?;

    if null_rows(ctx, "schedules", "meeting_link_provider")?.is_empty() {
        return Ok(());
    }
    if let Some(none) = provider.bind(Some(MeetingLinkProviderType::None))? {
        super::fill_nulls(ctx, "schedules", "meeting_link_provider", &none)?;
    }
    Ok(())
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE schedules DROP COLUMN meeting_link_provider")
}

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "da069f44bca7",
    parents: &["5aec90f60d85"],
    branch_labels: &[],
    title: "add subscriber avatar url",
    created: "2023-04-18 09:52:53",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(&format!(
        "ALTER TABLE subscribers ADD COLUMN avatar_url {}",
        ctx.encrypted_type(2048).sql_type()
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE subscribers DROP COLUMN avatar_url")
}

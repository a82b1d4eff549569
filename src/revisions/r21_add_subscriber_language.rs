use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "502c76bc79e0",
    parents: &["c5b9fc31b555"],
    branch_labels: &[],
    title: "add subscriber language",
    created: "2023-10-24 14:06:13",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE subscribers ADD COLUMN language VARCHAR(16) NOT NULL DEFAULT 'en'")
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("ALTER TABLE subscribers DROP COLUMN language")
}

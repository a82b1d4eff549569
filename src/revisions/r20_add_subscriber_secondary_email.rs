use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "c5b9fc31b555",
    parents: &["0c22678e25db"],
    branch_labels: &[],
    title: "add subscriber secondary email",
    created: "2023-10-10 09:34:51",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(&format!(
        "ALTER TABLE subscribers ADD COLUMN secondary_email {};
         CREATE UNIQUE INDEX ix_subscribers_secondary_email ON subscribers (secondary_email);",
        ctx.encrypted_type(255).sql_type()
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "DROP INDEX ix_subscribers_secondary_email;
         ALTER TABLE subscribers DROP COLUMN secondary_email;",
    )
}

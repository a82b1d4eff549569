//! Create waiting list table
//!
//! Sign-ups waiting for an invite code.

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "ea551afc3c2f",
    parents: &["502c76bc79e0"],
    branch_labels: &[],
    title: "create waiting list table",
    created: "2023-11-08 11:50:40",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(&format!(
        "CREATE TABLE waiting_list (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            email {} NOT NULL,
            email_verified BOOLEAN NOT NULL DEFAULT 0,
            invite_id INTEGER REFERENCES invites (id),
            time_created DATETIME DEFAULT CURRENT_TIMESTAMP,
            time_updated DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        CREATE UNIQUE INDEX ix_waiting_list_email ON waiting_list (email);",
        ctx.encrypted_type(255).sql_type()
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch("DROP TABLE waiting_list")
}

//! Create the core tables
//!
//! subscribers, calendars, appointments, attendees, slots

use crate::migrate::{MigrationContext, Result, Revision};

pub const REVISION: Revision = Revision {
    id: "f9660871710e",
    parents: &[],
    branch_labels: &[],
    title: "create core tables",
    created: "2023-03-14 10:02:11",
    forward,
    reverse: Some(reverse),
};

fn forward(ctx: &MigrationContext<'_>) -> Result<()> {
    let e255 = ctx.encrypted_type(255).sql_type();
    let e2048 = ctx.encrypted_type(2048).sql_type();
    let level = ctx.enum_column("level", &["basic", "plus", "pro"])?;
    let location_type = ctx.enum_column("location_type", &["inperson", "online"])?;
    let status = ctx.enum_column("status", &["draft", "ready", "closed"])?;
    let details = ctx.encrypted_text().sql_type();

    ctx.execute_batch(&format!(
        "CREATE TABLE subscribers (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            username {e255} NOT NULL,
            email {e255} NOT NULL,
            name {e255},
            {level},
            timezone {e255},
            time_created DATETIME DEFAULT CURRENT_TIMESTAMP,
            time_updated DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        CREATE UNIQUE INDEX ix_subscribers_username ON subscribers (username);
        CREATE UNIQUE INDEX ix_subscribers_email ON subscribers (email);

        CREATE TABLE calendars (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            owner_id INTEGER REFERENCES subscribers (id),
            title {e255},
            color VARCHAR(32),
            url {e2048} NOT NULL,
            user {e255} NOT NULL,
            password {e255},
            time_created DATETIME DEFAULT CURRENT_TIMESTAMP,
            time_updated DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        CREATE INDEX ix_calendars_owner_id ON calendars (owner_id);

        CREATE TABLE appointments (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            calendar_id INTEGER REFERENCES calendars (id),
            duration INTEGER,
            title {e255},
            {location_type},
            location_suggestions {e255},
            location_selected INTEGER,
            location_name {e255},
            location_url {e2048},
            location_phone {e255},
            details {details},
            slug {e255},
            keep_open BOOLEAN,
            {status},
            time_created DATETIME DEFAULT CURRENT_TIMESTAMP,
            time_updated DATETIME DEFAULT CURRENT_TIMESTAMP
        );
        CREATE UNIQUE INDEX ix_appointments_slug ON appointments (slug);

        CREATE TABLE attendees (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            email {e255} NOT NULL,
            name {e255}
        );

        CREATE TABLE slots (
            id INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            appointment_id INTEGER REFERENCES appointments (id),
            attendee_id INTEGER REFERENCES attendees (id),
            subscriber_id INTEGER REFERENCES subscribers (id),
            time_updated DATETIME,
            start DATETIME,
            duration INTEGER
        );"
    ))
}

fn reverse(ctx: &MigrationContext<'_>) -> Result<()> {
    ctx.execute_batch(
        "DROP TABLE slots;
         DROP TABLE attendees;
         DROP TABLE appointments;
         DROP TABLE calendars;
         DROP TABLE subscribers;",
    )
}

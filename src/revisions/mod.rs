// src/revisions/mod.rs
//! The appointment-backend revision corpus
//!
//! Listed explicitly, in authoring order. Registration order only breaks
//! ties in the linearization; the parent pointers decide everything else.
//! Revisions are frozen once published: enum member lists and column
//! budgets below are what the schema looked like at the time, not what the
//! current types say.

use rusqlite::params;

use crate::error::RegistryError;
use crate::migrate::{MigrationContext, Registry, Result, Revision};

mod r01_create_core_tables;
mod r02_add_attendee_timezone;
mod r03_add_subscriber_avatar_url;
mod r04_add_subscriber_short_link_hash;
mod r05_create_schedules;
mod r06_create_availabilities;
mod r07_add_slot_booking_fields;
mod r08_add_calendar_provider;
mod r09_create_external_connections;
mod r10_add_calendar_connected;
mod r11_add_schedule_meeting_link_provider;
mod r12_merge_connection_heads;
mod r13_add_appointment_uuid;
mod r14_fill_appointment_uuids;
mod r15_add_appointment_meeting_link_provider;
mod r16_add_slot_meeting_link;
mod r17_merge_meeting_link_heads;
mod r18_widen_connection_type_fxa;
mod r19_create_invites;
mod r20_add_subscriber_secondary_email;
mod r21_add_subscriber_language;
mod r22_create_waiting_list;
mod r23_widen_connection_type_caldav;
mod r24_add_calendar_external_connection;
mod r25_add_schedule_slug;
mod r26_fill_schedule_slugs;
mod r27_add_schedule_booking_confirmation;
mod r28_add_subscriber_minimum_valid_iat;
mod r29_widen_booking_status_cancelled;
mod r30_fill_schedule_weekdays;
mod r31_backfill_invite_timestamps;
mod r32_add_subscriber_ftue_level;
mod r33_add_schedule_custom_availabilities;
mod r34_encrypt_calendar_colors;

/// Id of the newest revision
pub const HEAD: &str = r34_encrypt_calendar_colors::REVISION.id;

pub fn all() -> Vec<Revision> {
    vec![
        r01_create_core_tables::REVISION,
        r02_add_attendee_timezone::REVISION,
        r03_add_subscriber_avatar_url::REVISION,
        r04_add_subscriber_short_link_hash::REVISION,
        r05_create_schedules::REVISION,
        r06_create_availabilities::REVISION,
        r07_add_slot_booking_fields::REVISION,
        r08_add_calendar_provider::REVISION,
        r09_create_external_connections::REVISION,
        r10_add_calendar_connected::REVISION,
        r11_add_schedule_meeting_link_provider::REVISION,
        r12_merge_connection_heads::REVISION,
        r13_add_appointment_uuid::REVISION,
        r14_fill_appointment_uuids::REVISION,
        r15_add_appointment_meeting_link_provider::REVISION,
        r16_add_slot_meeting_link::REVISION,
        r17_merge_meeting_link_heads::REVISION,
        r18_widen_connection_type_fxa::REVISION,
        r19_create_invites::REVISION,
        r20_add_subscriber_secondary_email::REVISION,
        r21_add_subscriber_language::REVISION,
        r22_create_waiting_list::REVISION,
        r23_widen_connection_type_caldav::REVISION,
        r24_add_calendar_external_connection::REVISION,
        r25_add_schedule_slug::REVISION,
        r26_fill_schedule_slugs::REVISION,
        r27_add_schedule_booking_confirmation::REVISION,
        r28_add_subscriber_minimum_valid_iat::REVISION,
        r29_widen_booking_status_cancelled::REVISION,
        r30_fill_schedule_weekdays::REVISION,
        r31_backfill_invite_timestamps::REVISION,
        r32_add_subscriber_ftue_level::REVISION,
        r33_add_schedule_custom_availabilities::REVISION,
        r34_encrypt_calendar_colors::REVISION,
    ]
}

/// Validated registry over the whole corpus
pub fn registry() -> std::result::Result<Registry, RegistryError> {
    Registry::new(all())
}

fn drop_columns(ctx: &MigrationContext<'_>, table: &str, columns: &[&str]) -> Result<()> {
    for column in columns {
        ctx.execute_batch(&format!("ALTER TABLE {table} DROP COLUMN {column}"))?;
    }
    Ok(())
}

/// Add `column` to `table` unless a previous run of the revision already did
fn add_column_once(
    ctx: &MigrationContext<'_>,
    table: &str,
    column: &str,
    sql_type: &str,
) -> Result<()> {
    let present: bool = ctx.session().query_row(
        &format!("SELECT COUNT(*) > 0 FROM pragma_table_info('{table}') WHERE name = ?1"),
        params![column],
        |row| row.get(0),
    )?;
    if !present {
        ctx.execute_batch(&format!("ALTER TABLE {table} ADD COLUMN {column} {sql_type}"))?;
    }
    Ok(())
}

/// Rows of `table` whose `column` is still NULL
fn null_rows(ctx: &MigrationContext<'_>, table: &str, column: &str) -> Result<Vec<i64>> {
    let mut stmt = ctx
        .session()
        .prepare(&format!("SELECT id FROM {table} WHERE {column} IS NULL ORDER BY id"))?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<rusqlite::Result<Vec<i64>>>()?;
    Ok(ids)
}

/// Set `column` to `value` on every row where it is still NULL
fn fill_nulls(ctx: &MigrationContext<'_>, table: &str, column: &str, value: &str) -> Result<usize> {
    let filled = ctx.execute(
        &format!("UPDATE {table} SET {column} = ?1 WHERE {column} IS NULL"),
        params![value],
    )?;
    ctx.report_filled(table, filled);
    Ok(filled)
}

/// Re-store `table.column` through `convert`, swapping in a column of type `sql_type`
///
/// Adds a shadow column, converts every non-NULL value into it, then drops
/// the original and renames the shadow. The column must not be indexed.
fn rewrite_column<F>(
    ctx: &MigrationContext<'_>,
    table: &str,
    column: &str,
    sql_type: &str,
    convert: F,
) -> Result<()>
where
    F: Fn(&str) -> Result<String>,
{
    let shadow = format!("{column}__rewrite");
    ctx.execute_batch(&format!("ALTER TABLE {table} ADD COLUMN {shadow} {sql_type}"))?;

    let rows: Vec<(i64, String)> = {
        let mut stmt = ctx.session().prepare(&format!(
            "SELECT id, {column} FROM {table} WHERE {column} IS NOT NULL"
        ))?;
        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<(i64, String)>>>()?;
        rows
    };
    for (id, value) in &rows {
        ctx.execute(
            &format!("UPDATE {table} SET {shadow} = ?1 WHERE id = ?2"),
            params![convert(value)?, id],
        )?;
    }
    ctx.report_filled(table, rows.len());

    ctx.execute_batch(&format!(
        "ALTER TABLE {table} DROP COLUMN {column};
         ALTER TABLE {table} RENAME COLUMN {shadow} TO {column};"
    ))
}

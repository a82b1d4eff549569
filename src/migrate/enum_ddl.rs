// src/migrate/enum_ddl.rs
//! Enumerated-string columns and their widening
//!
//! Contract for every widening revision: `forward` passes a `new` set that
//! is a superset of `old`, and `reverse` passes the two sets swapped so it
//! restores exactly the prior set. Narrowing fails on rows holding a
//! removed member; nothing here checks the superset rule beyond a warning.

use tracing::warn;

use crate::error::MigrationError;

/// SQL dialect of the bound database
///
/// Runs always bind SQLite through rusqlite. `MySql` only generates
/// statements, for callers that apply them to a MySQL server themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Sqlite,
    MySql,
}

/// Reject anything that is not a plain `[A-Za-z_][A-Za-z0-9_]*` identifier
pub fn validate_identifier(name: &str) -> Result<&str, MigrationError> {
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(name)
    } else {
        Err(MigrationError::InvalidIdentifier(name.to_string()))
    }
}

impl Dialect {
    pub fn quote_ident(&self, name: &str) -> Result<String, MigrationError> {
        let name = validate_identifier(name)?;
        Ok(match self {
            Dialect::Sqlite => format!("\"{name}\""),
            Dialect::MySql => format!("`{name}`"),
        })
    }

    /// Column definition for a NOT NULL enum column
    ///
    /// SQLite has no native `ENUM`; it gets `TEXT` with a membership CHECK,
    /// defaulting to the first member so the column can be re-added during
    /// widening.
    pub fn enum_column(&self, column: &str, values: &[&str]) -> Result<String, MigrationError> {
        let quoted = self.quote_ident(column)?;
        let list = value_list(values);
        Ok(match self {
            Dialect::Sqlite => {
                let default = values.first().map(|v| quote_literal(v)).unwrap_or_default();
                format!("{quoted} TEXT NOT NULL DEFAULT {default} CHECK ({quoted} IN ({list}))")
            }
            Dialect::MySql => format!("{quoted} ENUM({list}) NOT NULL"),
        })
    }

    /// Statements that move `table.column` from `old_values` to `new_values`
    ///
    /// MySQL re-issues the column type in place. SQLite cannot alter a
    /// CHECK, so it adds a shadow column with the new set, copies, drops the
    /// original and renames the shadow; the column must not be indexed.
    pub fn alter_enum(
        &self,
        table: &str,
        column: &str,
        old_values: &[&str],
        new_values: &[&str],
    ) -> Result<Vec<String>, MigrationError> {
        if let Some(dropped) = old_values.iter().find(|v| !new_values.contains(v)) {
            warn!(
                table,
                column, "enum alteration drops member {dropped:?}; rows holding it will fail"
            );
        }

        let table = self.quote_ident(table)?;
        match self {
            Dialect::MySql => Ok(vec![format!(
                "ALTER TABLE {table} MODIFY COLUMN {}",
                self.enum_column(column, new_values)?
            )]),
            Dialect::Sqlite => {
                let quoted = self.quote_ident(column)?;
                let shadow_name = format!("{column}__widen");
                let shadow = self.quote_ident(&shadow_name)?;
                Ok(vec![
                    format!(
                        "ALTER TABLE {table} ADD COLUMN {}",
                        self.enum_column(&shadow_name, new_values)?
                    ),
                    format!("UPDATE {table} SET {shadow} = {quoted}"),
                    format!("ALTER TABLE {table} DROP COLUMN {quoted}"),
                    format!("ALTER TABLE {table} RENAME COLUMN {shadow} TO {quoted}"),
                ])
            }
        }
    }
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn value_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| quote_literal(v))
        .collect::<Vec<_>>()
        .join(", ")
}

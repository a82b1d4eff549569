// src/migrate/revision.rs
//! Revision descriptors

use chrono::NaiveDateTime;

use super::context::MigrationContext;
use crate::error::MigrationError;

/// One direction of a revision
pub type Step = fn(&MigrationContext<'_>) -> Result<(), MigrationError>;

/// An immutable schema or data change
///
/// Descriptors are plain values: the corpus is an explicit list of them,
/// built with struct literals so each lives in a `const`.
#[derive(Clone, Copy)]
pub struct Revision {
    pub id: &'static str,
    /// Revisions this one applies after; empty for the root, several for a merge
    pub parents: &'static [&'static str],
    pub branch_labels: &'static [&'static str],
    pub title: &'static str,
    /// `YYYY-MM-DD HH:MM:SS`, display only
    pub created: &'static str,
    pub forward: Step,
    /// `None` for data migrations that cannot be undone
    pub reverse: Option<Step>,
}

impl Revision {
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() > 1
    }

    /// First declared parent
    pub fn parent_id(&self) -> Option<&'static str> {
        self.parents.first().copied()
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.created, "%Y-%m-%d %H:%M:%S").ok()
    }

    pub fn is_irreversible(&self) -> bool {
        self.reverse.is_none()
    }
}

impl std::fmt::Debug for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Revision")
            .field("id", &self.id)
            .field("parents", &self.parents)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parents = if self.parents.is_empty() {
            "<base>".to_string()
        } else {
            self.parents.join(", ")
        };
        write!(f, "{parents} -> {}, {}", self.id, self.title)
    }
}

/// Step that does nothing, for merge revisions
pub fn noop(_ctx: &MigrationContext<'_>) -> Result<(), MigrationError> {
    Ok(())
}

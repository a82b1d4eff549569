// src/migrate/target.rs
//! Migration targets as operators type them

use std::str::FromStr;

use super::registry::Registry;
use crate::error::{Direction, MigrationError};

/// Where a run should leave the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Head,
    /// Nothing applied
    Base,
    /// Exact id or unique id prefix
    Revision(String),
    /// `+N` / `-N` steps from the current revision
    Relative(i64),
}

impl FromStr for Target {
    type Err = MigrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(MigrationError::NoSuchTarget(String::new())),
            "head" | "heads" => Ok(Target::Head),
            "base" => Ok(Target::Base),
            _ if s.starts_with(['+', '-']) => s
                .parse::<i64>()
                .map(Target::Relative)
                .map_err(|_| MigrationError::NoSuchTarget(s.to_string())),
            _ => Ok(Target::Revision(s.to_string())),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Head => f.write_str("head"),
            Target::Base => f.write_str("base"),
            Target::Revision(id) => f.write_str(id),
            Target::Relative(n) => write!(f, "{n:+}"),
        }
    }
}

impl Registry {
    /// Resolve `target` to a revision id, `None` meaning base
    pub fn resolve(
        &self,
        target: &Target,
        current: Option<&str>,
    ) -> Result<Option<&'static str>, MigrationError> {
        match target {
            Target::Head => Ok(Some(self.head().id)),
            Target::Base => Ok(None),
            Target::Revision(id) => self.lookup(id).map(Some),
            Target::Relative(steps) => {
                let applied = self.applied_count(current)? as i64;
                let wanted = applied
                    .checked_add(*steps)
                    .filter(|w| (0..=self.len() as i64).contains(w))
                    .ok_or_else(|| MigrationError::TargetNotReachable {
                        direction: if *steps >= 0 {
                            Direction::Upgrade
                        } else {
                            Direction::Downgrade
                        },
                        from: current.map(str::to_string),
                        to: Some(target.to_string()),
                    })?;
                Ok(wanted
                    .checked_sub(1)
                    .and_then(|pos| self.at(pos as usize))
                    .map(|r| r.id))
            }
        }
    }

    /// Exact id, else the single revision whose id starts with `prefix`
    fn lookup(&self, prefix: &str) -> Result<&'static str, MigrationError> {
        if let Some(rev) = self.get(prefix) {
            return Ok(rev.id);
        }

        let mut candidates: Vec<&'static str> =
            self.ids().filter(|id| id.starts_with(prefix)).collect();
        match candidates.len() {
            0 => Err(MigrationError::NoSuchTarget(prefix.to_string())),
            1 => Ok(candidates[0]),
            _ => {
                candidates.sort_unstable();
                Err(MigrationError::AmbiguousTarget {
                    target: prefix.to_string(),
                    candidates: candidates.into_iter().map(str::to_string).collect(),
                })
            }
        }
    }
}

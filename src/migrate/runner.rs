// src/migrate/runner.rs
//! Applying and reverting slices of the revision chain
//!
//! One transaction per revision. The step and the AppliedVersion update
//! share it, so a failing revision leaves both the schema and the marker
//! where the previous revision put them.

use rusqlite::Connection;
use tracing::{debug, error, info, warn};

use super::context::MigrationContext;
use super::registry::Registry;
use super::revision::Revision;
use super::target::Target;
use super::version::VersionTable;
use crate::crypto::CryptoCodec;
use crate::error::{Direction, MigrationError};

/// Execution state of a single revision
///
/// `Pending → Running → Committed → Recorded`, or `Running → Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionState {
    Pending,
    Running,
    /// Step finished and AppliedVersion written, transaction not yet committed
    Committed,
    /// Transaction committed; AppliedVersion reflects this revision
    Recorded,
    Failed,
}

#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub id: &'static str,
    pub state: RevisionState,
}

/// What a successful run did
#[derive(Debug, Clone)]
pub struct MigrationReport {
    pub direction: Direction,
    pub from: Option<String>,
    pub to: Option<String>,
    pub steps: Vec<StepOutcome>,
}

impl MigrationReport {
    pub fn is_noop(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn executed(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.steps.iter().map(|s| s.id)
    }
}

pub struct MigrationRunner<'r> {
    registry: &'r Registry,
    codec: &'r CryptoCodec,
    versions: VersionTable,
}

impl<'r> MigrationRunner<'r> {
    pub fn new(registry: &'r Registry, codec: &'r CryptoCodec) -> Self {
        Self {
            registry,
            codec,
            versions: VersionTable::default(),
        }
    }

    pub fn with_version_table(mut self, versions: VersionTable) -> Self {
        self.versions = versions;
        self
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn version_table(&self) -> &VersionTable {
        &self.versions
    }

    /// The AppliedVersion id, `None` when nothing is applied
    pub fn current(&self, conn: &Connection) -> Result<Option<String>, MigrationError> {
        self.versions.read(conn)
    }

    /// Apply forward to `target` (`head` when the operator gives none)
    pub fn upgrade(
        &self,
        conn: &mut Connection,
        target: &str,
    ) -> Result<MigrationReport, MigrationError> {
        self.run(conn, Direction::Upgrade, &target.parse()?)
    }

    pub fn downgrade(
        &self,
        conn: &mut Connection,
        target: &str,
    ) -> Result<MigrationReport, MigrationError> {
        self.run(conn, Direction::Downgrade, &target.parse()?)
    }

    /// Record `target` as applied without running anything
    pub fn stamp(
        &self,
        conn: &mut Connection,
        target: &str,
    ) -> Result<Option<&'static str>, MigrationError> {
        let current = self.checked_current(conn)?;
        let resolved = self
            .registry
            .resolve(&target.parse::<Target>()?, current.as_deref())?;

        let tx = conn.transaction()?;
        self.versions.write(&tx, resolved)?;
        tx.commit()?;

        info!(
            "Stamped {} (was {})",
            resolved.unwrap_or("base"),
            current.as_deref().unwrap_or("base")
        );
        Ok(resolved)
    }

    fn checked_current(&self, conn: &Connection) -> Result<Option<String>, MigrationError> {
        let current = self.current(conn)?;
        if let Some(id) = current.as_deref() {
            if self.registry.get(id).is_none() {
                return Err(MigrationError::UnknownAppliedVersion(id.to_string()));
            }
        }
        Ok(current)
    }

    fn run(
        &self,
        conn: &mut Connection,
        direction: Direction,
        target: &Target,
    ) -> Result<MigrationReport, MigrationError> {
        let current = self.checked_current(conn)?;
        let resolved = self.registry.resolve(target, current.as_deref())?;
        let plan = self
            .registry
            .slice(current.as_deref(), resolved, direction)?;

        let mut report = MigrationReport {
            direction,
            from: current.clone(),
            to: resolved.map(str::to_string),
            steps: Vec::with_capacity(plan.len()),
        };

        if plan.is_empty() {
            info!("Already at {}", current.as_deref().unwrap_or("base"));
            return Ok(report);
        }

        for rev in plan {
            self.execute_one(conn, rev, direction)?;
            report.steps.push(StepOutcome {
                id: rev.id,
                state: RevisionState::Recorded,
            });
        }

        Ok(report)
    }

    fn execute_one(
        &self,
        conn: &mut Connection,
        rev: &Revision,
        direction: Direction,
    ) -> Result<(), MigrationError> {
        let recorded = match direction {
            Direction::Upgrade => Some(rev.id),
            Direction::Downgrade => self.registry.predecessor(rev.id).map(|r| r.id),
        };

        match direction {
            Direction::Upgrade if rev.is_root() => {
                info!("Running upgrade base -> {}, {}", rev.id, rev.title)
            }
            Direction::Upgrade => info!(
                "Running upgrade {} -> {}, {}",
                rev.parents.join(", "),
                rev.id,
                rev.title
            ),
            Direction::Downgrade => info!(
                "Running downgrade {} -> {}, {}",
                rev.id,
                recorded.unwrap_or("base"),
                rev.title
            ),
        }

        transition(rev, RevisionState::Pending, RevisionState::Running);
        let result = self.execute_in_transaction(conn, rev, direction, recorded);

        match result {
            Ok(()) => {
                transition(rev, RevisionState::Committed, RevisionState::Recorded);
                match direction {
                    Direction::Upgrade => info!("Applied revision {}", rev.id),
                    Direction::Downgrade => info!("Reverted revision {}", rev.id),
                }
                Ok(())
            }
            Err(err) => {
                transition(rev, RevisionState::Running, RevisionState::Failed);
                error!(revision = rev.id, "{direction} failed: {err}");
                Err(MigrationError::RevisionFailed {
                    id: rev.id.to_string(),
                    source: Box::new(err),
                })
            }
        }
    }

    fn execute_in_transaction(
        &self,
        conn: &mut Connection,
        rev: &Revision,
        direction: Direction,
        recorded: Option<&str>,
    ) -> Result<(), MigrationError> {
        let tx = conn.transaction()?;
        {
            let ctx = MigrationContext::new(&tx, self.codec, rev.id);
            match direction {
                Direction::Upgrade => (rev.forward)(&ctx)?,
                Direction::Downgrade => match rev.reverse {
                    Some(reverse) => reverse(&ctx)?,
                    None => warn!(
                        revision = rev.id,
                        "revision has no reverse; only the version marker moves"
                    ),
                },
            }
        }
        self.versions.write(&tx, recorded)?;
        transition(rev, RevisionState::Running, RevisionState::Committed);
        tx.commit()?;
        Ok(())
    }
}

fn transition(rev: &Revision, from: RevisionState, to: RevisionState) {
    debug!(revision = rev.id, "{from:?} -> {to:?}");
}

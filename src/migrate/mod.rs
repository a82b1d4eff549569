// src/migrate/mod.rs
//! Schema-migration engine
//!
//! - `revision`: the descriptor type every schema/data change is written as
//! - `registry`: graph validation and linearization
//! - `runner`: transactional up/down execution against a connection
//! - `context`: the handle a revision step works through
//! - `enum_ddl`: enum columns and widening, per dialect

pub mod context;
pub mod enum_ddl;
pub mod registry;
pub mod revision;
pub mod runner;
pub mod target;
pub mod version;

pub use context::MigrationContext;
pub use enum_ddl::{validate_identifier, Dialect};
pub use registry::Registry;
pub use revision::{noop, Revision, Step};
pub use runner::{MigrationReport, MigrationRunner, RevisionState, StepOutcome};
pub use target::Target;
pub use version::VersionTable;

pub use crate::error::Direction;

pub type Result<T> = std::result::Result<T, crate::error::MigrationError>;

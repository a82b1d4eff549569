// src/config/mod.rs
//! Configuration system for the migration tooling
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, Crypto, Database, Locks};

mod app;
mod defaults;

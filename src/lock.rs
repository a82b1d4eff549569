// src/lock.rs
//! File-backed cron mutex
//!
//! Acquisition is an exclusive create of `<dir>/<name>.lock`; release
//! removes the file. Advisory only, between cooperating processes. A holder
//! that crashes leaves the file behind and later runs fail with
//! `AlreadyHeld` until an operator deletes it.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::consts::DEFAULT_LOCK_DIR;
use crate::error::MutexError;

#[derive(Debug, Clone)]
pub struct CronMutex {
    name: String,
    path: PathBuf,
}

impl CronMutex {
    /// Mutex at `/tmp/<name>.lock`
    pub fn new(name: &str) -> Result<Self, MutexError> {
        Self::in_dir(name, DEFAULT_LOCK_DIR)
    }

    pub fn in_dir(name: &str, dir: impl AsRef<Path>) -> Result<Self, MutexError> {
        let valid = !name.is_empty()
            && name != "."
            && name != ".."
            && !name.contains(['/', '\\', '\0']);
        if !valid {
            return Err(MutexError::InvalidName(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            path: dir.as_ref().join(format!("{name}.lock")),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_held(&self) -> bool {
        self.path.exists()
    }

    /// PID written by the current holder, if the file is readable
    pub fn holder_pid(&self) -> Option<u32> {
        fs::read_to_string(&self.path).ok()?.trim().parse().ok()
    }

    pub fn acquire(&self) -> Result<CronGuard, MutexError> {
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(MutexError::AlreadyHeld {
                    path: self.path.clone(),
                })
            }
            Err(e) => return Err(MutexError::Io(e)),
        };

        // From here on the file is ours; the guard removes it on any exit
        let guard = CronGuard {
            path: self.path.clone(),
            released: false,
        };
        writeln!(file, "{}", std::process::id())?;
        info!(lock = %self.path.display(), "acquired cron lock {}", self.name);
        Ok(guard)
    }

    /// Run `job` while holding the mutex
    ///
    /// The lock is released whether `job` succeeds, fails or panics. A job
    /// error takes precedence over a release error.
    pub fn run<T, E, F>(&self, job: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<MutexError>,
    {
        let guard = self.acquire()?;
        let result = job();
        let released = guard.release();

        match (result, released) {
            (Err(err), _) => Err(err),
            (Ok(_), Err(err)) => Err(err.into()),
            (Ok(value), Ok(())) => Ok(value),
        }
    }
}

/// Proof of acquisition; dropping it releases the lock
#[derive(Debug)]
pub struct CronGuard {
    path: PathBuf,
    released: bool,
}

impl CronGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Release explicitly, surfacing a failure to remove the file
    pub fn release(mut self) -> Result<(), MutexError> {
        self.released = true;
        fs::remove_file(&self.path).map_err(|source| MutexError::ReleaseFailed {
            path: self.path.clone(),
            source,
        })?;
        info!(lock = %self.path.display(), "released cron lock");
        Ok(())
    }
}

impl Drop for CronGuard {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        match fs::remove_file(&self.path) {
            Ok(()) => info!(lock = %self.path.display(), "released cron lock"),
            Err(e) => warn!(lock = %self.path.display(), "failed to release cron lock: {e}"),
        }
    }
}

// SPDX-License-Identifier: MIT
//
// Diagnostic logging.
//
// Prompts own stderr while they run, so by default only warnings and worse
// reach it (override with RUST_LOG). `--log-file` routes everything at
// debug level to a file instead, where it can't tear a frame.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use log::LevelFilter;

/// Filter used on stderr when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

#[derive(Debug, Default)]
pub struct Logging {
    file_name: Option<PathBuf>,
}

impl Logging {
    #[must_use]
    pub const fn new() -> Self {
        Self { file_name: None }
    }

    /// Append debug-level logs to `file_name` instead of stderr.
    #[must_use]
    pub fn with_file<P>(mut self, file_name: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_name = Some(file_name.into());
        self
    }

    /// Install the global logger.
    ///
    /// # Errors
    ///
    /// Fails when the log file can't be opened or a logger is already set.
    pub fn start(&self) -> Result<()> {
        let mut b = match &self.file_name {
            Some(file_name) => {
                let fd = fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(file_name)
                    .with_context(|| {
                        format!("unable to open {} for writing", file_name.display())
                    })?;
                let mut b = env_logger::Builder::new();
                b.filter_level(LevelFilter::Debug);
                b.target(Target::Pipe(Box::new(fd)));
                b
            }
            None => env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER)),
        };

        b.try_init().context("logger already initialised")?;
        Ok(())
    }
}

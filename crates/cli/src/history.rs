// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Quiz history persisted as a JSON array, newest result first.
use anyhow::{Context, Result};
use log::debug;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use pokerdrill_core::QuizResult;

/// The quiz history file.
#[derive(Debug, Clone)]
pub struct History {
    path: PathBuf,
}

impl History {
    /// The maximum number of results kept.
    pub const MAX_RESULTS: usize = 50;

    /// Creates a history stored at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the results, newest first, a missing file is an empty history.
    pub fn load(&self) -> Result<Vec<QuizResult>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Reading {}", self.path.display()));
            }
        };

        serde_json::from_str(&data).with_context(|| format!("Parsing {}", self.path.display()))
    }

    /// Adds a result at the front of `results`, drops the oldest results over
    /// the limit, and saves them.
    pub fn record(&self, results: &mut Vec<QuizResult>, result: QuizResult) -> Result<()> {
        results.insert(0, result);
        results.truncate(Self::MAX_RESULTS);
        self.save(results)
    }

    /// Writes the results to a sibling file and renames it over the history,
    /// so an interrupted write leaves the previous file intact.
    fn save(&self, results: &[QuizResult]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).with_context(|| format!("Creating {}", dir.display()))?;
        }

        let data = serde_json::to_string_pretty(results)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, data).with_context(|| format!("Writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path).with_context(|| format!("Replacing {}", self.path.display()))?;

        debug!("Saved {} results to {}", results.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Deletes the history, returns false if there was nothing to delete.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("Removing {}", self.path.display())),
        }
    }
}

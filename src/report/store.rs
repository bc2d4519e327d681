//! Store module - append-only JSON file of completion records
//!
//! The entire store is a single JSON array. Each append reads the current
//! contents (an absent file reads as an empty array), pushes one record
//! and rewrites the whole array. Concurrent writers are not coordinated;
//! simultaneous appends can lose a record.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::report::record::SavedTime;

/// File-backed record store
#[derive(Debug, Clone)]
pub struct TimeStore {
    path: PathBuf,
}

impl TimeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all stored records; an absent file is an empty store
    pub async fn load(&self) -> Result<Vec<SavedTime>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("malformed record store at {}", self.path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => {
                Err(err).with_context(|| format!("failed to read {}", self.path.display()))
            }
        }
    }

    /// Append one record and rewrite the store
    pub async fn append(&self, entry: SavedTime) -> Result<()> {
        let mut entries = self.load().await?;
        entries.push(entry);
        let json = serde_json::to_vec_pretty(&entries)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}

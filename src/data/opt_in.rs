use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Flat-file storage for the set of opted-in user ids.
///
/// The file holds a single JSON array of user-id strings. Every save rewrites
/// the whole file; there is no incremental append.
pub struct OptInRepository {
    path: PathBuf,
}

impl OptInRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored user ids, creating an empty file first if none exists.
    ///
    /// A file containing JSON `null` is read as an empty list.
    ///
    /// # Returns
    /// - `Ok(BTreeSet<String>)` - The stored user ids
    /// - `Err(AppError::IoErr)` - The file could not be created or read
    /// - `Err(AppError::JsonErr)` - The file is not a JSON array of strings
    pub async fn load(&self) -> Result<BTreeSet<String>, AppError> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::info!(
                "Opt-in file {} not found, creating an empty one",
                self.path.display()
            );
            self.save(&BTreeSet::new()).await?;
        }

        let contents = tokio::fs::read_to_string(&self.path).await?;
        let users: Option<Vec<String>> = serde_json::from_str(&contents)?;

        Ok(users.unwrap_or_default().into_iter().collect())
    }

    /// Overwrites the file with the provided user ids.
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(AppError::IoErr)` - The file could not be written
    pub async fn save(&self, users: &BTreeSet<String>) -> Result<(), AppError> {
        let json = serde_json::to_string(users)?;

        tokio::fs::write(&self.path, json).await?;

        Ok(())
    }
}

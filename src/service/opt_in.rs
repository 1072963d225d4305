//! Opt-in registry service.
//!
//! This module provides the `OptInService`, the in-memory set of users who agreed
//! to have their activity announced. The set is loaded from the opt-in file once at
//! startup and every mutation made through `opt_in`/`opt_out` is flushed to the file
//! in full before the call returns.

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{data::opt_in::OptInRepository, error::AppError};

/// Service tracking which users opted in to activity notifications.
///
/// Cheap to clone; clones share the same set and file. The write lock is held
/// across the file write so the file always reflects mutations in the order
/// they were applied.
#[derive(Clone)]
pub struct OptInService {
    users: Arc<RwLock<BTreeSet<String>>>,
    repo: Arc<OptInRepository>,
}

impl OptInService {
    /// Loads the registry from the opt-in file at `path`.
    ///
    /// Creates an empty file first if none exists.
    ///
    /// # Arguments
    /// - `path` - Location of the opt-in file
    ///
    /// # Returns
    /// - `Ok(OptInService)` - Registry holding the stored user ids
    /// - `Err(AppError::IoErr)` - The file could not be created or read
    /// - `Err(AppError::JsonErr)` - The file is not a JSON array of strings
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let repo = OptInRepository::new(path);
        let users = repo.load().await?;

        tracing::info!(
            "Loaded {} opted-in users from {}",
            users.len(),
            repo.path().display()
        );

        Ok(Self {
            users: Arc::new(RwLock::new(users)),
            repo: Arc::new(repo),
        })
    }

    /// Adds a user to the in-memory set without persisting.
    ///
    /// # Returns
    /// - `true` - User was not opted in before
    /// - `false` - User was already opted in
    pub async fn add(&self, user_id: &str) -> bool {
        self.users.write().await.insert(user_id.to_string())
    }

    /// Removes a user from the in-memory set without persisting.
    ///
    /// Removing a user that is not opted in is a no-op.
    ///
    /// # Returns
    /// - `true` - User was opted in before
    /// - `false` - User was not opted in
    pub async fn remove(&self, user_id: &str) -> bool {
        self.users.write().await.remove(user_id)
    }

    pub async fn contains(&self, user_id: &str) -> bool {
        self.users.read().await.contains(user_id)
    }

    /// Writes the full set to the opt-in file, overwriting its contents.
    pub async fn persist(&self) -> Result<(), AppError> {
        let users = self.users.read().await;
        self.repo.save(&users).await
    }

    /// Opts a user in and flushes the set to disk.
    ///
    /// The in-memory change is kept even if the write fails, so memory and disk
    /// diverge until the next successful write.
    ///
    /// # Returns
    /// - `Ok(())` - User is opted in and the file is up to date
    /// - `Err(AppError::IoErr)` - User is opted in in memory only
    pub async fn opt_in(&self, user_id: &str) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        users.insert(user_id.to_string());
        self.repo.save(&users).await
    }

    /// Opts a user out and flushes the set to disk.
    ///
    /// The file is rewritten even when the user was not opted in. As with
    /// `opt_in`, the in-memory change is kept if the write fails.
    pub async fn opt_out(&self, user_id: &str) -> Result<(), AppError> {
        let mut users = self.users.write().await;
        users.remove(user_id);
        self.repo.save(&users).await
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Copy of the current set, in sorted order.
    pub async fn snapshot(&self) -> BTreeSet<String> {
        self.users.read().await.clone()
    }
}

//! Application state shared across all event handlers.
//!
//! `AppState` is built once during startup and cloned into the Discord event
//! handler and the cooldown sweep job. It replaces process-wide globals: every
//! handler receives the registry and tracker it works with explicitly.

use std::sync::Arc;

use crate::{
    config::Config,
    error::AppError,
    service::{cooldown::CooldownService, opt_in::OptInService},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `Arc<Config>` is a reference-counted pointer
/// - `OptInService` and `CooldownService` share their data through `Arc`
#[derive(Clone)]
pub struct AppState {
    /// Static configuration loaded at startup.
    pub config: Arc<Config>,

    /// Registry of users who opted in to activity notifications.
    ///
    /// Mutated by the opt-in command, read by the presence handler.
    pub opt_in: OptInService,

    /// Time of the last notification per user.
    ///
    /// Written by the presence handler, pruned by the sweep job.
    pub cooldown: CooldownService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    pub fn new(config: Arc<Config>, opt_in: OptInService, cooldown: CooldownService) -> Self {
        Self {
            config,
            opt_in,
            cooldown,
        }
    }

    /// Builds the state from configuration, loading the opt-in file from disk.
    ///
    /// # Arguments
    /// - `config` - Loaded configuration
    ///
    /// # Returns
    /// - `Ok(AppState)` - State with the registry loaded and an empty cooldown tracker
    /// - `Err(AppError)` - The opt-in file could not be created, read or parsed
    pub async fn from_config(config: Config) -> Result<Self, AppError> {
        let opt_in = OptInService::load(config.opt_in_file.clone()).await?;
        let cooldown = CooldownService::new(config.activity_cooldown_ms);

        Ok(Self::new(Arc::new(config), opt_in, cooldown))
    }
}

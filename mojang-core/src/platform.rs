//! Platform-specific directory lookup.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{MjError, MjResult};

/// Per-user directories of the current platform.
#[derive(Debug, Clone, Copy)]
pub struct Platform;

impl Platform {
    /// Get the platform-specific configuration directory.
    ///
    /// - Windows: `%APPDATA%/mojang-api`
    /// - macOS: `~/Library/Application Support/mojang-api`
    /// - Linux: `~/.config/mojang-api`
    pub fn config_dir() -> MjResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| MjError::Config("could not determine config directory".into()))?;
        Ok(base.join(APP_NAME))
    }

    /// Get the platform-specific data directory (used for logs).
    pub fn data_dir() -> MjResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| MjError::Config("could not determine data directory".into()))?;
        Ok(base.join(APP_NAME))
    }
}

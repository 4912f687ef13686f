mod config;
pub mod database;

pub use config::{Config, PreferencesConfig, ProfileConfig};
pub use database::{Database, CHECK_INS_KEY, HABITS_KEY};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns the data directory, creating it if needed.
///
/// `RIPPLEHABITS_DATA_DIR` wins when set. Otherwise the directory is
/// `~/.config/ripplehabits[-dev]/`, with `RIPPLEHABITS_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("RIPPLEHABITS_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env =
                std::env::var("RIPPLEHABITS_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("ripplehabits-dev")
            } else {
                base_dir.join("ripplehabits")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

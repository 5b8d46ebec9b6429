// SPDX-License-Identifier: MPL-2.0
//! Where GoBarber keeps its files.
//!
//! Two directories matter: the config directory holds `settings.toml`, the
//! data directory holds the persisted sign-in session.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`GOBARBER_DATA_DIR`, `GOBARBER_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with `GoBarber` appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "GoBarber";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "GOBARBER_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "GOBARBER_CONFIG_DIR";

static CLI_DATA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    Data,
    Config,
}

impl Dir {
    fn cli(self) -> Option<PathBuf> {
        let cell = match self {
            Dir::Data => &CLI_DATA_DIR,
            Dir::Config => &CLI_CONFIG_DIR,
        };
        cell.get().and_then(Clone::clone)
    }

    fn env_var(self) -> &'static str {
        match self {
            Dir::Data => ENV_DATA_DIR,
            Dir::Config => ENV_CONFIG_DIR,
        }
    }

    fn platform(self) -> Option<PathBuf> {
        match self {
            Dir::Data => dirs::data_dir(),
            Dir::Config => dirs::config_dir(),
        }
    }

    fn resolve(self, override_path: Option<PathBuf>) -> Option<PathBuf> {
        if let Some(path) = override_path.or_else(|| self.cli()) {
            return Some(path);
        }

        if let Ok(env_path) = std::env::var(self.env_var()) {
            if !env_path.is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }

        self.platform().map(|mut path| {
            path.push(APP_NAME);
            path
        })
    }
}

/// Records the `--data-dir` and `--config-dir` arguments.
///
/// Only the first call has an effect; returns `false` when the overrides
/// were already set.
pub fn init_cli_overrides(data_dir: Option<String>, config_dir: Option<String>) -> bool {
    let data = CLI_DATA_DIR.set(data_dir.map(PathBuf::from)).is_ok();
    let config = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok();
    if !(data && config) {
        tracing::warn!("path overrides already initialized; ignoring new values");
    }
    data && config
}

/// Returns the directory holding persisted state such as the session.
///
/// Returns `None` if the platform has no data directory.
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Data directory, preferring `override_path` when given.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Dir::Data.resolve(override_path)
}

/// Returns the directory holding `settings.toml`.
///
/// Returns `None` if the platform has no config directory.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Config directory, preferring `override_path` when given.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    Dir::Config.resolve(override_path)
}

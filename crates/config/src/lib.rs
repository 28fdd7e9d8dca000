pub mod schema;
pub mod watcher;

pub use schema::{
    DashboardConfig, HistoryConfig, LinkConfig, SamplerConfig, StationConfig, ThemeConfig,
};
pub use watcher::ConfigWatcher;

use floe_core::{FloeError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `DashboardConfig::default()`
/// if the file doesn't exist so the dashboard always has sensible defaults.
pub fn load(path: impl AsRef<Path>) -> Result<DashboardConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(DashboardConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| FloeError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| FloeError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("floe").join("floe.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load("/nonexistent/floe/floe.toml").unwrap();
        assert_eq!(cfg.history.capacity, 5);
    }
}

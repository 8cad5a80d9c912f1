use crate::error::{Result, TodoError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "todo-api.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite file path, or `:memory:`.
    #[serde(default = "default_database_path")]
    pub path: String,
}

fn default_database_path() -> String {
    "todos.db".to_string()
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

/// Values given on the command line or through the environment.
/// `Some` entries win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, `todo-api.toml` in `cwd`
    /// is used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>, cwd: &Path) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => {
                return Err(TodoError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            Some(p) => Some(p.to_path_buf()),
            None => Some(cwd.join(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        };

        match config_path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "Loading config file");
                Self::from_file(&p)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(host) = overrides.host {
            self.server.host = host;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(database) = overrides.database {
            self.database.path = database;
        }
        self
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.database.path, "todos.db");
    }

    #[test]
    fn test_loads_config_from_cwd() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            "[server]\nport = 8080\n",
        )
        .unwrap();

        let config = AppConfig::load(None, temp_dir.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.database.path, "todos.db");
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");
        let err = AppConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(matches!(err, TodoError::Config(_)));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();
        assert!(matches!(
            AppConfig::load(Some(&path), temp_dir.path()),
            Err(TodoError::Toml(_))
        ));
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::default().apply(Overrides {
            host: None,
            port: Some(0),
            database: Some(":memory:".to_string()),
        });
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 0);
        assert_eq!(config.database_path(), PathBuf::from(":memory:"));
    }
}

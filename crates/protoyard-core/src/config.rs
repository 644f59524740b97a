use crate::{Error, Result};
use crate::path::CONFIG_FILE;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PROJECTS_DIR: &str = "projects";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_projects_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECTS_DIR)
}

/// Workspace configuration read from `protoyard.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Projects directory; relative paths are taken from the workspace root
    #[serde(default = "default_projects_dir")]
    pub projects_dir: PathBuf,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projects_dir: default_projects_dir(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load `protoyard.toml` from the workspace root, or defaults if absent.
    pub fn load(workspace_root: &Path) -> Result<Self> {
        Self::load_from(&workspace_root.join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Absolute projects root for a given workspace root.
    pub fn projects_root(&self, workspace_root: &Path) -> PathBuf {
        if self.projects_dir.is_absolute() {
            self.projects_dir.clone()
        } else {
            workspace_root.join(&self.projects_dir)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.projects_dir, PathBuf::from("projects"));
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load(temp_dir.path())?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join(CONFIG_FILE);

        let config = Config {
            projects_dir: PathBuf::from("mockups"),
            server: ServerConfig {
                bind: "0.0.0.0:8080".to_string(),
            },
        };
        config.save_to(&config_path)?;

        let loaded = Config::load(temp_dir.path())?;
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.projects_root(temp_dir.path()),
            temp_dir.path().join("mockups")
        );
        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[server]\nbind = \"127.0.0.1:4000\"\n",
        )?;

        let config = Config::load(temp_dir.path())?;
        assert_eq!(config.projects_dir, PathBuf::from("projects"));
        assert_eq!(config.server.bind, "127.0.0.1:4000");
        Ok(())
    }

    #[test]
    fn test_absolute_projects_dir_is_kept() {
        let config = Config {
            projects_dir: PathBuf::from("/srv/prototypes"),
            ..Config::default()
        };
        assert_eq!(
            config.projects_root(Path::new("/home/me/yard")),
            PathBuf::from("/srv/prototypes")
        );
    }

    #[test]
    fn test_broken_config_names_the_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&config_path, "projects_dir = [").unwrap();

        let err = Config::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::ParseConfig { .. }));
        assert!(err.to_string().starts_with(&format!("Invalid config {}", config_path.display())));
    }
}

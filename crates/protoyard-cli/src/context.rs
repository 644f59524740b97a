use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use protoyard_core::{CONFIG_FILE, Config, resolve_workspace_root};
use std::path::{Path, PathBuf};

pub struct ExecutionContext {
    workspace_root: PathBuf,
    config: OnceCell<Config>,
}

impl ExecutionContext {
    pub fn new(root: Option<&str>) -> Result<Self> {
        let workspace_root =
            resolve_workspace_root(root).context("Failed to resolve workspace root")?;

        Ok(Self {
            workspace_root,
            config: OnceCell::new(),
        })
    }

    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            Config::load(&self.workspace_root).with_context(|| {
                format!(
                    "Failed to load {}",
                    self.workspace_root.join(CONFIG_FILE).display()
                )
            })
        })
    }

    pub fn projects_root(&self) -> Result<PathBuf> {
        Ok(self.config()?.projects_root(&self.workspace_root))
    }
}

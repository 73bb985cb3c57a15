//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use kitbag_cache::{Cache, FileStore};
use kitbag_store::CartStore;

use crate::config::CliConfig;
use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["kitbag.toml", ".kitbag.toml", "kitbag.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from an explicit config file, or search the working
    /// directory and its parents for one. No file means defaults.
    pub fn load(config_path: Option<&Path>, data_dir: Option<PathBuf>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let mut config = match config_path {
            Some(path) => CliConfig::load(path)?,
            None => find_config(&cwd)?.unwrap_or_default(),
        };
        if let Some(dir) = data_dir {
            config.storage.data_dir = dir;
        }

        Ok(Self { config, output, cwd })
    }

    /// Directory holding the slot files, resolved against the working directory.
    pub fn data_dir(&self) -> PathBuf {
        self.cwd.join(&self.config.storage.data_dir)
    }

    /// Open the cart store on the configured slot.
    pub fn open_store(&self) -> Result<CartStore<FileStore>> {
        let dir = self.data_dir();
        let backend = FileStore::open(&dir)
            .with_context(|| format!("Failed to open data directory: {}", dir.display()))?;
        CartStore::open(Cache::new(backend), self.config.store.clone())
            .context("Failed to load cart")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Result<Option<CliConfig>> {
    for dir in start.ancestors() {
        for name in CONFIG_NAMES {
            let path = dir.join(name);
            if path.is_file() {
                return CliConfig::load(&path).map(Some);
            }
        }
    }
    Ok(None)
}

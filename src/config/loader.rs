//! Configuration file loading

use super::file::{ConfigFile, CONFIG_FILE_NAME};
use crate::infra::{FileSystem, RealFileSystem};
use anyhow::{Context, Result};
use std::path::Path;

/// Handles loading configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from .qdoc.toml in the given directory
    ///
    /// A missing file yields [`ConfigFile::default`].
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use qdoc_kit::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("."))?;
    /// println!("Validating docs in {}", config.docs_dir);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(project_root: &Path) -> Result<ConfigFile> {
        Self::load_with_fs(project_root, &RealFileSystem)
    }

    /// Load config with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(project_root: &Path, fs: &FS) -> Result<ConfigFile> {
        let config_path = project_root.join(CONFIG_FILE_NAME);

        let contents = match fs.read_to_string(&config_path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                return Ok(ConfigFile::default());
            }
            Err(e) => {
                return Err(e).context("Failed to read .qdoc.toml");
            }
        };

        let config: ConfigFile =
            toml_edit::de::from_str(&contents).context("Failed to parse .qdoc.toml")?;

        config
            .cost
            .validate()
            .context("Invalid cost configuration")?;

        Ok(config)
    }
}

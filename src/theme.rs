//! Preferred color scheme persistence
//!
//! Stores the reader's last chosen color scheme in a small JSON key-value
//! file next to the site sources. Setting a scheme is a single write of the
//! `preferredTheme` key; any other keys in the file are kept.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::PathBuf;

use crate::error::QdocError;
use crate::infra::{FileSystem, RealFileSystem};

/// Preferences file name
pub const PREFS_FILE_NAME: &str = ".qdoc-prefs.json";

/// Key under which the color scheme is stored
pub const THEME_KEY: &str = "preferredTheme";

/// Reads and writes the preferred color scheme
///
/// # Examples
///
/// ```
/// use qdoc_kit::theme::ThemeStore;
///
/// let dir = tempfile::tempdir()?;
/// let store = ThemeStore::new(dir.path());
/// assert_eq!(store.preferred()?, None);
///
/// store.set_preferred("slate")?;
/// assert_eq!(store.preferred()?.as_deref(), Some("slate"));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub struct ThemeStore<FS: FileSystem = RealFileSystem> {
    dir: PathBuf,
    fs: FS,
}

impl ThemeStore<RealFileSystem> {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_fs(dir, RealFileSystem)
    }
}

impl<FS: FileSystem> ThemeStore<FS> {
    /// Create a store with a custom filesystem implementation
    pub fn with_fs(dir: impl Into<PathBuf>, fs: FS) -> Self {
        Self {
            dir: dir.into(),
            fs,
        }
    }

    /// Path of the preferences file
    pub fn path(&self) -> PathBuf {
        self.dir.join(PREFS_FILE_NAME)
    }

    /// The stored color scheme, if any
    pub fn preferred(&self) -> Result<Option<String>> {
        let prefs = self.load()?;
        Ok(prefs
            .get(THEME_KEY)
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    /// Persist `scheme` as the preferred color scheme
    pub fn set_preferred(&self, scheme: &str) -> Result<()> {
        let scheme = scheme.trim();
        if scheme.is_empty() {
            return Err(QdocError::InvalidArgument {
                name: "scheme".to_string(),
                reason: "color scheme name cannot be empty".to_string(),
            }
            .into());
        }

        let mut prefs = self.load()?;
        prefs.insert(THEME_KEY.to_string(), Value::String(scheme.to_string()));
        self.save(&prefs)?;

        log::info!("preferred theme set to '{}'", scheme);
        Ok(())
    }

    fn load(&self) -> Result<Map<String, Value>> {
        let path = self.path();
        let contents = match self.fs.read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {} as a JSON object", path.display()))
    }

    fn save(&self, prefs: &Map<String, Value>) -> Result<()> {
        self.fs
            .create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let path = self.path();
        let contents =
            serde_json::to_string_pretty(prefs).context("Failed to serialize preferences")?;
        self.fs
            .write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

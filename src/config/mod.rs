//! Configuration for qdoc
//!
//! This module provides:
//! - .qdoc.toml file structure with defaults
//! - Loading with validation of cost settings

pub mod file;
pub mod loader;

pub use file::{ConfigFile, CostSettings, CONFIG_FILE_NAME, DEFAULT_DOCS_DIR};
pub use loader::ConfigLoader;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_name_constant_is_correct() {
        assert_eq!(CONFIG_FILE_NAME, ".qdoc.toml");
    }

    #[test]
    fn test_default_config_points_at_docs_dir() {
        let config = ConfigFile::default();
        assert_eq!(config.docs_dir, DEFAULT_DOCS_DIR);
        assert!(config.site_host.is_none());
    }
}

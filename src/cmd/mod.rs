//! Command handlers for the qdoc CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod completions;
pub mod cost;
pub mod kubectl;
pub mod links;
pub mod results;
pub mod theme;
pub mod validate;

// Re-export command functions for convenient access
pub use completions::cmd_completions;
pub use cost::cmd_cost;
pub use kubectl::cmd_kubectl;
pub use links::cmd_links;
pub use results::cmd_results;
pub use theme::{cmd_theme_get, cmd_theme_set};
pub use validate::cmd_validate;

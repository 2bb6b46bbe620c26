//! Theme command implementation
//!
//! Handles `qdoc theme get` and `qdoc theme set`, which read and persist the
//! preferred color scheme

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::fmt::{INFO, SPARKLES};
use crate::theme::ThemeStore;

/// Print the stored color scheme, if any
pub fn cmd_theme_get(dir: &str) -> Result<()> {
    match ThemeStore::new(dir).preferred()? {
        Some(scheme) => println!("{}", scheme),
        None => eprintln!("{} No preferred theme set", INFO),
    }
    Ok(())
}

/// Persist `scheme` as the preferred color scheme
///
/// # Examples
///
/// ```no_run
/// use qdoc_kit::cmd::theme::cmd_theme_set;
///
/// cmd_theme_set(".", "slate")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_theme_set(dir: &str, scheme: &str) -> Result<()> {
    let store = ThemeStore::new(dir);
    store.set_preferred(scheme)?;
    println!("{}", set_confirmation(scheme, &store.path()));
    Ok(())
}

fn set_confirmation(scheme: &str, prefs_path: &Path) -> String {
    format!(
        "{} Preferred theme set to {} ({})",
        SPARKLES,
        style(scheme.trim()).cyan().bold(),
        style(prefs_path.display()).dim()
    )
}

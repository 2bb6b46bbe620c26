//! Links command implementation
//!
//! Handles the `qdoc links` command which marks external links in a built
//! site so they open in a new tab

use anyhow::Result;
use console::style;
use std::path::Path;

use crate::config::ConfigLoader;
use crate::error::QdocError;
use crate::fmt::{CHECKMARK, INFO, LINK};
use crate::links::LinkAnnotator;

/// Annotate external links in the HTML files under `path`
///
/// The site host comes from `--site-host`, falling back to `site-host` in
/// `.qdoc.toml`.
///
/// # Examples
///
/// ```no_run
/// use qdoc_kit::cmd::links::cmd_links;
///
/// // Preview which files would change
/// cmd_links("site", Some("docs.example.org"), true)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - `path` doesn't exist
/// - no site host is configured
/// - a file cannot be read or written
pub fn cmd_links(path: &str, site_host: Option<&str>, dry_run: bool) -> Result<()> {
    let root = Path::new(path);
    if !root.exists() {
        return Err(QdocError::FileNotFound {
            path: root.to_path_buf(),
            operation: "qdoc links".to_string(),
        }
        .into());
    }

    let site_host = resolve_site_host(site_host, ConfigLoader::load(Path::new("."))?.site_host)?;

    println!(
        "{} {} external links for {}",
        LINK,
        style(if dry_run { "Checking" } else { "Annotating" }).bold(),
        style(&site_host).cyan()
    );

    let summary = LinkAnnotator::new(site_host)
        .dry_run(dry_run)
        .annotate_path(root)?;

    for file in &summary.changed_files {
        println!("   {} {}", style("→").dim(), file.display());
    }
    println!();

    let verb = if dry_run { "would be updated" } else { "updated" };
    println!(
        "{} {} link(s) in {} of {} file(s) {}",
        if dry_run { INFO } else { CHECKMARK },
        style(summary.links_rewritten).bold(),
        summary.changed_files.len(),
        summary.files_scanned,
        verb
    );
    Ok(())
}

fn resolve_site_host(flag: Option<&str>, configured: Option<String>) -> Result<String> {
    let host = flag
        .map(str::to_string)
        .or(configured)
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty());

    host.ok_or_else(|| {
        QdocError::InvalidArgument {
            name: "site-host".to_string(),
            reason: "no site host given; pass --site-host or set site-host in .qdoc.toml"
                .to_string(),
        }
        .into()
    })
}

//! Test fixture helpers for creating docs trees and built sites
//!
//! Provides utilities for setting up realistic markdown sources and HTML
//! output in temporary directories.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Re-export anyhow for convenience
pub use anyhow;

/// Write `content` to `root/rel`, creating parent directories
pub fn write_file(root: &Path, rel: &str, content: &str) -> anyhow::Result<()> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Creates a docs tree that passes every check
///
/// # Returns
///
/// The TempDir holding the tree - it must be kept alive
pub fn create_docs_tree() -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();

    write_file(
        root,
        "index.md",
        "---\nhide: toc\n---\n# Qiskit Operator\n\nStart with the [install guide](getting-started/install.md).\n",
    )?;
    write_file(
        root,
        "getting-started/install.md",
        r#"---
title: Install
---
# Install

## Helm

```bash
helm install qiskit-operator ./chart
```

![Architecture](../assets/arch.png)

Back to [home](../index.md).
"#,
    )?;
    write_file(root, "assets/arch.png", "png")?;

    Ok(temp_dir)
}

/// Creates a docs tree with one broken link and one heading skip
pub fn create_broken_docs_tree() -> anyhow::Result<TempDir> {
    let temp_dir = create_docs_tree()?;
    write_file(
        temp_dir.path(),
        "guide/jobs.md",
        "# Jobs\n\n### Submitting\n\nSee [results](results.md).\n",
    )?;
    Ok(temp_dir)
}

/// Creates a docs tree whose only problem is a heading skip
pub fn create_warning_only_docs_tree() -> anyhow::Result<TempDir> {
    let temp_dir = create_docs_tree()?;
    write_file(temp_dir.path(), "guide/jobs.md", "# Jobs\n\n### Submitting\n")?;
    Ok(temp_dir)
}

/// Creates a built site with internal and external links
pub fn create_built_site(site_host: &str) -> anyhow::Result<TempDir> {
    let temp_dir = TempDir::new()?;
    write_file(
        temp_dir.path(),
        "index.html",
        &format!(
            r##"<html><body>
<a href="https://github.com/qiskit-community/qiskit-operator">GitHub</a>
<a href="https://{host}/guide/">Guide</a>
<a href="#install">Install</a>
<a href="guide/">Relative</a>
</body></html>
"##,
            host = site_host
        ),
    )?;
    write_file(
        temp_dir.path(),
        "guide/index.html",
        r#"<p>See <a class="ext" href="https://kubernetes.io/docs/">Kubernetes</a>.</p>"#,
    )?;
    Ok(temp_dir)
}

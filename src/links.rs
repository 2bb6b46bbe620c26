//! External link attribution for generated HTML pages
//!
//! Links that leave the documentation site open in a new tab and carry
//! `rel="noopener noreferrer"`. A link counts as external when its href starts
//! with `http` and its host does not contain the site's host name.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::infra::{find_files_with_extension, FileSystem, RealFileSystem};

/// `target` value applied to external links
pub const EXTERNAL_TARGET: &str = "_blank";

/// `rel` value applied to external links
pub const EXTERNAL_REL: &str = "noopener noreferrer";

static ANCHOR_TAG_RE: OnceLock<Regex> = OnceLock::new();
static ATTRIBUTE_RE: OnceLock<Regex> = OnceLock::new();

/// An `<a ...>` start tag; quoted values may contain `>`
fn anchor_tag_re() -> &'static Regex {
    ANCHOR_TAG_RE.get_or_init(|| {
        Regex::new(r#"<[aA]\s(?:[^>"']|"[^"]*"|'[^']*')*>"#).expect("anchor tag regex is valid")
    })
}

/// One `name` or `name=value` pair; quoted values are consumed whole
fn attribute_re() -> &'static Regex {
    ATTRIBUTE_RE.get_or_init(|| {
        Regex::new(r#"([^\s"'>/=]+)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
            .expect("attribute regex is valid")
    })
}

/// How a link relates to the documentation site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// In-page anchor (`#section`)
    Anchor,
    /// Absolute link to another host
    External,
    /// Relative link or absolute link back to the site
    Internal,
}

/// Extract the host portion of an absolute URL.
///
/// Userinfo, port, path, query and fragment are stripped. Returns `None` when
/// the href has no `scheme://authority` part or the host is empty.
///
/// # Examples
///
/// ```
/// use qdoc_kit::links::host_of;
///
/// assert_eq!(host_of("https://quantum.ibm.com/services?x=1"), Some("quantum.ibm.com"));
/// assert_eq!(host_of("http://user@localhost:8000/docs/"), Some("localhost"));
/// assert_eq!(host_of("guide/setup.md"), None);
/// ```
pub fn host_of(href: &str) -> Option<&str> {
    let (_, rest) = href.split_once("://")?;
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let authority = authority.rsplit_once('@').map_or(authority, |(_, host)| host);

    let host = if authority.starts_with('[') {
        // IPv6 literal keeps its brackets
        authority
            .find(']')
            .map_or(authority, |end| &authority[..=end])
    } else {
        authority.split(':').next().unwrap_or("")
    };

    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}

/// Classify `href` relative to the site served at `site_host`.
///
/// Host comparison is case-insensitive containment, so `docs.example.org`
/// also treats `www.docs.example.org` as part of the site. An empty
/// `site_host` makes every link internal.
pub fn classify(href: &str, site_host: &str) -> LinkKind {
    if href.starts_with('#') {
        return LinkKind::Anchor;
    }
    if !href.starts_with("http") {
        return LinkKind::Internal;
    }
    match host_of(href) {
        Some(host)
            if !host
                .to_ascii_lowercase()
                .contains(&site_host.to_ascii_lowercase()) =>
        {
            LinkKind::External
        }
        _ => LinkKind::Internal,
    }
}

/// HTML after attribution, with the number of links changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotated {
    /// Rewritten document
    pub html: String,
    /// Number of anchor tags whose attributes changed
    pub rewritten: usize,
}

/// A parsed attribute with its byte span in the tag
struct Attribute<'t> {
    name: &'t str,
    value: Option<&'t str>,
    start: usize,
    end: usize,
}

/// Attributes of an anchor start tag, left to right
fn attributes(tag: &str) -> Vec<Attribute<'_>> {
    // Skip `<a` and the closing `>`
    let inner_end = tag.len().saturating_sub(1).max(2);
    let Some(inner) = tag.get(2..inner_end) else {
        return Vec::new();
    };

    attribute_re()
        .captures_iter(inner)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            let value = caps.get(2).or(caps.get(3)).or(caps.get(4));
            Some(Attribute {
                name: &tag[name.start() + 2..name.end() + 2],
                value: value.map(|v| &tag[v.start() + 2..v.end() + 2]),
                start: whole.start() + 2,
                end: whole.end() + 2,
            })
        })
        .collect()
}

fn attribute<'t>(attrs: &[Attribute<'t>], name: &str) -> Option<&'t str> {
    attrs
        .iter()
        .find(|attr| attr.name.eq_ignore_ascii_case(name))
        .and_then(|attr| attr.value)
}

fn attribute_tag(tag: &str, attrs: &[Attribute<'_>]) -> String {
    let mut kept = String::with_capacity(tag.len() + 48);
    let mut last = 0;
    for attr in attrs {
        if attr.name.eq_ignore_ascii_case("target") || attr.name.eq_ignore_ascii_case("rel") {
            kept.push_str(tag[last..attr.start].trim_end());
            last = attr.end;
        }
    }
    kept.push_str(&tag[last..]);

    let body = kept.trim_end_matches('>');
    let (body, close) = match body.strip_suffix('/') {
        Some(body) => (body.trim_end(), " />"),
        None => (body.trim_end(), ">"),
    };
    format!(
        r#"{} target="{}" rel="{}"{}"#,
        body, EXTERNAL_TARGET, EXTERNAL_REL, close
    )
}

/// Add `target`/`rel` attribution to every external `<a>` tag in `html`.
///
/// Existing `target` and `rel` attributes on external links are replaced.
/// Tags that already carry exactly the expected values are left as they are,
/// so running twice changes nothing.
///
/// # Examples
///
/// ```
/// use qdoc_kit::links::annotate_external_links;
///
/// let html = r##"<a href="https://qiskit.org">Qiskit</a> <a href="#install">Install</a>"##;
/// let out = annotate_external_links(html, "docs.example.org");
/// assert_eq!(out.rewritten, 1);
/// assert!(out.html.contains(r#"<a href="https://qiskit.org" target="_blank" rel="noopener noreferrer">"#));
/// assert!(out.html.contains(r##"<a href="#install">"##));
/// ```
pub fn annotate_external_links(html: &str, site_host: &str) -> Annotated {
    let mut rewritten = 0;
    let out = anchor_tag_re().replace_all(html, |caps: &Captures| {
        let tag = &caps[0];
        let attrs = attributes(tag);
        let external = attribute(&attrs, "href")
            .map(|href| classify(href, site_host) == LinkKind::External)
            .unwrap_or(false);
        let already_attributed = attribute(&attrs, "target") == Some(EXTERNAL_TARGET)
            && attribute(&attrs, "rel") == Some(EXTERNAL_REL);

        if external && !already_attributed {
            rewritten += 1;
            attribute_tag(tag, &attrs)
        } else {
            tag.to_string()
        }
    });

    Annotated {
        html: out.into_owned(),
        rewritten,
    }
}

/// Totals from annotating a tree of HTML files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotateSummary {
    /// HTML files examined
    pub files_scanned: usize,
    /// Files that contained at least one rewritten link
    pub changed_files: Vec<PathBuf>,
    /// Total links rewritten
    pub links_rewritten: usize,
}

/// Applies external-link attribution to HTML files on disk
pub struct LinkAnnotator<FS: FileSystem = RealFileSystem> {
    site_host: String,
    dry_run: bool,
    fs: FS,
}

impl LinkAnnotator<RealFileSystem> {
    /// Create an annotator for the site served at `site_host`
    pub fn new(site_host: impl Into<String>) -> Self {
        Self::with_fs(site_host, RealFileSystem)
    }
}

impl<FS: FileSystem> LinkAnnotator<FS> {
    /// Create an annotator with a custom filesystem implementation
    pub fn with_fs(site_host: impl Into<String>, fs: FS) -> Self {
        Self {
            site_host: site_host.into(),
            dry_run: false,
            fs,
        }
    }

    /// Report changes without writing files
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Annotate a single HTML file, returning the number of links rewritten
    pub fn annotate_file(&self, path: &Path) -> Result<usize> {
        let html = self
            .fs
            .read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let annotated = annotate_external_links(&html, &self.site_host);
        if annotated.rewritten > 0 && !self.dry_run {
            self.fs
                .write(path, annotated.html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::debug!(
                "rewrote {} external links in {}",
                annotated.rewritten,
                path.display()
            );
        }
        Ok(annotated.rewritten)
    }

    /// Annotate every `.html` file under `root` (or `root` itself if it is a file)
    pub fn annotate_path(&self, root: &Path) -> Result<AnnotateSummary> {
        let files = find_files_with_extension(&self.fs, root, "html")
            .with_context(|| format!("Failed to scan {}", root.display()))?;

        let mut summary = AnnotateSummary {
            files_scanned: files.len(),
            ..Default::default()
        };
        for file in files {
            let count = self.annotate_file(&file)?;
            if count > 0 {
                summary.links_rewritten += count;
                summary.changed_files.push(file);
            }
        }

        log::info!(
            "{} external links in {} of {} files{}",
            summary.links_rewritten,
            summary.changed_files.len(),
            summary.files_scanned,
            if self.dry_run { " (dry run)" } else { "" }
        );
        Ok(summary)
    }
}

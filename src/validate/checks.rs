//! Individual markdown checks
//!
//! Each check takes the file path and its contents and returns the issues it
//! found. Links, images and headings inside fenced code blocks are ignored.

use regex::Regex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::{CheckKind, ValidationIssue};

static LINK_RE: OnceLock<Regex> = OnceLock::new();
static IMAGE_RE: OnceLock<Regex> = OnceLock::new();

fn link_re() -> &'static Regex {
    LINK_RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link regex is valid"))
}

fn image_re() -> &'static Regex {
    IMAGE_RE.get_or_init(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").expect("image regex is valid"))
}

const FENCE: &str = "```";

/// Per-line flag: true when the line is a fence or inside a fenced block
fn fenced_lines(content: &str) -> Vec<bool> {
    let mut inside = false;
    content
        .lines()
        .map(|line| {
            if line.trim().starts_with(FENCE) {
                inside = !inside;
                true
            } else {
                inside
            }
        })
        .collect()
}

/// 1-based line number of a byte offset
fn line_of(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}

fn is_fenced(mask: &[bool], line: usize) -> bool {
    mask.get(line - 1).copied().unwrap_or(false)
}

/// Drop an optional `"title"` after the target
fn strip_title(target: &str) -> &str {
    target.split_whitespace().next().unwrap_or("")
}

fn resolve(file: &Path, target: &str) -> PathBuf {
    file.parent().unwrap_or_else(|| Path::new(".")).join(target)
}

fn with_md_suffix(path: &Path) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_os_string();
    s.push(".md");
    PathBuf::from(s)
}

/// Relative links must point at an existing file (optionally without `.md`)
pub fn check_links(file: &Path, content: &str) -> Vec<ValidationIssue> {
    let mask = fenced_lines(content);
    let mut issues = Vec::new();

    for caps in link_re().captures_iter(content) {
        let (Some(whole), Some(text), Some(link)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        // Images are handled by check_images
        if content[..whole.start()].ends_with('!') {
            continue;
        }
        let line = line_of(content, whole.start());
        if is_fenced(&mask, line) {
            continue;
        }

        let link = strip_title(link.as_str());
        if link.starts_with("http://")
            || link.starts_with("https://")
            || link.starts_with("mailto:")
            || link.starts_with('#')
        {
            continue;
        }

        let link_path = link.split('#').next().unwrap_or("");
        if link_path.is_empty() {
            continue;
        }

        let target = resolve(file, link_path);
        if target.exists() {
            continue;
        }
        if !link_path.ends_with(".md") && with_md_suffix(&target).exists() {
            continue;
        }

        issues.push(ValidationIssue::error(
            CheckKind::Link,
            file,
            Some(line),
            format!(
                "Broken link [{}]({}): {} not found",
                text.as_str(),
                link,
                target.display()
            ),
        ));
    }
    issues
}

/// Local images must exist
pub fn check_images(file: &Path, content: &str) -> Vec<ValidationIssue> {
    let mask = fenced_lines(content);
    let mut issues = Vec::new();

    for caps in image_re().captures_iter(content) {
        let (Some(whole), Some(alt), Some(path)) = (caps.get(0), caps.get(1), caps.get(2)) else {
            continue;
        };
        let line = line_of(content, whole.start());
        if is_fenced(&mask, line) {
            continue;
        }

        let path = strip_title(path.as_str());
        if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:")
        {
            continue;
        }

        let target = resolve(file, path);
        if !target.exists() {
            issues.push(ValidationIssue::error(
                CheckKind::Image,
                file,
                Some(line),
                format!(
                    "Missing image ![{}]({}): {} not found",
                    alt.as_str(),
                    path,
                    target.display()
                ),
            ));
        }
    }
    issues
}

/// Every opened code fence must be closed
pub fn check_code_blocks(file: &Path, content: &str) -> Vec<ValidationIssue> {
    let mut open_at = None;

    for (i, line) in content.lines().enumerate() {
        if line.trim().starts_with(FENCE) {
            open_at = match open_at {
                None => Some(i + 1),
                Some(_) => None,
            };
        }
    }

    match open_at {
        Some(start) => vec![ValidationIssue::error(
            CheckKind::CodeBlock,
            file,
            Some(start),
            format!("Unclosed code block started at line {}", start),
        )],
        None => Vec::new(),
    }
}

/// Frontmatter must be closed and, outside index pages, carry a title
pub fn check_frontmatter(file: &Path, content: &str) -> Vec<ValidationIssue> {
    if !content.starts_with("---\n") {
        return Vec::new();
    }

    let parts: Vec<&str> = content.splitn(3, "---\n").collect();
    if parts.len() < 3 {
        return vec![ValidationIssue::error(
            CheckKind::Frontmatter,
            file,
            Some(1),
            "Incomplete YAML frontmatter",
        )];
    }

    let is_index = file.file_name().and_then(|n| n.to_str()) == Some("index.md");
    if !parts[1].contains("title:") && !is_index {
        return vec![ValidationIssue::warning(
            CheckKind::Frontmatter,
            file,
            Some(1),
            "Missing title in frontmatter",
        )];
    }
    Vec::new()
}

/// ATX heading level of a line, if it is a heading
fn heading_level(line: &str) -> Option<usize> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if level == 0 || level > 6 {
        return None;
    }
    match line[level..].chars().next() {
        None => Some(level),
        Some(c) if c.is_whitespace() => Some(level),
        Some(_) => None,
    }
}

/// Headings must not skip levels when going deeper
pub fn check_headings(file: &Path, content: &str) -> Vec<ValidationIssue> {
    let mask = fenced_lines(content);
    let mut issues = Vec::new();
    let mut previous: Option<usize> = None;

    for (i, line) in content.lines().enumerate() {
        if mask[i] {
            continue;
        }
        let Some(level) = heading_level(line) else {
            continue;
        };

        if let Some(prev) = previous {
            if level > prev + 1 {
                issues.push(ValidationIssue::warning(
                    CheckKind::Heading,
                    file,
                    Some(i + 1),
                    format!("Heading level skip: jumped from H{} to H{}", prev, level),
                ));
            }
        }
        previous = Some(level);
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::Severity;
    use std::fs;
    use tempfile::TempDir;

    fn docs() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("guide")).unwrap();
        fs::create_dir_all(temp.path().join("img")).unwrap();
        fs::write(temp.path().join("index.md"), "# Home\n").unwrap();
        fs::write(temp.path().join("guide/setup.md"), "# Setup\n").unwrap();
        fs::write(temp.path().join("img/bell.png"), [0u8; 4]).unwrap();
        temp
    }

    #[test]
    fn test_links_resolve_relative_to_file() {
        let temp = docs();
        let file = temp.path().join("guide/usage.md");
        let content = "\
See [setup](setup.md), [setup again](./setup), [home](../index.md#top),
[external](https://qiskit.org), [mail](mailto:a@b.c), [anchor](#usage)
and [titled](setup.md \"Setup guide\").
";
        assert!(check_links(&file, content).is_empty());
    }

    #[test]
    fn test_broken_link_reported_with_line() {
        let temp = docs();
        let file = temp.path().join("index.md");
        let content = "# Home\n\nRead the [missing guide](guide/missing.md).\n";

        let issues = check_links(&file, content);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].check, CheckKind::Link);
        assert_eq!(issues[0].line, Some(3));
        assert!(issues[0].message.contains("[missing guide](guide/missing.md)"));
    }

    #[test]
    fn test_links_skip_images_and_code() {
        let temp = docs();
        let file = temp.path().join("index.md");
        let content = "![alt](img/nope.png)\n```\n[fake](nowhere.md)\n```\n";
        assert!(check_links(&file, content).is_empty());
    }

    #[test]
    fn test_images() {
        let temp = docs();
        let file = temp.path().join("index.md");
        let content = "\
![bell](img/bell.png)
![remote](https://example.com/x.png)
![gone](img/gone.png)
";
        let issues = check_images(&file, content);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, Some(3));
        assert!(issues[0].message.contains("img/gone.png"));
    }

    #[test]
    fn test_code_blocks() {
        let file = Path::new("page.md");
        assert!(check_code_blocks(file, "```python\nx = 1\n```\n").is_empty());

        let issues = check_code_blocks(file, "```\na\n```\n\ntext\n  ```bash\nls\n");
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, Some(6));
        assert!(issues[0].message.contains("line 6"));
    }

    #[test]
    fn test_frontmatter() {
        let page = Path::new("docs/page.md");
        let index = Path::new("docs/index.md");

        assert!(check_frontmatter(page, "# No frontmatter\n").is_empty());
        assert!(check_frontmatter(page, "---\ntitle: Page\n---\n# Page\n").is_empty());
        assert!(check_frontmatter(index, "---\nhide: toc\n---\n").is_empty());

        let missing_title = check_frontmatter(page, "---\nhide: toc\n---\n");
        assert_eq!(missing_title.len(), 1);
        assert_eq!(missing_title[0].severity, Severity::Warning);

        let incomplete = check_frontmatter(page, "---\ntitle: Page\n# Page\n");
        assert_eq!(incomplete.len(), 1);
        assert_eq!(incomplete[0].severity, Severity::Error);
        assert!(incomplete[0].message.contains("Incomplete"));
    }

    #[test]
    fn test_heading_level() {
        assert_eq!(heading_level("# Title"), Some(1));
        assert_eq!(heading_level("###"), Some(3));
        assert_eq!(heading_level("#hashtag"), None);
        assert_eq!(heading_level("####### seven"), None);
        assert_eq!(heading_level("text # not heading"), None);
    }

    #[test]
    fn test_headings() {
        let file = Path::new("page.md");
        let content = "\
# Title
## Section
#### Too deep
```python
# a comment, not a heading
```
## Back up
### Fine
";
        let issues = check_headings(file, content);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, Some(3));
        assert!(issues[0].message.contains("H2 to H4"));
    }

    #[test]
    fn test_first_heading_may_start_deep() {
        assert!(check_headings(Path::new("p.md"), "## Start\n### Next\n").is_empty());
    }
}

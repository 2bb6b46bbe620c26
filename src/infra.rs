//! Infrastructure traits for abstracting I/O operations.
//!
//! The link annotator, docs validator and preference store all touch the
//! filesystem through [`FileSystem`], so tests can swap in an in-memory
//! implementation and assert on what would have been written.

use std::fs::ReadDir;
use std::io;
use std::path::{Path, PathBuf};

/// Trait for abstracting filesystem operations.
pub trait FileSystem {
    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read the contents of a directory.
    fn read_dir(&self, path: &Path) -> io::Result<ReadDir>;

    /// Read the entire contents of a file into a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Write a slice of bytes to a file.
    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()>;
}

/// Real filesystem implementation that delegates to std::fs.
#[derive(Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<ReadDir> {
        std::fs::read_dir(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: impl AsRef<[u8]>) -> io::Result<()> {
        std::fs::write(path, contents)
    }
}

/// Recursively collect files under `dir` whose extension is `extension`.
///
/// Hidden entries (names starting with `.`) are skipped. When `dir` is itself
/// a matching file it is returned on its own. Results are sorted so reports
/// come out in a stable order.
pub fn find_files_with_extension<FS: FileSystem>(
    fs: &FS,
    dir: &Path,
    extension: &str,
) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    if dir.is_file() {
        if dir.extension().and_then(|e| e.to_str()) == Some(extension) {
            found.push(dir.to_path_buf());
        }
        return Ok(found);
    }

    collect_files(fs, dir, extension, &mut found)?;
    found.sort();
    Ok(found)
}

fn collect_files<FS: FileSystem>(
    fs: &FS,
    dir: &Path,
    extension: &str,
    found: &mut Vec<PathBuf>,
) -> io::Result<()> {
    for entry in fs.read_dir(dir)? {
        let path = entry?.path();

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') {
                continue;
            }
        }

        if path.is_dir() {
            collect_files(fs, &path, extension, found)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            found.push(path);
        }
    }
    Ok(())
}

//! Workspace file discovery
//!
//! Walks a directory tree and loads every scannable file into memory.
//! Paths are reported relative to the root with `/` separators, sorted.

use std::path::Path;

use walkdir::WalkDir;

use crate::config::WorkspaceConfig;
use crate::errors::{ScoutError, ScoutResult};
use crate::features::scanning::ScanLanguage;
use crate::pipeline::SourceFile;

/// Discover and read all scannable files under `root`
///
/// Fails only when `root` itself is not a readable directory. Unreadable
/// entries below it are logged and skipped.
pub fn discover_files(root: &Path, config: &WorkspaceConfig) -> ScoutResult<Vec<SourceFile>> {
    if !root.is_dir() {
        return Err(ScoutError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("not a directory: {}", root.display()),
        )));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            if e.depth() == 0 || !e.file_type().is_dir() {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !config.ignore_dirs.iter().any(|ignored| *ignored == name)
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Walk error: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = relative_path(root, entry.path());
        if ScanLanguage::from_path(&relative).is_none() {
            continue;
        }

        match std::fs::read_to_string(entry.path()) {
            Ok(content) => files.push(SourceFile::new(relative, content)),
            Err(e) => tracing::warn!("Skipping unreadable file {}: {}", relative, e),
        }
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!("Discovered {} files under {}", files.len(), root.display());
    Ok(files)
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

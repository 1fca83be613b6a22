//! Document Discovery
//!
//! Finds the markdown files whose diagrams get checked.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions treated as documentation
pub const DOC_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Check if file has a documentation extension
fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| DOC_EXTENSIONS.contains(&ext))
}

/// Check if a directory entry should be walked (for `WalkDir::filter_entry`).
/// Dot-prefixed files and directories below the root are left out.
fn is_not_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() == 0
        || !entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
}

/// Find every `.md` / `.mdx` file under `root`, in a stable order.
///
/// Hidden entries are skipped and symlinked files are kept. A missing root
/// is not an error and yields no documents. Traversal errors abort the scan.
pub fn find_documents(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        log::info!("Documentation root {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let mut documents = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(is_not_hidden)
    {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;

        // `path().is_file()` follows symlinks, `file_type()` does not
        if entry.path().is_file() && is_document(entry.path()) {
            documents.push(entry.into_path());
        }
    }

    log::debug!(
        "Found {} documents under {}",
        documents.len(),
        root.display()
    );

    Ok(documents)
}

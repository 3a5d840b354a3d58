//! Mapping of request targets onto the served directory tree.

use std::path::PathBuf;
use tokio::fs;

/// A request target that landed on a regular file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Full path handed to open
    pub path: PathBuf,
    /// Size in bytes at lookup time
    pub len: u64,
}

/// Outcome of resolving a request target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    File(ResolvedFile),
    NotFound,
}

/// Resolves `target` against the served root.
///
/// The candidate path is the verbatim concatenation of root and target;
/// the target is not normalized or decoded before the lookup. A missing
/// path comes back as `NotFound`, and so does anything that is not a
/// regular file, directories included. The metadata is looked up fresh
/// on every call, never cached.
pub async fn resolve(root: &str, target: &str) -> Resolution {
    let path = PathBuf::from(format!("{root}{target}"));

    match fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => Resolution::File(ResolvedFile {
            path,
            len: meta.len(),
        }),
        _ => Resolution::NotFound,
    }
}

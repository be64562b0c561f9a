//! Save-freshness heuristic used as a warning gate before completion.
//!
//! Checks whether the tracked file, or any same-stem sibling in its
//! directory (exports, layered saves, sidecars), was modified within the
//! given window. This is a hint for the operator, never a hard gate: scan
//! errors count as fresh so a permission problem cannot block completion.

use std::path::Path;
use std::time::{Duration, SystemTime};

/// Default freshness window in seconds.
pub const DEFAULT_WINDOW_SECS: u64 = 60;

/// Returns true when `path` or a same-stem sibling was modified within
/// `window_secs`. A missing file is stale; unreadable metadata is fresh.
pub fn is_recently_modified(path: &Path, window_secs: u64) -> bool {
    if !path.exists() {
        return false;
    }
    let window = Duration::from_secs(window_secs);
    let now = SystemTime::now();

    let mut candidates = vec![path.to_path_buf()];
    if let (Some(dir), Some(stem)) = (path.parent(), path.file_stem()) {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let sibling = entry.path();
                if sibling != path && sibling.is_file() && sibling.file_stem() == Some(stem) {
                    candidates.push(sibling);
                }
            }
        } else {
            // Directory scan failed; do not raise a false warning.
            return true;
        }
    }

    for candidate in candidates {
        match candidate.metadata().and_then(|meta| meta.modified()) {
            Ok(modified) => {
                if now.duration_since(modified).map(|age| age <= window).unwrap_or(true) {
                    return true;
                }
            }
            Err(_) => continue,
        }
    }
    false
}

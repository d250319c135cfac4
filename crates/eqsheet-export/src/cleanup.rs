use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use tracing::warn;
use uuid::Uuid;

use eqsheet_core::paths;

/// Delete the `.aux`/`.log`/`.out` files the LaTeX engine leaves in `dir`.
///
/// Best effort: files that are already gone are ignored, other failures
/// are logged and skipped. Returns how many files were removed.
pub fn remove_auxiliary_files(dir: &Path) -> usize {
    let mut removed = 0;
    for path in paths::auxiliary_files(dir) {
        match std::fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "could not remove auxiliary file"),
        }
    }
    removed
}

/// Keep the `keep` most recently modified run directories under
/// `work_root` and delete the rest. Only directories named by a run id are
/// considered. Returns how many were removed.
pub fn prune_runs(work_root: &Path, keep: usize) -> std::io::Result<usize> {
    let mut runs = Vec::new();
    for entry in std::fs::read_dir(work_root)? {
        let entry = entry?;
        let is_run = entry
            .file_name()
            .to_str()
            .is_some_and(|name| Uuid::parse_str(name).is_ok());
        if !is_run {
            continue;
        }
        let meta = entry.metadata()?;
        if !meta.is_dir() {
            continue;
        }
        let modified = meta.modified().unwrap_or(SystemTime::UNIX_EPOCH);
        runs.push((modified, entry.path()));
    }

    if runs.len() <= keep {
        return Ok(0);
    }

    // Newest first.
    runs.sort_by(|a, b| b.cmp(a));

    let mut removed = 0;
    for (_, path) in runs.into_iter().skip(keep) {
        match std::fs::remove_dir_all(&path) {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!(path = %path.display(), error = %e, "could not remove old run"),
        }
    }
    Ok(removed)
}

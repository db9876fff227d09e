//! `--watch` mode (spec §6): re-run generation when a resolved input file
//! changes, using `notify`. A scratch directory used while watching is
//! bound to a guard that removes it on drop, so interrupted watches still
//! clean up (spec §5).

use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};

pub struct ScratchDirGuard {
    dir: tempfile::TempDir,
}

impl ScratchDirGuard {
    pub fn new() -> std::io::Result<Self> {
        Ok(ScratchDirGuard {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Blocks the calling thread, invoking `on_change` every time a watched
/// path is modified. Returns only on a watcher error.
pub fn watch_and_rerun(
    paths: &[std::path::PathBuf],
    mut on_change: impl FnMut(),
) -> notify::Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx)?;
    for path in paths {
        watcher.watch(path, RecursiveMode::NonRecursive)?;
    }

    loop {
        match rx.recv_timeout(Duration::from_secs(3600)) {
            Ok(Ok(event)) if event.kind.is_modify() || event.kind.is_create() => {
                on_change();
            }
            Ok(Ok(_)) => {}
            Ok(Err(err)) => return Err(err),
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scratch_dir_guard_creates_and_removes_directory_on_drop() {
        let path;
        {
            let guard = ScratchDirGuard::new().unwrap();
            path = guard.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }
}

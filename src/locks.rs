use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

/// Per-path mutual exclusion for the validate-and-stamp sequence.
///
/// The validation core itself takes no locks: two concurrent runs on one
/// path could both see "not in use" before either stamps. Callers that run
/// validations in parallel go through here, keyed by the normalized path.
#[derive(Debug, Default)]
pub(crate) struct PathLocks {
    inner: Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>,
}

impl PathLocks {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Run `f` while holding the lock for `path`. Blocks the calling thread.
    pub(crate) fn with_lock<T>(&self, path: &Path, f: impl FnOnce() -> T) -> T {
        let entry = {
            let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            // Nobody else holds these entries any more.
            map.retain(|_, lock| Arc::strong_count(lock) > 1);
            Arc::clone(map.entry(path.to_path_buf()).or_default())
        };
        let _guard = entry.lock().unwrap_or_else(PoisonError::into_inner);
        f()
    }

    /// Number of paths with a validation in flight or waiting.
    #[cfg(test)]
    pub(crate) fn tracked(&self) -> usize {
        let map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        map.values().filter(|lock| Arc::strong_count(lock) > 1).count()
    }
}

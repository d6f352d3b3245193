use crate::error::{Error, Result};
use crate::handle::ReplayHandle;
use parking_lot::Mutex;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The registry of journals currently open for replay.
///
/// A single mutex guards the map. It is held for map access only; opening and
/// closing the underlying files happens outside of it.
pub(crate) struct HandleMap {
  // Map JournalName -> Replay Handle
  inner: Mutex<HashMap<PathBuf, Arc<ReplayHandle>>>,
}

impl HandleMap {
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(HashMap::new()),
    }
  }

  /// Registers a handle built by `open`, failing with `Busy` if the name is taken.
  ///
  /// This uses a double-checked pattern: the cheap check rejects an obvious
  /// conflict before any I/O, and the insert re-checks under the lock in case
  /// another thread registered the name while `open` was running.
  pub fn register<F>(&self, name: &Path, open: F) -> Result<()>
  where
    F: FnOnce() -> Result<ReplayHandle>,
  {
    // 1. Optimistic check
    if self.contains(name) {
      return Err(Error::Busy(name.to_path_buf()));
    }

    // 2. I/O without the lock
    let handle = open()?;

    // 3. Insert (re-checked)
    let mut map = self.inner.lock();
    match map.entry(name.to_path_buf()) {
      Entry::Occupied(_) => Err(Error::Busy(name.to_path_buf())),
      Entry::Vacant(slot) => {
        slot.insert(Arc::new(handle));
        Ok(())
      }
    }
  }

  /// Gets a handle to an open journal, or None if it isn't open.
  pub fn get(&self, name: &Path) -> Option<Arc<ReplayHandle>> {
    let map = self.inner.lock();
    map.get(name).cloned()
  }

  /// Removes the entry. The caller drops it after the lock is released.
  pub fn remove(&self, name: &Path) -> Option<Arc<ReplayHandle>> {
    let mut map = self.inner.lock();
    map.remove(name)
  }

  /// Helper to check existence without cloning the Arc.
  pub fn contains(&self, name: &Path) -> bool {
    let map = self.inner.lock();
    map.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.inner.lock().len()
  }
}

mod handle_map;

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::{JournalOptions, SyncMode};
use crate::error::{Error, Result};
use crate::handle::ReplayHandle;
use crate::journal::handle_map::HandleMap;
use crate::util;

struct JournalState {
  options: JournalOptions,

  // Journals currently open for replay.
  handles: HandleMap,
}

/// The main entry point: a registry of named, line-oriented journals.
///
/// A journal is either appended to (stateless) or replayed (tracked here
/// between `open` and `close`), never both at once.
/// Thread-safe and cloneable; clones share one registry.
#[derive(Clone)]
pub struct Journal {
  inner: Arc<JournalState>,
}

impl Journal {
  pub fn new(options: JournalOptions) -> Result<Self> {
    options.validate()?;

    Ok(Self {
      inner: Arc::new(JournalState {
        options,
        handles: HandleMap::new(),
      }),
    })
  }

  pub fn options(&self) -> &JournalOptions {
    &self.inner.options
  }

  // --- Write Operations ---

  /// Appends one record to the journal, creating the file if needed.
  ///
  /// A newline is added unless `content` already ends with one. The record is
  /// written with a single append and the file is closed before returning.
  ///
  /// Fails with `Error::Busy` while the journal is open for replay.
  ///
  /// Appends to the same journal from several threads are not ordered against
  /// each other here; each one relies on the OS appending its write whole.
  pub fn append(&self, name: impl AsRef<Path>, content: &str) -> Result<()> {
    let name = name.as_ref();
    if self.inner.handles.contains(name) {
      return Err(Error::Busy(name.to_path_buf()));
    }

    let record = util::normalize_record(content);
    let mut file = util::open_for_append(name, &self.inner.options)?;
    file.write_all(record.as_bytes())?;

    if self.inner.options.sync_mode == SyncMode::Strict {
      file.sync_data()?;
    }

    trace!(target: "linejournal", "Appended {} bytes to {:?}", record.len(), name);
    Ok(())
  }

  // --- Read Operations ---

  /// Opens a journal for replay.
  ///
  /// Fails with `Error::Busy` if it is already open, or with `Error::Io` if
  /// the file cannot be opened. The existing handle is left untouched on failure.
  pub fn open(&self, name: impl AsRef<Path>) -> Result<()> {
    let name = name.as_ref();
    let options = &self.inner.options;
    self.inner.handles.register(name, || ReplayHandle::open(name, options))?;

    debug!(target: "linejournal", "Opened {:?} for replay", name);
    Ok(())
  }

  /// Replays the next line of an open journal into `visit`.
  ///
  /// Exactly one line is consumed per call, with its terminator stripped.
  /// Once every line has been consumed this returns `Error::EndOfJournal`,
  /// and keeps returning it until the journal is closed. Whatever `visit`
  /// returns is passed back unchanged.
  ///
  /// The registry lock is released before reading, so different journals
  /// replay in parallel.
  pub fn replay<F, E>(&self, name: impl AsRef<Path>, visit: F) -> std::result::Result<(), E>
  where
    F: FnOnce(&str) -> std::result::Result<(), E>,
    E: From<Error>,
  {
    let name = name.as_ref();
    let handle = self
      .inner
      .handles
      .get(name)
      .ok_or_else(|| Error::NotFound(name.to_path_buf()))?;

    let line = handle.next_line()?.ok_or(Error::EndOfJournal)?;
    visit(&line)
  }

  /// Closes a journal opened for replay, releasing its file.
  ///
  /// Fails with `Error::NotFound` if it is not open. Closing twice is an error.
  ///
  /// The descriptor is released by drop, once any replay still running on
  /// another thread returns. An error from closing the descriptor itself
  /// cannot be observed and is not reported.
  pub fn close(&self, name: impl AsRef<Path>) -> Result<()> {
    let name = name.as_ref();
    let handle = self
      .inner
      .handles
      .remove(name)
      .ok_or_else(|| Error::NotFound(name.to_path_buf()))?;

    debug!(target: "linejournal", "Closed {:?} after {} lines", name, handle.lines_read());
    Ok(())
  }

  // --- Introspection ---

  /// Returns true while the journal is open for replay.
  pub fn is_open(&self, name: impl AsRef<Path>) -> bool {
    self.inner.handles.contains(name.as_ref())
  }

  /// Number of journals currently open for replay.
  pub fn open_count(&self) -> usize {
    self.inner.handles.len()
  }
}

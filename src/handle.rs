use parking_lot::Mutex;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::config::JournalOptions;
use crate::error::Result;
use crate::line::LineCursor;

/// An in-progress sequential read of one journal.
///
/// Owns the file descriptor from `open` until the last reference is dropped,
/// which happens when the registry entry is closed and no replay is running.
pub(crate) struct ReplayHandle {
  path: PathBuf,
  // Held only while decoding a single line.
  cursor: Mutex<LineCursor<BufReader<File>>>,
  /// Mirrors the cursor's count so it can be read without waiting on a replay.
  lines_read: AtomicU64,
}

impl ReplayHandle {
  pub fn open(path: &Path, options: &JournalOptions) -> Result<Self> {
    let file = File::open(path)?;
    let reader = BufReader::with_capacity(options.read_buffer_size, file);

    Ok(Self {
      path: path.to_path_buf(),
      cursor: Mutex::new(LineCursor::new(reader, options.max_line_len)),
      lines_read: AtomicU64::new(0),
    })
  }

  /// Advances the cursor by one line. `Ok(None)` at end of journal.
  pub fn next_line(&self) -> Result<Option<String>> {
    let mut cursor = self.cursor.lock();
    let line = cursor.next_line()?;
    if line.is_some() {
      let count = cursor.lines_read();
      self.lines_read.store(count, Ordering::Relaxed);
      trace!(target: "linejournal", "Replayed line {} of {:?}", count, self.path);
    }
    Ok(line)
  }

  /// Lines handed out so far. Never blocks on the cursor.
  pub fn lines_read(&self) -> u64 {
    self.lines_read.load(Ordering::Relaxed)
  }
}

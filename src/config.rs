use crate::error::{Error, Result};

/// Defines whether an append is flushed to the physical disk before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
  /// Call `fdatasync` after every append.
  /// Safest, but highest latency.
  Strict,

  /// Never call `fsync`. The record is handed to the OS and the
  /// background flush takes care of the rest.
  Async,
}

#[derive(Debug, Clone)]
pub struct JournalOptions {
  /// Maximum length in bytes of a single record, terminator excluded.
  /// Longer lines fail replay with `Error::LineTooLong`.
  /// Default: 65535 (a record plus its newline fits in 64 KB).
  pub max_line_len: usize,

  /// Size of the buffer used while replaying a journal.
  /// Default: 4 KB.
  pub read_buffer_size: usize,

  pub sync_mode: SyncMode,

  /// Permission bits for journal files created by `append`.
  /// Only honoured on Unix.
  /// Default: 0o640.
  pub file_mode: u32,
}

impl Default for JournalOptions {
  fn default() -> Self {
    Self {
      max_line_len: 64 * 1024 - 1,
      read_buffer_size: 4 * 1024, // 4 KB
      sync_mode: SyncMode::Async,
      file_mode: 0o640,
    }
  }
}

impl JournalOptions {
  pub fn new() -> Self {
    Self::default()
  }

  pub(crate) fn validate(&self) -> Result<()> {
    if self.max_line_len == 0 {
      return Err(Error::Config("max_line_len must be greater than zero".into()));
    }
    if self.read_buffer_size == 0 {
      return Err(Error::Config("read_buffer_size must be greater than zero".into()));
    }
    Ok(())
  }
}

use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
  #[error("I/O Error: {0}")]
  Io(#[from] io::Error),

  /// The journal is engaged in a conflicting mode (open for replay).
  #[error("Journal busy: {}", .0.display())]
  Busy(PathBuf),

  /// No replay handle is registered under this name.
  #[error("Journal not open: {}", .0.display())]
  NotFound(PathBuf),

  #[error("Line exceeds maximum length of {limit} bytes")]
  LineTooLong { limit: usize },

  /// Every line of the journal has been replayed. Not a failure.
  #[error("End of journal")]
  EndOfJournal,

  #[error("Invalid UTF-8 in journal line: {0}")]
  InvalidUtf8(#[from] Utf8Error),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl Error {
  /// Returns true for the replay-loop terminator.
  pub fn is_end_of_journal(&self) -> bool {
    matches!(self, Error::EndOfJournal)
  }
}

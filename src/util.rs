use crate::config::JournalOptions;
use std::borrow::Cow;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

/// Ensures the record ends with exactly one newline.
/// Content that already ends with one is passed through untouched.
pub fn normalize_record(content: &str) -> Cow<'_, str> {
  if content.ends_with('\n') {
    Cow::Borrowed(content)
  } else {
    let mut record = String::with_capacity(content.len() + 1);
    record.push_str(content);
    record.push('\n');
    Cow::Owned(record)
  }
}

/// Opens a journal file for appending, creating it if missing.
pub fn open_for_append(path: &Path, options: &JournalOptions) -> io::Result<File> {
  let mut open = OpenOptions::new();
  open.read(true).create(true).append(true);

  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    open.mode(options.file_mode);
  }
  #[cfg(not(unix))]
  let _ = options;

  open.open(path)
}

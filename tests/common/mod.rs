#![allow(dead_code)]

use linejournal::{Error, Journal, JournalOptions};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
  pub journal: Journal,
  // The TempDir guard must be kept alive to prevent premature deletion of the directory.
  pub _dir: TempDir,
  pub root: PathBuf,
}

impl TestEnv {
  pub fn new(options: JournalOptions) -> Self {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();

    let journal = Journal::new(options).unwrap();

    Self { journal, _dir: dir, root }
  }

  pub fn with_default() -> Self {
    Self::new(JournalOptions::default())
  }

  /// Path of a journal inside this environment's directory.
  pub fn path(&self, name: &str) -> PathBuf {
    self.root.join(name)
  }
}

/// Drives replay until `EndOfJournal`, collecting every line.
/// The journal must already be open.
pub fn drain(journal: &Journal, name: &Path) -> linejournal::Result<Vec<String>> {
  let mut lines = Vec::new();
  loop {
    match journal.replay(name, |line| {
      lines.push(line.to_string());
      Ok(())
    }) {
      Ok(()) => continue,
      Err(Error::EndOfJournal) => return Ok(lines),
      Err(e) => return Err(e),
    }
  }
}

/// Checks that the open journal replays exactly "0".."count" and then ends.
pub fn replay_exact(journal: &Journal, name: &Path, count: usize) -> Result<(), String> {
  let mut i = 0;
  loop {
    let res = journal.replay(name, |line| {
      let expected = i.to_string();
      if line != expected {
        return Err(Fault::Mismatch(format!("not equal: {} {}", expected, line)));
      }
      Ok(())
    });
    match res {
      Ok(()) => i += 1,
      Err(Fault::Journal(Error::EndOfJournal)) => break,
      Err(Fault::Journal(e)) => return Err(e.to_string()),
      Err(Fault::Mismatch(msg)) => return Err(msg),
    }
    if i > count {
      return Err("ran too many times".into());
    }
  }

  if i != count {
    return Err(format!("invalid count: {} {}", i, count));
  }
  Ok(())
}

/// A caller-side error type for visitors, wrapping journal errors.
#[derive(Debug)]
pub enum Fault {
  Journal(Error),
  Mismatch(String),
}

impl From<Error> for Fault {
  fn from(e: Error) -> Self {
    Fault::Journal(e)
  }
}

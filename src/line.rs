use std::io::{BufRead, Read};

use tracing::warn;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CursorState {
  Reading,
  Exhausted,
  TooLong,
}

/// A forward-only decoder yielding one text line per call.
///
/// Lines end at `\n`; one `\r` at the end of a line is dropped as well, with
/// or without the `\n` after it. A trailing line without a terminator is still
/// yielded. Reads are bounded by `max_line_len`, so an oversized line is
/// reported without buffering it whole.
pub(crate) struct LineCursor<R> {
  reader: R,
  max_line_len: usize,
  /// Bytes of the line being decoded. Survives a failed read so the next
  /// call resumes the same line instead of skipping its head.
  buf: Vec<u8>,
  state: CursorState,
  lines_read: u64,
}

impl<R: BufRead> LineCursor<R> {
  pub fn new(reader: R, max_line_len: usize) -> Self {
    Self {
      reader,
      max_line_len,
      buf: Vec::new(),
      state: CursorState::Reading,
      lines_read: 0,
    }
  }

  /// Number of lines yielded so far.
  pub fn lines_read(&self) -> u64 {
    self.lines_read
  }

  /// Decodes the next line. Returns `Ok(None)` once the data is exhausted,
  /// and keeps doing so on every later call.
  pub fn next_line(&mut self) -> Result<Option<String>> {
    match self.state {
      CursorState::Exhausted => return Ok(None),
      CursorState::TooLong => return Err(Error::LineTooLong { limit: self.max_line_len }),
      CursorState::Reading => {}
    }

    // Room for the content, an optional '\r' and the '\n'.
    let budget = (self.max_line_len as u64)
      .saturating_add(2)
      .saturating_sub(self.buf.len() as u64);
    (&mut self.reader).take(budget).read_until(b'\n', &mut self.buf)?;

    if self.buf.is_empty() {
      self.state = CursorState::Exhausted;
      return Ok(None);
    }

    let mut end = self.buf.len();
    if self.buf[end - 1] == b'\n' {
      end -= 1;
    }
    // Dropped on an unterminated tail too.
    if end > 0 && self.buf[end - 1] == b'\r' {
      end -= 1;
    }

    if end > self.max_line_len {
      warn!(target: "linejournal", "Line {} exceeds {} bytes, replay stopped", self.lines_read + 1, self.max_line_len);
      self.state = CursorState::TooLong;
      self.buf.clear();
      return Err(Error::LineTooLong { limit: self.max_line_len });
    }

    let decoded = std::str::from_utf8(&self.buf[..end]).map(str::to_owned);
    self.buf.clear();
    self.lines_read += 1;
    Ok(Some(decoded?))
  }
}

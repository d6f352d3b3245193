//! # linejournal
//!
//! `linejournal` is a registry of named, append-only, line-oriented journals.
//! A journal is a plain text file identified by its path; each record is a
//! single line.
//!
//! ## Key Features
//!
//! * **Atomic Appends**: Each record is written with a single append and the file is closed right after.
//! * **Stepwise Replay**: Open a journal and pull records back one at a time, in write order.
//! * **Mode Exclusion**: A journal open for replay refuses appends and a second open.
//! * **Bounded Decoding**: Oversized lines are reported, never truncated.
//!
//! ## Example
//!
//! ```no_run
//! use linejournal::{Error, Journal, JournalOptions};
//!
//! # fn main() -> linejournal::Result<()> {
//! let journal = Journal::new(JournalOptions::default())?;
//!
//! journal.append("/var/lib/app/ops.journal", "set x=1")?;
//! journal.append("/var/lib/app/ops.journal", "set y=2")?;
//!
//! journal.open("/var/lib/app/ops.journal")?;
//! loop {
//!   match journal.replay("/var/lib/app/ops.journal", |line| {
//!     println!("{}", line);
//!     Ok(())
//!   }) {
//!     Ok(()) => continue,
//!     Err(Error::EndOfJournal) => break,
//!     Err(e) => return Err(e),
//!   }
//! }
//! journal.close("/var/lib/app/ops.journal")?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod handle;
mod journal;
mod line;
mod util;

// Re-exports for the flat public API
pub use config::{JournalOptions, SyncMode};
pub use error::{Error, Result};
pub use journal::Journal;

//! Card request log
//!
//! Every card created through the wizard is recorded in an append-only log
//! in line-delimited JSON (JSONL). The log is the only place a created card
//! ends up; the card list itself never changes.
//!
//! - `RequestEntry`: one submitted request with its timestamp, a few
//!   headline fields and the full form.
//! - `RequestLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::RequestEntry;
pub use logger::RequestLogger;

//! BibTeX parsing and formatting
//!
//! A nom-based BibTeX codec used by the tesi reference manager. The parser
//! accepts the standard constructs found in real-world .bib files:
//! - @string definitions with substitution
//! - @preamble declarations
//! - @comment sections and % line comments
//! - Braced and quoted field values, including nested braces
//! - String concatenation with #
//!
//! Malformed entries are collected as issues rather than aborting the whole
//! file, so one broken entry does not discard an otherwise usable import.

mod entry;
mod formatter;
pub mod parser;

pub use entry::{Entry, EntryType, Field};
pub use formatter::{format_entries, format_entry};
pub use parser::{parse, parse_entry, ParseError, ParseIssue, ParseOutcome};

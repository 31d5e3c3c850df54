//! Core transformation from Longman Dictionary entry pages to Anki flashcard rows.
//!
//! Provides:
//! - Audio reference extraction and `[sound:...]` rewriting
//! - Advertisement (script) stripping
//! - Entry segmentation and header extraction
//! - Sense segmentation with keyword and cloze markup
//! - Tab-delimited output rows
//!
//! Nothing in this crate touches the network or the file system.

pub mod audio;
pub mod cleaner;
pub mod entry;
pub mod error;
pub mod sense;
pub mod transform;
pub mod types;

pub use audio::{rewrite, AudioScanner};
pub use cleaner::strip_ads;
pub use entry::{page_headword, parse_header, segment_entries, EntryVerdict, SkipReason};
pub use error::{ParseError, Result};
pub use sense::{apply_markup, segment_senses, ClozeCounter};
pub use transform::{transform_page, PageOutcome};
pub use types::{AudioReference, HeaderInfo, OutputRow, SenseRecord};

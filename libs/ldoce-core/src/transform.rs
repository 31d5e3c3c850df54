//! Page-level transformation: one fetched entry page in, flashcard rows out.
//!
//! Audio rewriting happens before this step since it needs the downloaded
//! file names; everything after it is pure text work.

use scraper::Html;

use crate::cleaner::strip_ads;
use crate::entry::{page_headword, parse_header, segment_entries, sense_markups, EntryVerdict, SkipReason};
use crate::error::Result;
use crate::sense::{apply_markup, segment_senses, ClozeCounter};
use crate::types::{OutputRow, SenseRecord};

/// Result of transforming one page.
#[derive(Debug, Clone, Default)]
pub struct PageOutcome {
    /// One row per accepted entry, in document order.
    pub rows: Vec<OutputRow>,
    /// Entries that were not turned into rows.
    pub skipped: Vec<SkipReason>,
    /// Number of script spans removed before parsing.
    pub ads_removed: usize,
}

/// Transform a page whose audio references are already rewritten.
pub fn transform_page(markup: &str) -> Result<PageOutcome> {
    let (cleaned, ads_removed) = strip_ads(markup);
    let document = Html::parse_document(&cleaned);

    let mut outcome = PageOutcome {
        ads_removed,
        ..PageOutcome::default()
    };
    let mut headword: Option<String> = None;
    let mut sequence = 0u32;

    for verdict in segment_entries(&document) {
        let entry = match verdict {
            EntryVerdict::Accepted(entry) => entry,
            EntryVerdict::Skipped(reason) => {
                outcome.skipped.push(reason);
                continue;
            }
        };

        let word = match &headword {
            Some(word) => word.clone(),
            None => {
                let word = page_headword(&document)?;
                headword = Some(word.clone());
                word
            }
        };

        sequence += 1;
        let header = parse_header(entry, &word, sequence);

        let mut cloze = ClozeCounter::new();
        let senses: Vec<SenseRecord> = sense_markups(entry)
            .iter()
            .filter_map(|raw| segment_senses(raw).into_iter().next())
            .map(|meaning| apply_markup(&meaning, &header.headword, &mut cloze))
            .collect();

        outcome.rows.push(OutputRow { senses, header });
    }

    Ok(outcome)
}

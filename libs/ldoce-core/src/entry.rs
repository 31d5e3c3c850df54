//! Entry segmentation and header extraction.
//!
//! An entry page lists one `span.dictentry` per dictionary entry. Entries from
//! dictionaries other than LDOCE (the Business Dictionary in practice) are
//! skipped, as are entries with no text.

use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;

use crate::error::{ParseError, Result};
use crate::sense::wrap_keyword;
use crate::types::HeaderInfo;

/// Intro phrase marking an entry from the main dictionary.
pub const LDOCE_INTRO: &str = "From Longman Dictionary of Contemporary English";

/// Why an entry was not turned into a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry contains only whitespace.
    Empty,
    /// The entry belongs to another dictionary; holds its intro text.
    OtherDictionary(String),
}

/// Classification of one `span.dictentry`.
#[derive(Debug, Clone)]
pub enum EntryVerdict<'a> {
    Accepted(ElementRef<'a>),
    Skipped(SkipReason),
}

struct Selectors {
    dictentry: Selector,
    intro: Selector,
    pagetitle: Selector,
    pron: Selector,
    amevarpron: Selector,
    level: Selector,
    pos: Selector,
    gram: Selector,
    sense: Selector,
}

static SELECTORS: OnceLock<Selectors> = OnceLock::new();

fn selectors() -> &'static Selectors {
    SELECTORS.get_or_init(|| {
        let parse = |css: &str| Selector::parse(css).expect("Invalid entry selector");
        Selectors {
            dictentry: parse("span.dictentry"),
            intro: parse("span.dictionary_intro.span"),
            pagetitle: parse("h1.pagetitle"),
            pron: parse("span.PRON"),
            amevarpron: parse("span.AMEVARPRON"),
            level: parse("span.tooltip.LEVEL"),
            pos: parse("span.POS"),
            gram: parse("span.GRAM"),
            sense: parse("span.Sense"),
        }
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Trimmed text of the first descendant matching `selector`, or empty.
fn first_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|el| element_text(el).trim().to_string())
        .unwrap_or_default()
}

/// Classify every `span.dictentry` on the page, in document order.
pub fn segment_entries(document: &Html) -> Vec<EntryVerdict<'_>> {
    let sel = selectors();
    document
        .select(&sel.dictentry)
        .map(|entry| {
            if element_text(entry).trim().is_empty() {
                return EntryVerdict::Skipped(SkipReason::Empty);
            }
            match entry.select(&sel.intro).next() {
                None => EntryVerdict::Accepted(entry),
                Some(intro) => {
                    let text = element_text(intro);
                    if text.contains(LDOCE_INTRO) {
                        EntryVerdict::Accepted(entry)
                    } else {
                        EntryVerdict::Skipped(SkipReason::OtherDictionary(text.trim().to_string()))
                    }
                }
            }
        })
        .collect()
}

/// Plain headword from the page title.
pub fn page_headword(document: &Html) -> Result<String> {
    document
        .select(&selectors().pagetitle)
        .next()
        .map(|title| element_text(title).trim().to_string())
        .ok_or(ParseError::MissingHeadword)
}

/// Extract header metadata of one accepted entry.
pub fn parse_header(entry: ElementRef<'_>, headword: &str, sequence: u32) -> HeaderInfo {
    let sel = selectors();
    let headword = wrap_keyword(headword);

    // "$" marks the American variant in the pronunciation text.
    let american_ipa = first_text(entry, &sel.amevarpron)
        .replace('$', "")
        .trim_start()
        .to_string();

    HeaderInfo {
        id: format!("{}_{}", headword, sequence),
        headword,
        sequence,
        british_ipa: first_text(entry, &sel.pron),
        american_ipa,
        frequency: first_text(entry, &sel.level),
        part_of_speech: first_text(entry, &sel.pos),
        grammar: first_text(entry, &sel.gram),
    }
}

/// Outer markup of every `span.Sense` in the entry, nested senses included.
pub fn sense_markups(entry: ElementRef<'_>) -> Vec<String> {
    entry.select(&selectors().sense).map(|s| s.html()).collect()
}

//! Sense segmentation with keyword and cloze markup.
//!
//! Each `span.Sense` is re-split textually on its opening tag and only the
//! first segment is kept, so a nested sub-sense is not repeated inside its
//! parent's text.

use regex::Regex;
use std::sync::OnceLock;

use crate::types::{SenseRecord, KEYWORD_CLOSE, KEYWORD_OPEN};

const SENSE_OPEN: &str = r#"<span class="Sense""#;
const DEF_OPEN: &str = r#"<span class="DEF">"#;
const DELIMITER: char = '֍';

static DEF_PATTERN: OnceLock<Regex> = OnceLock::new();

fn def_regex() -> &'static Regex {
    DEF_PATTERN.get_or_init(|| Regex::new(r#"<span class="DEF">(.+?)</span>"#).expect("Invalid definition regex pattern"))
}

/// Per-entry cloze numbering, starting at 1.
#[derive(Debug, Clone)]
pub struct ClozeCounter {
    next: u32,
}

impl Default for ClozeCounter {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl ClozeCounter {
    pub fn new() -> Self {
        Self::default()
    }

    fn take(&mut self) -> u32 {
        let index = self.next;
        self.next += 1;
        index
    }
}

/// Wrap a plain word in the keyword marker.
pub fn wrap_keyword(word: &str) -> String {
    format!("{}{}{}", KEYWORD_OPEN, word, KEYWORD_CLOSE)
}

/// Remove keyword markers from a wrapped word.
pub fn strip_keyword(word: &str) -> String {
    word.replace(KEYWORD_OPEN, "").replace(KEYWORD_CLOSE, "")
}

fn normalize_whitespace(raw: &str) -> String {
    raw.replace('\t', "  ").replace('\n', "").replace('\r', " ")
}

/// Split raw sense markup on sense opening tags, dropping the preamble.
///
/// The first returned segment is the sense's own markup.
pub fn segment_senses(raw: &str) -> Vec<String> {
    let marked = normalize_whitespace(raw).replace(SENSE_OPEN, &format!("{}{}", DELIMITER, SENSE_OPEN));
    marked
        .split(DELIMITER)
        .skip(1)
        .map(str::to_string)
        .collect()
}

/// Apply keyword markup and, when a definition is present, a cloze deletion.
pub fn apply_markup(sense: &str, headword: &str, cloze: &mut ClozeCounter) -> SenseRecord {
    let plain = strip_keyword(headword);
    let mut text = if plain.is_empty() {
        sense.to_string()
    } else {
        sense.replace(&plain, &wrap_keyword(&plain))
    };

    let mut applied = None;
    if text.contains(DEF_OPEN) {
        let target = def_regex().find(&text).map(|m| m.as_str().to_string());
        if let Some(target) = target {
            let index = cloze.take();
            text = text.replace(&target, &format!("{{{{c{}::{}}}}}", index, target));
            applied = Some(index);
        }
    }

    SenseRecord { text, cloze: applied }
}

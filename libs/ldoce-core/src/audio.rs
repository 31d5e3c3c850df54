//! Audio reference extraction and sound-tag rewriting.

use regex::Regex;

use crate::error::{ParseError, Result};
use crate::types::AudioReference;

/// Default CDN prefix for pronunciation and example audio.
pub const DEFAULT_AUDIO_BASE: &str = "https://d27ucmmhxk51xv.cloudfront.net/media/english/";

/// Finds `data-src-mp3` audio URLs under a fixed CDN prefix.
#[derive(Debug, Clone)]
pub struct AudioScanner {
    pattern: Regex,
}

impl AudioScanner {
    /// Build a scanner for URLs of the form `<base><folder>/<path>.mp3`.
    ///
    /// A query string after `.mp3` is left out of the match.
    pub fn new(base: &str) -> Result<Self> {
        let source = format!(r#"data-src-mp3="({}\w+/[^"]+?\.mp3)"#, regex::escape(base));
        let pattern = Regex::new(&source).map_err(|source| ParseError::AudioPattern {
            base: base.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// All audio references in document order. Duplicates are kept.
    pub fn extract(&self, markup: &str) -> Vec<AudioReference> {
        self.pattern
            .captures_iter(markup)
            .filter_map(|caps| caps.get(1))
            .map(|m| AudioReference::new(m.as_str()))
            .collect()
    }
}

/// Replace every occurrence of each reference URL with its `[sound:...]` tag.
pub fn rewrite(markup: &str, references: &[AudioReference]) -> String {
    references
        .iter()
        .fold(markup.to_string(), |html, reference| {
            html.replace(&reference.url, &reference.sound_tag())
        })
}

//! Run configuration.

use std::path::PathBuf;

use ldoce_core::audio::DEFAULT_AUDIO_BASE;

pub const DEFAULT_DICTIONARY_URL: &str = "https://www.ldoceonline.com/dictionary/";

/// Paths and endpoints for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Text file with one word or phrase per line.
    pub wordlist_path: PathBuf,
    /// Flashcard file; truncated at the start of a run.
    pub output_path: PathBuf,
    /// Folder for downloaded audio. Point it at the Anki `collection.media`
    /// folder to skip importing media by hand.
    pub audio_dir: PathBuf,
    /// Lookup prefix; the word is appended verbatim.
    pub dictionary_url: String,
    /// CDN prefix audio references must start with.
    pub audio_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wordlist_path: PathBuf::from("wordlist.txt"),
            output_path: PathBuf::from("anki_output.txt"),
            audio_dir: PathBuf::from("collection.media"),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
            audio_url: DEFAULT_AUDIO_BASE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized env vars (all optional):
    /// - LDOCE_WORDLIST: word list path
    /// - LDOCE_OUTPUT: output file path
    /// - LDOCE_AUDIO_DIR: audio folder
    /// - LDOCE_DICTIONARY_URL: lookup prefix
    /// - LDOCE_AUDIO_URL: audio CDN prefix
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            wordlist_path: lookup("LDOCE_WORDLIST").map(PathBuf::from).unwrap_or(defaults.wordlist_path),
            output_path: lookup("LDOCE_OUTPUT").map(PathBuf::from).unwrap_or(defaults.output_path),
            audio_dir: lookup("LDOCE_AUDIO_DIR").map(PathBuf::from).unwrap_or(defaults.audio_dir),
            dictionary_url: lookup("LDOCE_DICTIONARY_URL").unwrap_or(defaults.dictionary_url),
            audio_url: lookup("LDOCE_AUDIO_URL").unwrap_or(defaults.audio_url),
        }
    }
}

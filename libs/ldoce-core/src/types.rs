//! Core types for the entry-to-flashcard transformation.

/// Opening tag of the keyword marker hidden by the card template.
pub const KEYWORD_OPEN: &str = "<gpskeyword>";
/// Closing tag of the keyword marker.
pub const KEYWORD_CLOSE: &str = "</gpskeyword>";

/// Field delimiter of an output row.
pub const FIELD_DELIMITER: &str = "\t";

/// Audio file referenced by an entry page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioReference {
    pub url: String,
    /// Final path segment of `url`, used as the local file name.
    pub filename: String,
}

impl AudioReference {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let filename = url.rsplit('/').next().unwrap_or_default().to_string();
        Self { url, filename }
    }

    /// Anki playback marker for this file.
    pub fn sound_tag(&self) -> String {
        format!("[sound:{}]", self.filename)
    }
}

/// Header metadata of one dictionary entry.
///
/// Optional fields are empty strings when the entry does not carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Wrapped headword joined with the sequence number. Display metadata only.
    pub id: String,
    /// Headword wrapped in the keyword marker.
    pub headword: String,
    pub sequence: u32,
    pub british_ipa: String,
    pub american_ipa: String,
    pub frequency: String,
    pub part_of_speech: String,
    pub grammar: String,
}

/// One sense of an entry with keyword and cloze markup applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenseRecord {
    pub text: String,
    /// Cloze index used for this sense, if a definition was found.
    pub cloze: Option<u32>,
}

/// One flashcard row: all senses of an entry plus its header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub senses: Vec<SenseRecord>,
    pub header: HeaderInfo,
}

impl OutputRow {
    /// Concatenated markup of all senses.
    pub fn sense_text(&self) -> String {
        self.senses.iter().map(|s| s.text.as_str()).collect()
    }

    /// Serialize as a tab-delimited line, without the trailing newline.
    ///
    /// Field values are not escaped.
    pub fn to_line(&self) -> String {
        let sequence = self.header.sequence.to_string();
        let sense_text = self.sense_text();
        [
            sense_text.as_str(),
            "",
            &self.header.id,
            &self.header.headword,
            &sequence,
            &self.header.british_ipa,
            &self.header.american_ipa,
            &self.header.frequency,
            &self.header.part_of_speech,
            &self.header.grammar,
        ]
        .join(FIELD_DELIMITER)
    }
}

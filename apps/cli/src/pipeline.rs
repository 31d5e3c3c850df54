//! Word-by-word pipeline: fetch, download audio, transform, append.

use chrono::{DateTime, Utc};
use ldoce_core::{rewrite, transform_page, AudioScanner, SkipReason};
use tokio::io::AsyncWriteExt;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::services::build_client;
use crate::services::fetcher::Fetcher;
use crate::services::media::MediaDownloader;

/// Counters reported at the end of a run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub words: usize,
    pub rows_written: usize,
    pub entries_skipped: usize,
    pub audio_downloaded: usize,
    pub audio_missing: usize,
}

impl RunSummary {
    fn new() -> Self {
        Self {
            started_at: Utc::now(),
            words: 0,
            rows_written: 0,
            entries_skipped: 0,
            audio_downloaded: 0,
            audio_missing: 0,
        }
    }
}

/// Words to look up: one per line, blank lines ignored.
pub fn words(content: &str) -> impl Iterator<Item = &str> {
    content.lines().filter(|line| {
        let blank = line.trim().is_empty();
        if blank {
            tracing::debug!("Skipping blank line in word list");
        }
        !blank
    })
}

/// Process every word of the word list in order.
///
/// The output file is truncated before the first word. Rows of a word are
/// appended only after its page and audio have been fetched; the first fatal
/// error stops the run, leaving the rows of earlier words in place.
pub async fn run_pipeline(config: &Config) -> Result<RunSummary> {
    let mut summary = RunSummary::new();

    let wordlist = tokio::fs::read_to_string(&config.wordlist_path)
        .await
        .map_err(AppError::io(&config.wordlist_path))?;

    let mut output = tokio::fs::File::create(&config.output_path)
        .await
        .map_err(AppError::io(&config.output_path))?;

    let client = build_client()?;
    let fetcher = Fetcher::new(client.clone(), config.dictionary_url.clone());
    let media = MediaDownloader::new(client, config.audio_dir.clone());
    let scanner = AudioScanner::new(&config.audio_url)?;

    for word in words(&wordlist) {
        tracing::info!(word, "Looking up");
        let html = fetcher.fetch_entry(word).await?;

        let references = scanner.extract(&html);
        tracing::debug!(word, count = references.len(), "Found audio files");
        let report = media.download_all(&references).await?;
        summary.audio_downloaded += report.downloaded;
        summary.audio_missing += report.missing.len();

        let html = rewrite(&html, &references);
        let outcome = transform_page(&html)?;
        if outcome.ads_removed > 0 {
            tracing::debug!(word, count = outcome.ads_removed, "Removed ads");
        }
        for reason in &outcome.skipped {
            match reason {
                SkipReason::Empty => tracing::info!(word, "Ignored empty dictionary entry"),
                SkipReason::OtherDictionary(intro) => {
                    tracing::info!(word, dictionary = %intro, "Ignored dictionary entry")
                }
            }
        }

        let mut lines = String::new();
        for row in &outcome.rows {
            lines.push_str(&row.to_line());
            lines.push('\n');
        }
        output
            .write_all(lines.as_bytes())
            .await
            .map_err(AppError::io(&config.output_path))?;
        output
            .flush()
            .await
            .map_err(AppError::io(&config.output_path))?;

        tracing::info!(word, entries = outcome.rows.len(), "Dictionary entries processed");
        summary.words += 1;
        summary.rows_written += outcome.rows.len();
        summary.entries_skipped += outcome.skipped.len();
    }

    Ok(summary)
}

//! Audio downloader.

use std::path::PathBuf;

use ldoce_core::AudioReference;
use reqwest::Client;

use crate::error::{AppError, Result};

/// Outcome of downloading one page's audio references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    pub downloaded: usize,
    /// URLs the server answered with an error status.
    pub missing: Vec<String>,
}

/// Saves audio files into the configured media folder.
pub struct MediaDownloader {
    client: Client,
    audio_dir: PathBuf,
}

impl MediaDownloader {
    pub fn new(client: Client, audio_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            audio_dir: audio_dir.into(),
        }
    }

    /// Download every reference in order, one at a time.
    ///
    /// A file the server reports as missing (any error status) is skipped.
    /// Transport and file system errors abort.
    pub async fn download_all(&self, references: &[AudioReference]) -> Result<DownloadReport> {
        let mut report = DownloadReport::default();
        if references.is_empty() {
            return Ok(report);
        }

        tokio::fs::create_dir_all(&self.audio_dir)
            .await
            .map_err(AppError::io(&self.audio_dir))?;

        for reference in references {
            let response = self.client.get(&reference.url).send().await?;
            let status = response.status();
            if !status.is_success() {
                tracing::warn!(url = %reference.url, status = status.as_u16(), "Audio file is missing");
                report.missing.push(reference.url.clone());
                continue;
            }

            let body = response.bytes().await?;
            let path = self.audio_dir.join(&reference.filename);
            tokio::fs::write(&path, &body)
                .await
                .map_err(AppError::io(&path))?;

            tracing::debug!(file = %reference.filename, bytes = body.len(), "Downloaded audio file");
            report.downloaded += 1;
        }

        Ok(report)
    }
}

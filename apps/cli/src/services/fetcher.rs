//! Dictionary page fetcher.

use reqwest::Client;

use crate::error::{AppError, Result};

/// Fetches entry pages from the online dictionary.
pub struct Fetcher {
    client: Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Lookup URL for a word. The word is appended without escaping.
    pub fn lookup_url(&self, word: &str) -> String {
        format!("{}{}", self.base_url, word)
    }

    /// Fetch the entry page for a word as UTF-8 text.
    ///
    /// Any transport failure, error status or invalid encoding is returned
    /// as an error; there is no retry.
    pub async fn fetch_entry(&self, word: &str) -> Result<String> {
        let url = self.lookup_url(word);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        String::from_utf8(body.to_vec()).map_err(|_| AppError::Decode { url })
    }
}

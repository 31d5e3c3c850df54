pub mod fetcher;
pub mod media;

use reqwest::Client;

use crate::error::Result;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by the fetcher and the media downloader.
///
/// No timeout is set: a stalled request stalls the run.
pub fn build_client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

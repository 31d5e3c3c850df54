pub mod config;
pub mod error;
pub mod pipeline;
pub mod services;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        wordlist = %config.wordlist_path.display(),
        output = %config.output_path.display(),
        audio_dir = %config.audio_dir.display(),
        "Starting run"
    );

    let summary = pipeline::run_pipeline(&config).await?;

    let elapsed = chrono::Utc::now() - summary.started_at;
    tracing::info!(
        started_at = %summary.started_at.to_rfc3339(),
        elapsed_secs = elapsed.num_seconds(),
        words = summary.words,
        rows = summary.rows_written,
        skipped = summary.entries_skipped,
        audio_downloaded = summary.audio_downloaded,
        audio_missing = summary.audio_missing,
        "Run finished"
    );

    let output_name = config
        .output_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.output_path.display().to_string());
    tracing::info!("Done. You can now import flashcards from your {} file.", output_name);

    Ok(())
}

use std::process::ExitStatus;

use crate::search::{self, SearchResult};
use crate::tools;

#[derive(thiserror::Error, Debug)]
pub enum ExtractorError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("yt-dlp exited with {status}:\n{stderr}")]
    Failed { status: ExitStatus, stderr: String },
    #[error(transparent)]
    Listing(#[from] search::ListingError),
}

/// Arguments for a flat search: the top `limit` hits for `query`, one JSON
/// record per stdout line.
pub fn search_args(query: &str, limit: usize) -> Vec<String> {
    vec![
        format!("ytsearch{}:{}", limit, query),
        "--flat-playlist".to_string(),
        "--dump-json".to_string(),
        "--no-warnings".to_string(),
    ]
}

/// Run a search through yt-dlp and parse its listing. A non-zero exit
/// carries the tool's own stderr; nothing is retried.
pub async fn search(query: &str, limit: usize) -> Result<Vec<SearchResult>, ExtractorError> {
    run_search(tools::YTDLP, query, limit).await
}

async fn run_search(
    bin: &str,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchResult>, ExtractorError> {
    let args = search_args(query, limit);
    debug!("Running {} {:?}", bin, args);

    let output = tokio::process::Command::new(bin)
        .args(&args)
        .output()
        .await?;

    if !output.status.success() {
        return Err(ExtractorError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(search::parse_listing(&stdout)?)
}

//! `anjviz fetch` — download the source CSV to a local file.
//!
//! The source is a static file on a CDN, not a rate-limited API, so a
//! single status-checked request is enough; failures map to the fetch
//! exit-code range.

use std::path::Path;
use std::time::Duration;

use crate::CliError;

const TIMEOUT_SECS: u64 = 30;
const USER_AGENT: &str = concat!("anjviz/", env!("CARGO_PKG_VERSION"));

/// Download `url` into `output`. Emits a stderr note on success unless
/// `quiet` is set.
pub fn fetch_to_file(url: &str, output: &Path, quiet: bool) -> Result<(), CliError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| CliError::fetch_transport(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| CliError::fetch_transport(format!("request to {} failed: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CliError::fetch_http(format!("HTTP {} from {}", status.as_u16(), url))
            .with_hint("the dataset may have moved; pass --url with a current locator"));
    }

    let bytes = response
        .bytes()
        .map_err(|e| CliError::fetch_transport(format!("reading body from {} failed: {}", url, e)))?;

    std::fs::write(output, &bytes).map_err(|e| {
        CliError::io(format!("failed to write {}: {}", output.display(), e))
    })?;

    if !quiet {
        eprintln!("fetched {} bytes -> {}", bytes.len(), output.display());
    }

    Ok(())
}

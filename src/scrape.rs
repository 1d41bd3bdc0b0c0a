use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::{Deserialize, Serialize};

use crate::export;

const REQUEST_TIMEOUT_SECS: u64 = 15;
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

static CLIENT: OnceCell<Client> = OnceCell::new();

fn scrape_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build scrape client")
    })
}

/// A result row as a live tournament page would yield it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedMatch {
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u8,
    pub away_score: u8,
    pub stage: String,
    pub venue: String,
}

/// Fetch a tournament results page and parse whatever rows it carries.
pub fn scrape_tournament_page(url: &str) -> Result<Vec<ScrapedMatch>> {
    let client = scrape_client()?;
    let response = client
        .get(url)
        .send()
        .with_context(|| format!("request failed for {url}"))?;
    let status = response.status();
    if !status.is_success() {
        bail!("unexpected status {status} for {url}");
    }
    let body = response
        .text()
        .with_context(|| format!("read response body from {url}"))?;
    Ok(parse_match_rows(&body))
}

// TODO: pick a source site and fill in its row selectors; until then every
// page parses to zero rows.
pub fn parse_match_rows(_html: &str) -> Vec<ScrapedMatch> {
    Vec::new()
}

/// Write scraped rows as CSV. Nothing is written for an empty batch; the
/// return value says whether a file was produced.
pub fn save_rows(rows: &[ScrapedMatch], path: &Path) -> Result<bool> {
    if rows.is_empty() {
        return Ok(false);
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir {}", parent.display()))?;
    }
    export::write_csv(path, rows)?;
    Ok(true)
}

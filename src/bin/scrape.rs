use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;

use wt25_dataset::scrape;

const DEFAULT_OUT_DIR: &str = "enhanced_data";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let (out_dir, urls) = parse_args();
    if urls.is_empty() {
        println!("Tournament scraper ready, no URLs given");
        println!("Usage: scrape [--out DIR] URL [URL ...]");
        return Ok(());
    }

    for url in &urls {
        println!("Scraping: {url}");
        let rows = match scrape::scrape_tournament_page(url) {
            Ok(rows) => rows,
            Err(err) => {
                eprintln!("scrape failed for {url}: {err:#}");
                continue;
            }
        };
        if rows.is_empty() {
            println!("  no rows parsed");
            continue;
        }

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = out_dir.join(format!("tournament_data_{timestamp}.csv"));
        if scrape::save_rows(&rows, &path)? {
            println!("  {} rows saved to {}", rows.len(), path.display());
        }
    }

    Ok(())
}

fn parse_args() -> (PathBuf, Vec<String>) {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut out_dir = out_dir_from_env().unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    let mut urls = Vec::new();

    let mut idx = 0;
    while idx < args.len() {
        let arg = &args[idx];
        if let Some(path) = arg.strip_prefix("--out=") {
            if !path.trim().is_empty() {
                out_dir = PathBuf::from(path.trim());
            }
        } else if arg == "--out" {
            if let Some(next) = args.get(idx + 1) {
                if !next.trim().is_empty() {
                    out_dir = PathBuf::from(next.trim());
                }
                idx += 1;
            }
        } else if !arg.trim().is_empty() {
            urls.push(arg.clone());
        }
        idx += 1;
    }

    (out_dir, urls)
}

fn out_dir_from_env() -> Option<PathBuf> {
    let raw = std::env::var("OUTPUT_DIR").ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

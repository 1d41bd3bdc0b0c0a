use std::path::PathBuf;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wt25_dataset::export::{self, TournamentExport};
use wt25_dataset::{dataset, fixtures};

const DEFAULT_OUT_DIR: &str = "enhanced_data";

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let out_dir = parse_out_arg()
        .or_else(out_dir_from_env)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));
    let mut rng = match parse_seed_arg() {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let wafcon = fixtures::wafcon_2024();
    let euro = fixtures::euro_2025();
    let wafcon_rows = dataset::build_rows(&wafcon, &mut rng)?;
    let euro_rows = dataset::build_rows(&euro, &mut rng)?;

    let report = export::export_dataset(
        &out_dir,
        &[
            TournamentExport {
                name: wafcon.name,
                file_stem: "wafcon_2024",
                rows: &wafcon_rows,
            },
            TournamentExport {
                name: euro.name,
                file_stem: "euro_2025",
                rows: &euro_rows,
            },
        ],
    )?;

    println!("Tournament dataset export complete");
    println!("Out: {}", out_dir.display());
    println!(
        "Matches: {} ({} WAFCON, {} Euro)",
        wafcon_rows.len() + euro_rows.len(),
        wafcon_rows.len(),
        euro_rows.len()
    );

    for summary in &report.summaries {
        println!("{}:", summary.tournament);
        println!(
            "  {} matches, {} goals ({} avg)",
            summary.total_matches, summary.total_goals, summary.avg_goals_per_match
        );
        println!(
            "  {} cards ({} avg) - {} yellow, {} red",
            summary.total_cards,
            summary.avg_cards_per_match,
            summary.total_yellow_cards,
            summary.total_red_cards
        );
        println!(
            "  {} min avg match time, longest {} shortest {}",
            summary.avg_match_time_minutes,
            summary.longest_match_minutes,
            summary.shortest_match_minutes
        );
        println!(
            "  {} total attendance ({} avg)",
            summary.total_attendance, summary.avg_attendance
        );
        println!(
            "  {} matches went to extra time",
            summary.matches_with_extra_time
        );
    }

    println!("Files written:");
    for file in &report.files {
        println!(" - {}", file.display());
    }

    Ok(())
}

fn parse_out_arg() -> Option<PathBuf> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix("--out=") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == "--out"
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(PathBuf::from(next));
        }
    }
    None
}

fn parse_seed_arg() -> Option<u64> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix("--seed=") {
            if let Ok(seed) = raw.trim().parse::<u64>() {
                return Some(seed);
            }
        }
        if arg == "--seed"
            && let Some(next) = args.get(idx + 1)
            && let Ok(seed) = next.trim().parse::<u64>()
        {
            return Some(seed);
        }
    }
    None
}

fn out_dir_from_env() -> Option<PathBuf> {
    let raw = std::env::var("OUTPUT_DIR").ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(PathBuf::from(trimmed))
}

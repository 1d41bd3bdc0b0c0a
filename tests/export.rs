use std::fs;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use wt25_dataset::export::{self, TournamentExport};
use wt25_dataset::{dataset, fixtures};

fn temp_out_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wt25_export_{tag}_{}", std::process::id()))
}

#[test]
fn full_export_writes_every_file() {
    let mut rng = StdRng::seed_from_u64(41);
    let wafcon = fixtures::wafcon_2024();
    let euro = fixtures::euro_2025();
    let wafcon_rows = dataset::build_rows(&wafcon, &mut rng).expect("wafcon rows");
    let euro_rows = dataset::build_rows(&euro, &mut rng).expect("euro rows");

    let out_dir = temp_out_dir("full");
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
    )
    .expect("export should succeed");

    for name in [
        "wafcon_2024_matches.csv",
        "wafcon_2024_matches.json",
        "euro_2025_matches.csv",
        "euro_2025_matches.json",
        "combined_matches.csv",
        "combined_matches.json",
        "tournament_summary.csv",
        "match_time_analysis.csv",
        "cards_analysis.csv",
    ] {
        assert!(out_dir.join(name).exists(), "missing {name}");
    }
    assert_eq!(report.files.len(), 9);
    assert_eq!(report.summaries.len(), 2);

    let combined = fs::read_to_string(out_dir.join("combined_matches.csv")).expect("read csv");
    // Header plus one line per match across both tournaments.
    assert_eq!(combined.lines().count(), 53);
    assert!(combined.lines().next().is_some_and(|h| h.starts_with("match_id,")));

    let json = fs::read_to_string(out_dir.join("combined_matches.json")).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(52));

    let summary = fs::read_to_string(out_dir.join("tournament_summary.csv")).expect("read csv");
    assert_eq!(summary.lines().count(), 3);
    assert!(summary.contains("WAFCON 2024"));
    assert!(summary.contains("UEFA Women's Euro 2025"));

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn analysis_views_cover_every_match() {
    let mut rng = StdRng::seed_from_u64(42);
    let euro = fixtures::euro_2025();
    let euro_rows = dataset::build_rows(&euro, &mut rng).expect("euro rows");

    let out_dir = temp_out_dir("analysis");
    export::export_dataset(
        &out_dir,
        &[TournamentExport {
            name: euro.name,
            file_stem: "euro_2025",
            rows: &euro_rows,
        }],
    )
    .expect("export should succeed");

    let time = fs::read_to_string(out_dir.join("match_time_analysis.csv")).expect("read csv");
    assert_eq!(time.lines().count(), 29);
    assert!(time.lines().next().is_some_and(|h| h.contains("regular_time")));

    let cards = fs::read_to_string(out_dir.join("cards_analysis.csv")).expect("read csv");
    assert_eq!(cards.lines().count(), 29);
    let header = cards.lines().next().expect("header line");
    assert!(header.contains("cards_per_goal"));
    assert!(header.contains("high_card_match"));
    for line in cards.lines().skip(1) {
        assert!(line.ends_with(",Yes") || line.ends_with(",No"));
    }

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn export_creates_missing_directories() {
    let out_dir = temp_out_dir("nested").join("deep").join("dir");
    let mut rng = StdRng::seed_from_u64(43);
    let wafcon = fixtures::wafcon_2024();
    let rows = dataset::build_rows(&wafcon, &mut rng).expect("wafcon rows");

    export::export_dataset(
        &out_dir,
        &[TournamentExport {
            name: wafcon.name,
            file_stem: "wafcon_2024",
            rows: &rows,
        }],
    )
    .expect("export should succeed");
    assert!(out_dir.join("wafcon_2024_matches.csv").exists());

    fs::remove_dir_all(temp_out_dir("nested")).ok();
}

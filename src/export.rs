use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::dataset::MatchRow;
use crate::summary::{self, TournamentSummary};

pub struct TournamentExport<'a> {
    pub name: &'a str,
    pub file_stem: &'a str,
    pub rows: &'a [MatchRow],
}

pub struct ExportReport {
    pub files: Vec<PathBuf>,
    pub summaries: Vec<TournamentSummary>,
}

/// Secondary view of each row focused on playing time.
#[derive(Debug, Clone, Serialize)]
struct TimeAnalysisRow {
    match_id: String,
    tournament: String,
    date: String,
    stage: String,
    total_goals: u32,
    total_cards: u32,
    yellow_cards: u32,
    red_cards: u32,
    regular_time: u32,
    stoppage_time_first_half: u32,
    stoppage_time_second_half: u32,
    total_stoppage_time: u32,
    total_match_time: u32,
    had_extra_time: bool,
    extra_time_minutes: u32,
}

impl TimeAnalysisRow {
    fn from_match(m: &MatchRow) -> Self {
        Self {
            match_id: m.match_id.clone(),
            tournament: m.tournament.clone(),
            date: m.date.clone(),
            stage: m.stage.clone(),
            total_goals: m.total_goals,
            total_cards: m.total_cards,
            yellow_cards: m.yellow_cards,
            red_cards: m.red_cards,
            regular_time: 90,
            stoppage_time_first_half: m.stoppage_time_first_half,
            stoppage_time_second_half: m.stoppage_time_second_half,
            total_stoppage_time: m.total_stoppage_time,
            total_match_time: m.total_match_time,
            had_extra_time: m.had_extra_time,
            extra_time_minutes: if m.had_extra_time {
                m.total_match_time.saturating_sub(95)
            } else {
                0
            },
        }
    }
}

// Discipline view over the combined rows.
#[derive(Debug, Clone, Serialize)]
struct CardsAnalysisRow {
    match_id: String,
    tournament: String,
    date: String,
    stage: String,
    home_team: String,
    away_team: String,
    total_goals: u32,
    yellow_cards: u32,
    red_cards: u32,
    total_cards: u32,
    cards_per_goal: f64,
    high_card_match: &'static str,
    red_card_match: &'static str,
}

impl CardsAnalysisRow {
    fn from_match(m: &MatchRow) -> Self {
        let goals = m.total_goals.max(1);
        let per_goal = f64::from(m.total_cards) / f64::from(goals);
        Self {
            match_id: m.match_id.clone(),
            tournament: m.tournament.clone(),
            date: m.date.clone(),
            stage: m.stage.clone(),
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            total_goals: m.total_goals,
            yellow_cards: m.yellow_cards,
            red_cards: m.red_cards,
            total_cards: m.total_cards,
            cards_per_goal: (per_goal * 100.0).round() / 100.0,
            high_card_match: yes_no(m.total_cards >= 4),
            red_card_match: yes_no(m.red_cards > 0),
        }
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

pub fn export_dataset(
    out_dir: &Path,
    tournaments: &[TournamentExport<'_>],
) -> Result<ExportReport> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir {}", out_dir.display()))?;

    let mut files = Vec::new();
    let mut summaries = Vec::new();
    let mut combined: Vec<MatchRow> = Vec::new();

    for tournament in tournaments {
        let csv_path = out_dir.join(format!("{}_matches.csv", tournament.file_stem));
        write_csv(&csv_path, tournament.rows)?;
        files.push(csv_path);

        let json_path = out_dir.join(format!("{}_matches.json", tournament.file_stem));
        write_json(&json_path, tournament.rows)?;
        files.push(json_path);

        if let Some(summary) = summary::summarize(tournament.name, tournament.rows) {
            summaries.push(summary);
        }
        combined.extend(tournament.rows.iter().cloned());
    }

    let combined_csv = out_dir.join("combined_matches.csv");
    write_csv(&combined_csv, &combined)?;
    files.push(combined_csv);

    let combined_json = out_dir.join("combined_matches.json");
    write_json(&combined_json, &combined)?;
    files.push(combined_json);

    let summary_csv = out_dir.join("tournament_summary.csv");
    write_csv(&summary_csv, &summaries)?;
    files.push(summary_csv);

    let time_rows: Vec<TimeAnalysisRow> =
        combined.iter().map(TimeAnalysisRow::from_match).collect();
    let time_csv = out_dir.join("match_time_analysis.csv");
    write_csv(&time_csv, &time_rows)?;
    files.push(time_csv);

    let cards_rows: Vec<CardsAnalysisRow> =
        combined.iter().map(CardsAnalysisRow::from_match).collect();
    let cards_csv = out_dir.join("cards_analysis.csv");
    write_csv(&cards_csv, &cards_rows)?;
    files.push(cards_csv);

    Ok(ExportReport { files, summaries })
}

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("open csv {}", path.display()))?;
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("write csv row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv {}", path.display()))?;
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), rows)
        .with_context(|| format!("write json {}", path.display()))?;
    Ok(())
}

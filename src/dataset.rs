use anyhow::{Context, Result};
use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fixtures::{RawMatch, TournamentFixtures};
use crate::match_stats;

/// One fully enriched dataset row, flat so it can go straight to CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRow {
    pub match_id: String,
    pub tournament: String,
    pub date: String,
    pub kickoff: String,
    pub stage: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u8,
    pub away_score: u8,
    pub total_goals: u32,
    pub winner: String,
    pub venue: String,
    pub attendance: u32,
    pub penalty_result: Option<String>,
    pub day_of_week: String,
    pub match_week: String,
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub total_cards: u32,
    pub stoppage_time_first_half: u32,
    pub stoppage_time_second_half: u32,
    pub total_stoppage_time: u32,
    pub total_match_time: u32,
    pub had_extra_time: bool,
}

pub fn build_rows(fixtures: &TournamentFixtures, rng: &mut impl Rng) -> Result<Vec<MatchRow>> {
    let start = parse_date(fixtures.start_date)
        .with_context(|| format!("invalid start date for {}", fixtures.name))?;

    let mut rows = Vec::with_capacity(fixtures.matches.len());
    for (idx, raw) in fixtures.matches.iter().enumerate() {
        let date = parse_date(&raw.date)
            .with_context(|| format!("invalid date on fixture {} of {}", idx + 1, fixtures.name))?;
        let stats = match_stats::embellish(raw, rng);

        rows.push(MatchRow {
            match_id: format!("{}_{:02}", fixtures.id_prefix, idx + 1),
            tournament: fixtures.name.to_string(),
            date: raw.date.clone(),
            kickoff: raw.kickoff.clone(),
            stage: raw.stage.clone(),
            home_team: raw.home_team.clone(),
            away_team: raw.away_team.clone(),
            home_score: raw.home_score,
            away_score: raw.away_score,
            total_goals: u32::from(raw.home_score) + u32::from(raw.away_score),
            winner: winner_label(raw),
            venue: raw.venue.clone(),
            attendance: raw.attendance,
            penalty_result: raw.penalty_result.clone(),
            day_of_week: date.format("%A").to_string(),
            match_week: match_week_label(start, date),
            yellow_cards: stats.yellow_cards,
            red_cards: stats.red_cards,
            total_cards: stats.total_cards,
            stoppage_time_first_half: stats.stoppage_time_first_half,
            stoppage_time_second_half: stats.stoppage_time_second_half,
            total_stoppage_time: stats.total_stoppage_time,
            total_match_time: stats.total_match_time,
            had_extra_time: stats.had_extra_time,
        });
    }
    Ok(rows)
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("bad date {raw}"))
}

fn winner_label(raw: &RawMatch) -> String {
    if raw.home_score > raw.away_score {
        raw.home_team.clone()
    } else if raw.away_score > raw.home_score {
        raw.away_team.clone()
    } else {
        "Draw".to_string()
    }
}

fn match_week_label(start: NaiveDate, date: NaiveDate) -> String {
    let week = (date - start).num_days() / 7 + 1;
    format!("Week {week}")
}

use serde::{Deserialize, Serialize};

use crate::dataset::MatchRow;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub tournament: String,
    pub total_matches: usize,
    pub total_goals: u32,
    pub avg_goals_per_match: f64,
    pub total_yellow_cards: u32,
    pub total_red_cards: u32,
    pub total_cards: u32,
    pub avg_cards_per_match: f64,
    pub avg_match_time_minutes: f64,
    pub total_attendance: u64,
    pub avg_attendance: u64,
    pub matches_with_extra_time: usize,
    pub longest_match_minutes: u32,
    pub shortest_match_minutes: u32,
}

pub fn summarize(tournament: &str, rows: &[MatchRow]) -> Option<TournamentSummary> {
    if rows.is_empty() {
        return None;
    }
    let total_matches = rows.len();
    let total_goals: u32 = rows.iter().map(|m| m.total_goals).sum();
    let total_yellow_cards: u32 = rows.iter().map(|m| m.yellow_cards).sum();
    let total_red_cards: u32 = rows.iter().map(|m| m.red_cards).sum();
    let total_cards: u32 = rows.iter().map(|m| m.total_cards).sum();
    let total_match_time: u64 = rows.iter().map(|m| u64::from(m.total_match_time)).sum();
    let total_attendance: u64 = rows.iter().map(|m| u64::from(m.attendance)).sum();

    let n = total_matches as f64;
    Some(TournamentSummary {
        tournament: tournament.to_string(),
        total_matches,
        total_goals,
        avg_goals_per_match: round2(f64::from(total_goals) / n),
        total_yellow_cards,
        total_red_cards,
        total_cards,
        avg_cards_per_match: round2(f64::from(total_cards) / n),
        avg_match_time_minutes: round1(total_match_time as f64 / n),
        total_attendance,
        avg_attendance: (total_attendance as f64 / n).round() as u64,
        matches_with_extra_time: rows.iter().filter(|m| m.had_extra_time).count(),
        longest_match_minutes: rows.iter().map(|m| m.total_match_time).max().unwrap_or(0),
        shortest_match_minutes: rows.iter().map(|m| m.total_match_time).min().unwrap_or(0),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::summarize;
    use crate::{dataset, fixtures};

    #[test]
    fn empty_input_yields_no_summary() {
        assert!(summarize("WAFCON 2024", &[]).is_none());
    }

    #[test]
    fn summary_totals_match_the_rows() {
        let mut rng = StdRng::seed_from_u64(21);
        let fixtures = fixtures::wafcon_2024();
        let rows = dataset::build_rows(&fixtures, &mut rng).expect("build rows");
        let summary = summarize(fixtures.name, &rows).expect("non-empty summary");

        assert_eq!(summary.total_matches, 24);
        assert_eq!(summary.total_goals, rows.iter().map(|m| m.total_goals).sum::<u32>());
        assert_eq!(
            summary.total_cards,
            summary.total_yellow_cards + summary.total_red_cards
        );
        assert!(summary.shortest_match_minutes >= 90);
        assert!(summary.longest_match_minutes >= summary.shortest_match_minutes);
        assert!(summary.avg_match_time_minutes >= 90.0);
    }
}

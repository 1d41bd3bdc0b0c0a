use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fixtures::RawMatch;

/// Card and time figures synthesized for a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub yellow_cards: u32,
    pub red_cards: u32,
    pub total_cards: u32,
    pub stoppage_time_first_half: u32,
    pub stoppage_time_second_half: u32,
    pub total_stoppage_time: u32,
    pub total_match_time: u32,
    pub had_extra_time: bool,
}

// 3rd Place is settled on penalties after regulation and never reaches extra
// time, so it stays out of the knockout set.
fn is_knockout(stage: &str) -> bool {
    matches!(stage, "Quarter-final" | "Semi-final" | "Final")
}

pub fn embellish(record: &RawMatch, rng: &mut impl Rng) -> DerivedStats {
    let total_goals = u32::from(record.home_score) + u32::from(record.away_score);

    // Card range keys off the stage first, then off how open the game was.
    let base_cards: u32 = match record.stage.as_str() {
        "Final" | "Semi-final" => rng.gen_range(2..=6),
        "Quarter-final" => rng.gen_range(1..=5),
        _ if total_goals >= 4 => rng.gen_range(0..=3),
        _ => rng.gen_range(1..=4),
    };

    let mut yellow_cards = base_cards;
    let mut red_cards = 0u32;
    if is_knockout(&record.stage) && rng.gen_bool(0.15) {
        red_cards = 1;
        yellow_cards = yellow_cards.saturating_sub(1);
    }
    let mut total_cards = yellow_cards + red_cards;

    let stoppage_time_first_half: u32 = rng.gen_range(1..=3);

    let base_second: u32 = rng.gen_range(2..=4);
    let goal_time_added = 0.5 * f64::from(total_goals);
    let card_time_added = 0.3 * f64::from(total_cards);
    // The fractional additions must accumulate before the single truncation.
    let stoppage_time_second_half =
        ((f64::from(base_second) + goal_time_added + card_time_added) as u32).min(8);

    let total_stoppage_time = stoppage_time_first_half + stoppage_time_second_half;
    let mut total_match_time = 90 + total_stoppage_time;

    // Level knockout ties go to a 30-minute extra time with its own stoppage.
    if is_knockout(&record.stage) && record.home_score == record.away_score {
        let extra_time_stoppage: u32 = rng.gen_range(1..=4);
        total_match_time = 120 + extra_time_stoppage;
        if rng.gen_bool(0.3) {
            yellow_cards += 1;
            total_cards += 1;
        }
    }

    DerivedStats {
        yellow_cards,
        red_cards,
        total_cards,
        stoppage_time_first_half,
        stoppage_time_second_half,
        total_stoppage_time,
        total_match_time,
        had_extra_time: total_match_time > 100,
    }
}

use serde::{Deserialize, Serialize};

/// A hand-entered final result, before any synthetic enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatch {
    pub date: String,
    pub kickoff: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: u8,
    pub away_score: u8,
    pub stage: String,
    pub venue: String,
    pub attendance: u32,
    pub penalty_result: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TournamentFixtures {
    pub name: &'static str,
    pub id_prefix: &'static str,
    pub start_date: &'static str,
    pub matches: Vec<RawMatch>,
}

#[allow(clippy::too_many_arguments)]
fn result(
    date: &str,
    kickoff: &str,
    home_team: &str,
    away_team: &str,
    home_score: u8,
    away_score: u8,
    stage: &str,
    venue: &str,
    attendance: u32,
) -> RawMatch {
    RawMatch {
        date: date.to_string(),
        kickoff: kickoff.to_string(),
        home_team: home_team.to_string(),
        away_team: away_team.to_string(),
        home_score,
        away_score,
        stage: stage.to_string(),
        venue: venue.to_string(),
        attendance,
        penalty_result: None,
    }
}

fn shootout(record: RawMatch, penalty_result: &str) -> RawMatch {
    RawMatch {
        penalty_result: Some(penalty_result.to_string()),
        ..record
    }
}

pub fn wafcon_2024() -> TournamentFixtures {
    let rabat = "Prince Moulay Abdellah Stadium, Rabat";
    let casablanca = "Stade Mohammed V, Casablanca";
    let mohammedia = "Stade El Bachir, Mohammedia";
    let berkane = "Stade Municipal, Berkane";
    let oujda = "Complexe Sportif, Oujda";

    let matches = vec![
        // Group A
        result("2025-07-05", "20:00", "Morocco", "Zambia", 2, 1, "Group A", rabat, 35000),
        result("2025-07-05", "17:00", "Senegal", "DR Congo", 4, 0, "Group A", casablanca, 28000),
        result("2025-07-09", "20:00", "Morocco", "Senegal", 1, 0, "Group A", rabat, 38000),
        result("2025-07-09", "17:00", "Zambia", "DR Congo", 3, 1, "Group A", casablanca, 22000),
        result("2025-07-13", "20:00", "Morocco", "DR Congo", 4, 0, "Group A", mohammedia, 25000),
        result("2025-07-13", "20:00", "Zambia", "Senegal", 0, 1, "Group A", rabat, 30000),
        // Group B
        result("2025-07-06", "20:00", "Nigeria", "Tunisia", 3, 0, "Group B", berkane, 18000),
        result("2025-07-06", "17:00", "Algeria", "Botswana", 1, 0, "Group B", oujda, 15000),
        result("2025-07-10", "20:00", "Nigeria", "Botswana", 1, 0, "Group B", berkane, 16000),
        result("2025-07-10", "17:00", "Algeria", "Tunisia", 0, 0, "Group B", oujda, 17000),
        result("2025-07-14", "20:00", "Nigeria", "Algeria", 0, 0, "Group B", rabat, 32000),
        result("2025-07-14", "20:00", "Tunisia", "Botswana", 1, 2, "Group B", casablanca, 20000),
        // Group C
        result("2025-07-07", "20:00", "South Africa", "Ghana", 2, 1, "Group C", mohammedia, 24000),
        result("2025-07-07", "17:00", "Mali", "Tanzania", 1, 0, "Group C", berkane, 12000),
        result("2025-07-11", "20:00", "South Africa", "Mali", 4, 0, "Group C", mohammedia, 26000),
        result("2025-07-11", "17:00", "Ghana", "Tanzania", 2, 0, "Group C", berkane, 14000),
        result("2025-07-15", "20:00", "South Africa", "Tanzania", 3, 0, "Group C", oujda, 16000),
        result("2025-07-15", "20:00", "Ghana", "Mali", 1, 1, "Group C", mohammedia, 22000),
        // Knockout rounds
        result("2025-07-19", "17:00", "Nigeria", "Zambia", 1, 0, "Quarter-final", casablanca, 35000),
        result("2025-07-19", "20:00", "Morocco", "Mali", 3, 0, "Quarter-final", rabat, 42000),
        result("2025-07-20", "17:00", "Ghana", "Algeria", 2, 0, "Quarter-final", mohammedia, 28000),
        result("2025-07-20", "20:00", "South Africa", "Senegal", 2, 1, "Quarter-final", "Stade Moulay Hassan, Rabat", 30000),
        result("2025-07-23", "20:00", "Nigeria", "South Africa", 1, 0, "Semi-final", rabat, 40000),
        result("2025-07-23", "17:00", "Morocco", "Ghana", 2, 1, "Semi-final", casablanca, 45000),
        shootout(
            result("2025-07-25", "17:00", "Ghana", "South Africa", 1, 1, "3rd Place", mohammedia, 25000),
            "Ghana 4-3",
        ),
        result("2025-07-26", "20:00", "Nigeria", "Morocco", 3, 2, "Final", "Olympic Stadium, Rabat", 50000),
    ];

    TournamentFixtures {
        name: "WAFCON 2024",
        id_prefix: "WAFCON_2024",
        start_date: "2025-07-05",
        matches,
    }
}

pub fn euro_2025() -> TournamentFixtures {
    let basel = "St. Jakob-Park, Basel";
    let thun = "Arena Thun, Thun";
    let geneva = "Stade de Genève, Geneva";
    let bern = "Stadion Wankdorf, Bern";
    let zurich = "Stadion Letzigrund, Zurich";
    let st_gallen = "Arena St.Gallen, St.Gallen";
    let lucerne = "Allmend Stadion Luzern, Lucerne";
    let sion = "Stade de Tourbillon, Sion";

    let matches = vec![
        // Group A
        result("2025-07-02", "20:00", "Switzerland", "Norway", 1, 0, "Group A", basel, 36000),
        result("2025-07-02", "17:00", "Iceland", "Finland", 1, 1, "Group A", thun, 10000),
        result("2025-07-06", "20:00", "Switzerland", "Iceland", 2, 0, "Group A", basel, 38000),
        result("2025-07-06", "17:00", "Norway", "Finland", 4, 1, "Group A", thun, 10000),
        result("2025-07-10", "20:00", "Switzerland", "Finland", 3, 0, "Group A", geneva, 30000),
        result("2025-07-10", "20:00", "Norway", "Iceland", 4, 3, "Group A", bern, 32000),
        // Group B
        result("2025-07-03", "20:00", "Spain", "Portugal", 5, 0, "Group B", geneva, 30000),
        result("2025-07-03", "17:00", "Belgium", "Italy", 1, 1, "Group B", zurich, 26000),
        result("2025-07-07", "20:00", "Spain", "Belgium", 6, 2, "Group B", geneva, 30000),
        result("2025-07-07", "17:00", "Portugal", "Italy", 1, 1, "Group B", zurich, 26000),
        result("2025-07-11", "20:00", "Spain", "Italy", 1, 3, "Group B", bern, 32000),
        result("2025-07-11", "20:00", "Portugal", "Belgium", 0, 2, "Group B", st_gallen, 19000),
        // Group C
        result("2025-07-04", "20:00", "Germany", "Poland", 2, 3, "Group C", bern, 32000),
        result("2025-07-04", "17:00", "Denmark", "Sweden", 2, 4, "Group C", st_gallen, 19000),
        result("2025-07-08", "20:00", "Germany", "Denmark", 3, 1, "Group C", bern, 32000),
        result("2025-07-08", "17:00", "Poland", "Sweden", 1, 2, "Group C", st_gallen, 19000),
        result("2025-07-12", "20:00", "Germany", "Sweden", 1, 4, "Group C", lucerne, 17000),
        result("2025-07-12", "20:00", "Poland", "Denmark", 3, 2, "Group C", sion, 16000),
        // Group D
        result("2025-07-05", "20:00", "France", "England", 1, 2, "Group D", lucerne, 17000),
        result("2025-07-05", "17:00", "Wales", "Netherlands", 0, 2, "Group D", sion, 16000),
        result("2025-07-09", "20:00", "France", "Wales", 3, 0, "Group D", lucerne, 17000),
        result("2025-07-09", "17:00", "England", "Netherlands", 1, 1, "Group D", sion, 16000),
        result("2025-07-13", "20:00", "France", "Netherlands", 0, 1, "Group D", zurich, 26000),
        result("2025-07-13", "20:00", "England", "Wales", 2, 0, "Group D", basel, 36000),
        // Knockout rounds
        shootout(
            result("2025-07-19", "20:00", "England", "Sweden", 2, 2, "Quarter-final", basel, 38000),
            "England 3-2",
        ),
        result("2025-07-19", "17:00", "Spain", "Germany", 3, 1, "Quarter-final", bern, 32000),
        result("2025-07-20", "20:00", "Netherlands", "Italy", 2, 0, "Quarter-final", geneva, 30000),
        result("2025-07-20", "17:00", "France", "Belgium", 1, 0, "Quarter-final", zurich, 26000),
        result("2025-07-24", "20:00", "England", "Netherlands", 3, 1, "Semi-final", bern, 32000),
        result("2025-07-24", "17:00", "Spain", "France", 2, 0, "Semi-final", geneva, 30000),
        result("2025-07-26", "17:00", "Netherlands", "France", 1, 0, "3rd Place", zurich, 26000),
        result("2025-07-27", "20:00", "England", "Spain", 2, 1, "Final", basel, 38000),
    ];

    TournamentFixtures {
        name: "UEFA Women's Euro 2025",
        id_prefix: "EURO_2025",
        start_date: "2025-07-02",
        matches,
    }
}

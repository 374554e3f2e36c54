use crate::models::{HistoricalFixture, TeamId};

use super::extract::{extract_half_time_goal, shots_sample};

/// Indicators reduced from a team's recent fixtures.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistoryIndicators {
    pub ht_goal_pct: f64,
    pub avg_shots_ht: f64,
}

/// Reduce `fixtures` into the half-time goal rate and average first-half shots.
///
/// The goal rate divides by every fixture supplied. The shots average only
/// divides by fixtures that carried a shot figure for the team; fixtures
/// without statistics are left out entirely rather than counted as zero.
/// Order of `fixtures` does not matter.
pub fn aggregate_history(fixtures: &[HistoricalFixture], team_id: TeamId) -> HistoryIndicators {
    if fixtures.is_empty() {
        return HistoryIndicators::default();
    }

    let scored = fixtures
        .iter()
        .filter(|f| extract_half_time_goal(f, team_id).scored)
        .count();

    let (shots_sum, samples) = fixtures
        .iter()
        .filter_map(|f| shots_sample(f, team_id))
        .fold((0.0, 0usize), |(sum, n), shots| (sum + shots, n + 1));

    HistoryIndicators {
        ht_goal_pct: scored as f64 / fixtures.len() as f64,
        avg_shots_ht: if samples > 0 {
            shots_sum / samples as f64
        } else {
            0.0
        },
    }
}

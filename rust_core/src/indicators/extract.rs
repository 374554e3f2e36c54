use crate::models::{HistoricalFixture, TeamId};

use super::{first_half_share, SHOTS_MARKER};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HalfTimeGoal {
    pub scored: bool,
}

/// Did `team_id` score before the interval in this fixture?
///
/// A team that is not the home side is read from the away column.
/// Missing score data means no goal.
pub fn extract_half_time_goal(fixture: &HistoricalFixture, team_id: TeamId) -> HalfTimeGoal {
    let goals = fixture
        .half_time
        .and_then(|ht| {
            if fixture.is_home(team_id) {
                ht.home
            } else {
                ht.away
            }
        })
        .unwrap_or(0);

    HalfTimeGoal { scored: goals > 0 }
}

/// Estimated first-half shots for `team_id`, or `None` when the fixture
/// carries no usable shot figure for that team.
pub fn shots_sample(fixture: &HistoricalFixture, team_id: TeamId) -> Option<f64> {
    fixture
        .statistics_for(team_id)?
        .value_of(SHOTS_MARKER)
        .map(first_half_share)
}

/// `shots_sample` with "no sample" reported as 0.
pub fn extract_shots_proxy(fixture: &HistoricalFixture, team_id: TeamId) -> f64 {
    shots_sample(fixture, team_id).unwrap_or(0.0)
}

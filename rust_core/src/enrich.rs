//! Match enrichment
//!
//! Assembles one fixture under evaluation plus the evidence fetched for it
//! (both teams' recent fixtures and the fixture's own statistics) into a
//! normalized `MatchRecord`.

use chrono::NaiveDate;

use crate::filter::round2;
use crate::indicators::{aggregate_history, resolve_expected_goals, HistoryIndicators};
use crate::models::{
    HistoricalFixture, MatchId, MatchRecord, MatchSide, StatisticBlock, TeamId, TeamIndicator, TeamRef,
};

/// Evidence gathered for one fixture. Empty collections mean "no data".
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEvidence<'a> {
    pub home_history: &'a [HistoricalFixture],
    pub away_history: &'a [HistoricalFixture],
    pub statistics: &'a [StatisticBlock],
}

/// Build the `MatchRecord` for `fixture`.
///
/// `processed_on` is stamped as the record date and used in the synthetic
/// id; it is the day the pipeline ran, not the kickoff date.
pub fn enrich_match(
    fixture: &HistoricalFixture,
    evidence: FixtureEvidence<'_>,
    processed_on: NaiveDate,
) -> MatchRecord {
    let home_history = history_for(evidence.home_history, fixture.home.id);
    let away_history = history_for(evidence.away_history, fixture.away.id);
    let xg = resolve_expected_goals(evidence.statistics, fixture.home.id, fixture.away.id);

    MatchRecord {
        id: match_id(fixture, processed_on),
        date: processed_on,
        league: fixture.league.clone(),
        home: side(&fixture.home, home_history, xg.home),
        away: side(&fixture.away, away_history, xg.away),
        raw: fixture.raw.clone(),
    }
}

fn history_for(fixtures: &[HistoricalFixture], team_id: Option<TeamId>) -> HistoryIndicators {
    team_id
        .map(|id| aggregate_history(fixtures, id))
        .unwrap_or_default()
}

fn side(team: &TeamRef, history: HistoryIndicators, xg_ht: f64) -> MatchSide {
    MatchSide {
        id: team.id,
        name: team.name.clone(),
        indicator: TeamIndicator {
            ht_goal_pct: history.ht_goal_pct,
            avg_shots_ht: round2(history.avg_shots_ht),
            xg_ht,
        },
    }
}

fn match_id(fixture: &HistoricalFixture, processed_on: NaiveDate) -> MatchId {
    match fixture.fixture_id {
        Some(id) => MatchId::Fixture(id),
        None => MatchId::Synthetic(format!(
            "{}-{}-{}",
            id_or_unknown(fixture.home.id),
            id_or_unknown(fixture.away.id),
            processed_on.format("%Y-%m-%d")
        )),
    }
}

fn id_or_unknown(id: Option<TeamId>) -> String {
    id.map(|id| id.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

// Shared models for the half-time filter pipeline
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod payload;

/// Provider-assigned numeric team identifier.
pub type TeamId = u64;

/// Provider-assigned numeric fixture identifier.
pub type FixtureId = u64;

// ============================================================================
// Provider-side records (normalized by `payload`)
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: Option<TeamId>,
    pub name: Option<String>,
}

/// Goals scored by each side before the interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfTimeScore {
    pub home: Option<u32>,
    pub away: Option<u32>,
}

/// One `{type, value}` statistic line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Provider label (`type`, falling back to `name`), kept verbatim.
    pub kind: String,
    /// Numeric value, `None` when the provider sent null or a non-numeric string.
    pub value: Option<f64>,
}

impl StatEntry {
    /// Case-insensitive substring match on the label.
    pub fn matches(&self, marker: &str) -> bool {
        self.kind.to_lowercase().contains(marker)
    }
}

/// One team's statistics for a fixture.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticBlock {
    pub team_id: Option<TeamId>,
    pub entries: Vec<StatEntry>,
}

impl StatisticBlock {
    pub fn belongs_to(&self, team_id: TeamId) -> bool {
        self.team_id == Some(team_id)
    }

    /// First numeric value whose label contains `marker`.
    ///
    /// Provider vocabularies differ ("Total Shots", "Shots on Goal", "xG",
    /// "xg_first_half"), so labels are matched loosely and the first
    /// usable entry wins.
    pub fn value_of(&self, marker: &str) -> Option<f64> {
        self.entries
            .iter()
            .filter(|entry| entry.matches(marker))
            .find_map(|entry| entry.value)
    }
}

/// A fixture as returned by the data provider, already normalized.
///
/// Used both for the day's fixtures under evaluation and for a team's
/// recent history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalFixture {
    pub fixture_id: Option<FixtureId>,
    pub home: TeamRef,
    pub away: TeamRef,
    pub half_time: Option<HalfTimeScore>,
    pub statistics: Vec<StatisticBlock>,
    /// League reference, passed through untouched.
    pub league: Option<Value>,
    /// Original provider JSON for this fixture.
    pub raw: Value,
}

impl HistoricalFixture {
    pub fn is_home(&self, team_id: TeamId) -> bool {
        self.home.id == Some(team_id)
    }

    pub fn statistics_for(&self, team_id: TeamId) -> Option<&StatisticBlock> {
        self.statistics.iter().find(|block| block.belongs_to(team_id))
    }
}

// ============================================================================
// Derived records
// ============================================================================

/// Derived per-team indicators. Missing evidence is always 0, never absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamIndicator {
    /// Share of recent fixtures with a first-half goal, in [0, 1].
    pub ht_goal_pct: f64,
    /// Mean estimated first-half shots, rounded to 2 decimals.
    pub avg_shots_ht: f64,
    /// Expected goals at half-time (provider figure or shots proxy).
    #[serde(rename = "xG_ht")]
    pub xg_ht: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSide {
    pub id: Option<TeamId>,
    pub name: Option<String>,
    #[serde(flatten)]
    pub indicator: TeamIndicator,
}

/// Fixture identifier: the provider id, or `"{home}-{away}-{date}"` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MatchId {
    Fixture(FixtureId),
    Synthetic(String),
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchId::Fixture(id) => write!(f, "{id}"),
            MatchId::Synthetic(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    /// Date the record was produced (not the kickoff date).
    pub date: NaiveDate,
    pub league: Option<Value>,
    pub home: MatchSide,
    pub away: MatchSide,
    pub raw: Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterBreakdown {
    pub max_pct: f64,
    pub total_shots: f64,
    pub avg_xg: f64,
    pub home_pct: f64,
    pub away_pct: f64,
    pub home_shots: f64,
    pub away_shots: f64,
    pub home_xg: f64,
    pub away_xg: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterVerdict {
    pub pass: bool,
    pub score: f64,
    pub reason: String,
    pub derived: FilterBreakdown,
}

/// A scored fixture. Serializes as the match record with the verdict under `_filter`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterResult {
    #[serde(flatten)]
    pub record: MatchRecord,
    #[serde(rename = "_filter")]
    pub filter: FilterVerdict,
}

impl FilterResult {
    pub fn score(&self) -> f64 {
        self.filter.score
    }

    pub fn passes(&self) -> bool {
        self.filter.pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(team_id: TeamId, entries: &[(&str, Option<f64>)]) -> StatisticBlock {
        StatisticBlock {
            team_id: Some(team_id),
            entries: entries
                .iter()
                .map(|(kind, value)| StatEntry {
                    kind: kind.to_string(),
                    value: *value,
                })
                .collect(),
        }
    }

    #[test]
    fn test_value_of_is_case_insensitive_substring() {
        let stats = block(7, &[("Ball Possession", Some(55.0)), ("Total Shots", Some(12.0))]);
        assert_eq!(stats.value_of("shot"), Some(12.0));
        assert_eq!(stats.value_of("xg"), None);
    }

    #[test]
    fn test_value_of_skips_entries_without_numbers() {
        let stats = block(7, &[("Shots on Goal", None), ("Total Shots", Some(9.0))]);
        assert_eq!(stats.value_of("shot"), Some(9.0));
    }

    #[test]
    fn test_match_id_serializes_untagged() {
        assert_eq!(serde_json::to_value(MatchId::Fixture(99)).unwrap(), json!(99));
        assert_eq!(
            serde_json::to_value(MatchId::Synthetic("1-2-2026-10-17".into())).unwrap(),
            json!("1-2-2026-10-17")
        );
    }

    #[test]
    fn test_match_side_flattens_indicator() {
        let side = MatchSide {
            id: Some(33),
            name: Some("Home FC".into()),
            indicator: TeamIndicator {
                ht_goal_pct: 0.3,
                avg_shots_ht: 2.5,
                xg_ht: 0.4,
            },
        };
        let value = serde_json::to_value(&side).unwrap();
        assert_eq!(value["ht_goal_pct"], json!(0.3));
        assert_eq!(value["avg_shots_ht"], json!(2.5));
        assert_eq!(value["xG_ht"], json!(0.4));
    }
}

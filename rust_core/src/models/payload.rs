//! Provider payload decoding
//!
//! Normalizes loosely-typed API-Football JSON into the fixed model shapes.
//! Field names vary between endpoints and API generations (`score` vs
//! `goals`, `halftime` vs `ht`, `teams.home` vs `home`), values may be
//! null, and ids or statistic values may arrive as strings. Decoding never
//! fails: anything malformed decodes to an absent field.

use serde_json::Value;

use super::{FixtureId, HalfTimeScore, HistoricalFixture, StatEntry, StatisticBlock, TeamId, TeamRef};

/// Items of a provider response envelope (`response`, else `data`).
pub fn response_items(body: &Value) -> Vec<Value> {
    ["response", "data"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_array))
        .cloned()
        .unwrap_or_default()
}

/// Decode every fixture in a response envelope.
pub fn decode_fixtures(body: &Value) -> Vec<HistoricalFixture> {
    response_items(body).into_iter().map(decode_fixture).collect()
}

/// Decode every statistic block in a response envelope.
pub fn decode_statistic_blocks(body: &Value) -> Vec<StatisticBlock> {
    decode_statistic_items(&response_items(body))
}

/// Decode already-unwrapped statistic items; non-objects are skipped.
pub fn decode_statistic_items(items: &[Value]) -> Vec<StatisticBlock> {
    items.iter().filter_map(decode_block).collect()
}

pub fn decode_fixture(raw: Value) -> HistoricalFixture {
    let fixture_id = raw
        .get("fixture")
        .and_then(|f| f.get("id"))
        .and_then(as_id)
        .or_else(|| raw.get("id").and_then(as_id));

    let home = decode_team(&raw, "home");
    let away = decode_team(&raw, "away");
    let half_time = decode_half_time(&raw);

    let statistics = raw
        .get("statistics")
        .and_then(Value::as_array)
        .map(|blocks| blocks.iter().filter_map(decode_block).collect())
        .unwrap_or_default();

    let league = raw.get("league").filter(|v| !v.is_null()).cloned();

    HistoricalFixture {
        fixture_id,
        home,
        away,
        half_time,
        statistics,
        league,
        raw,
    }
}

fn decode_team(raw: &Value, side: &str) -> TeamRef {
    let team = raw
        .get("teams")
        .and_then(|t| t.get(side))
        .filter(|t| t.is_object())
        .or_else(|| raw.get(side).filter(|t| t.is_object()));

    let Some(team) = team else {
        return TeamRef::default();
    };

    TeamRef {
        id: team.get("id").and_then(as_id),
        name: team.get("name").and_then(Value::as_str).map(str::to_string),
    }
}

/// The half-time line lives under `score`, else `goals`, else the fixture
/// itself; only the first non-empty container is inspected.
fn decode_half_time(raw: &Value) -> Option<HalfTimeScore> {
    let container = ["score", "goals"]
        .iter()
        .find_map(|key| raw.get(*key).filter(|v| is_non_empty_object(v)))
        .unwrap_or(raw);

    let half_time = ["halftime", "ht"]
        .iter()
        .find_map(|key| container.get(*key).filter(|v| is_non_empty_object(v)))?;

    Some(HalfTimeScore {
        home: half_time.get("home").and_then(as_count),
        away: half_time.get("away").and_then(as_count),
    })
}

fn decode_block(block: &Value) -> Option<StatisticBlock> {
    if !block.is_object() {
        return None;
    }

    let team_id = block
        .get("team")
        .filter(|t| t.is_object())
        .and_then(|t| t.get("id"))
        .and_then(as_id);

    let entries = block
        .get("statistics")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(decode_entry).collect())
        .unwrap_or_default();

    Some(StatisticBlock { team_id, entries })
}

fn decode_entry(entry: &Value) -> Option<StatEntry> {
    if !entry.is_object() {
        return None;
    }
    let kind = ["type", "name"]
        .iter()
        .find_map(|key| entry.get(*key).and_then(Value::as_str).filter(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string();

    Some(StatEntry {
        kind,
        value: entry.get("value").and_then(as_number),
    })
}

fn is_non_empty_object(v: &Value) -> bool {
    v.as_object().is_some_and(|o| !o.is_empty())
}

/// Numbers pass through; numeric strings ("1.23", " 7 ") are parsed.
/// Percentages and other text are not numbers.
fn as_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn as_id(v: &Value) -> Option<TeamId> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0 && f.fract() == 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<FixtureId>().ok(),
        _ => None,
    }
}

fn as_count(v: &Value) -> Option<u32> {
    as_number(v)
        .filter(|n| *n >= 0.0)
        .map(|n| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_api_football_fixture() {
        let raw = json!({
            "fixture": {"id": 1035037, "date": "2024-12-03T20:00:00+00:00"},
            "league": {"id": 39, "name": "Premier League"},
            "teams": {
                "home": {"id": 33, "name": "Manchester United"},
                "away": {"id": 40, "name": "Liverpool"}
            },
            "goals": {"home": 2, "away": 1},
            "score": {
                "halftime": {"home": 1, "away": 0},
                "fulltime": {"home": 2, "away": 1}
            }
        });

        let fixture = decode_fixture(raw.clone());
        assert_eq!(fixture.fixture_id, Some(1035037));
        assert_eq!(fixture.home.id, Some(33));
        assert_eq!(fixture.away.name.as_deref(), Some("Liverpool"));
        assert_eq!(
            fixture.half_time,
            Some(HalfTimeScore {
                home: Some(1),
                away: Some(0)
            })
        );
        assert_eq!(fixture.league, Some(json!({"id": 39, "name": "Premier League"})));
        assert_eq!(fixture.raw, raw);
    }

    #[test]
    fn test_decodes_flat_shape_with_string_ids() {
        let raw = json!({
            "id": "77",
            "home": {"id": "10", "name": "A"},
            "away": {"id": 11},
            "goals": {"ht": {"home": null, "away": 2}}
        });

        let fixture = decode_fixture(raw);
        assert_eq!(fixture.fixture_id, Some(77));
        assert_eq!(fixture.home.id, Some(10));
        assert_eq!(fixture.away.id, Some(11));
        assert_eq!(fixture.away.name, None);
        assert_eq!(
            fixture.half_time,
            Some(HalfTimeScore {
                home: None,
                away: Some(2)
            })
        );
    }

    #[test]
    fn test_half_time_only_checked_in_first_container() {
        // `score` exists but has no half-time line; `goals` is not consulted.
        let raw = json!({
            "score": {"fulltime": {"home": 1, "away": 1}},
            "goals": {"halftime": {"home": 1, "away": 1}}
        });
        assert_eq!(decode_fixture(raw).half_time, None);
    }

    #[test]
    fn test_missing_everything_decodes_to_defaults() {
        let fixture = decode_fixture(json!({}));
        assert_eq!(fixture.fixture_id, None);
        assert_eq!(fixture.home, TeamRef::default());
        assert_eq!(fixture.half_time, None);
        assert!(fixture.statistics.is_empty());
        assert_eq!(fixture.league, None);
    }

    #[test]
    fn test_decodes_statistics_envelope() {
        let body = json!({
            "response": [
                {
                    "team": {"id": 33},
                    "statistics": [
                        {"type": "Shots on Goal", "value": 6},
                        {"type": "Ball Possession", "value": "61%"},
                        {"type": "expected_goals", "value": "1.42"},
                        {"name": "xG", "value": null}
                    ]
                },
                {"team": null, "statistics": []},
                "garbage"
            ]
        });

        let blocks = decode_statistic_blocks(&body);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].team_id, Some(33));
        assert_eq!(blocks[0].entries.len(), 4);
        assert_eq!(blocks[0].entries[0].value, Some(6.0));
        assert_eq!(blocks[0].entries[1].value, None);
        assert_eq!(blocks[0].entries[2].value, Some(1.42));
        assert_eq!(blocks[0].entries[3].kind, "xG");
        assert_eq!(blocks[1].team_id, None);
    }

    #[test]
    fn test_envelope_falls_back_to_data() {
        let body = json!({"data": [{"id": 1}, {"id": 2}]});
        assert_eq!(decode_fixtures(&body).len(), 2);
        assert!(response_items(&json!({"errors": {"token": "bad"}})).is_empty());
        assert!(response_items(&Value::Null).is_empty());
    }
}

//! Composite first-half score and pass/fail verdict.
//!
//! Pure functions over a `MatchRecord`; no I/O and no hidden state.

use crate::models::{FilterBreakdown, FilterResult, FilterVerdict, MatchRecord};

/// Either side at or above this half-time goal rate passes on its own.
pub const MIN_HT_GOAL_PCT: f64 = 0.25;

/// Combined average first-half shots needed for the volume rule.
pub const MIN_TOTAL_SHOTS: f64 = 2.5;

/// Average half-time xG needed for the volume rule.
pub const MIN_AVG_XG: f64 = 0.2;

pub const PASS_REASON: &str = "Meets criteria (pct/xG/shots)";
pub const FAIL_REASON: &str = "Does not meet criteria";

/// Round half away from zero to 2 decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derived values the score and verdict are computed from.
pub fn breakdown(record: &MatchRecord) -> FilterBreakdown {
    let home = &record.home.indicator;
    let away = &record.away.indicator;

    // Dividing by 1 when both sides are 0 keeps a genuine zero from being
    // treated as a diluted average.
    let xg_divisor = if home.xg_ht != 0.0 || away.xg_ht != 0.0 {
        2.0
    } else {
        1.0
    };

    FilterBreakdown {
        max_pct: home.ht_goal_pct.max(away.ht_goal_pct),
        total_shots: home.avg_shots_ht + away.avg_shots_ht,
        avg_xg: (home.xg_ht + away.xg_ht) / xg_divisor,
        home_pct: home.ht_goal_pct,
        away_pct: away.ht_goal_pct,
        home_shots: home.avg_shots_ht,
        away_shots: away.avg_shots_ht,
        home_xg: home.xg_ht,
        away_xg: away.xg_ht,
    }
}

/// Each term is rounded on its own before summing.
pub fn composite_score(derived: &FilterBreakdown) -> f64 {
    round2(derived.max_pct * 100.0) + round2(derived.avg_xg * 10.0) + round2(derived.total_shots)
}

/// A strong half-time history on either side, or enough shot volume backed by xG.
pub fn passes(derived: &FilterBreakdown) -> bool {
    derived.max_pct >= MIN_HT_GOAL_PCT
        || (derived.total_shots >= MIN_TOTAL_SHOTS && derived.avg_xg >= MIN_AVG_XG)
}

pub fn evaluate(record: &MatchRecord) -> FilterVerdict {
    let derived = breakdown(record);
    let pass = passes(&derived);

    FilterVerdict {
        pass,
        score: composite_score(&derived),
        reason: if pass { PASS_REASON } else { FAIL_REASON }.to_string(),
        derived,
    }
}

pub fn score_and_filter(record: MatchRecord) -> FilterResult {
    let filter = evaluate(&record);
    FilterResult { record, filter }
}

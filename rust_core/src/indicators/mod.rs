//! Per-team indicators derived from provider data.
//!
//! - `extract`: half-time goal flag and shots proxy from one past fixture
//! - `history`: reduce a team's recent fixtures into rates and averages
//! - `expected_goals`: resolve half-time xG for both sides of a fixture

pub mod expected_goals;
pub mod extract;
pub mod history;

pub use expected_goals::{resolve_expected_goals, ExpectedGoals};
pub use extract::{extract_half_time_goal, extract_shots_proxy, shots_sample, HalfTimeGoal};
pub use history::{aggregate_history, HistoryIndicators};

/// Label marker for shot counts.
pub const SHOTS_MARKER: &str = "shot";

/// Label marker for expected-goals figures.
pub const XG_MARKER: &str = "xg";

/// Providers report full-match shots; half of that stands in for the first half.
pub fn first_half_share(full_match: f64) -> f64 {
    full_match / 2.0
}

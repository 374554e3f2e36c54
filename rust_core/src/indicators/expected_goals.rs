use crate::models::{StatisticBlock, TeamId};

use super::{first_half_share, SHOTS_MARKER, XG_MARKER};

/// Half-time expected goals for both sides of one fixture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ExpectedGoals {
    pub home: f64,
    pub away: f64,
}

/// Resolve half-time xG from a fixture's statistic blocks.
///
/// A block's explicit xG figure is written straight to its side, so a later
/// xG block replaces an earlier one. Without an xG figure, half the block's
/// shot count stands in, but only while the side still holds zero. Once a
/// side holds a shots-derived figure, later xG blocks leave it alone. Sides
/// with no matching block stay at 0.
pub fn resolve_expected_goals(
    blocks: &[StatisticBlock],
    home_id: Option<TeamId>,
    away_id: Option<TeamId>,
) -> ExpectedGoals {
    let mut home = SideXg::default();
    let mut away = SideXg::default();

    for block in blocks {
        if block.entries.is_empty() {
            continue;
        }
        let estimate = match block.value_of(XG_MARKER) {
            Some(xg) => Estimate::Explicit(xg),
            None => match block.value_of(SHOTS_MARKER) {
                Some(shots) => Estimate::ShotsProxy(first_half_share(shots)),
                None => continue,
            },
        };

        if home_id.is_some_and(|id| block.belongs_to(id)) {
            home.apply(estimate);
        }
        if away_id.is_some_and(|id| block.belongs_to(id)) {
            away.apply(estimate);
        }
    }

    ExpectedGoals {
        home: home.value,
        away: away.value,
    }
}

#[derive(Debug, Clone, Copy)]
enum Estimate {
    Explicit(f64),
    ShotsProxy(f64),
}

#[derive(Debug, Clone, Copy, Default)]
struct SideXg {
    value: f64,
    from_shots: bool,
}

impl SideXg {
    fn apply(&mut self, estimate: Estimate) {
        match estimate {
            Estimate::Explicit(xg) if !self.from_shots => self.value = xg,
            Estimate::Explicit(_) => {}
            Estimate::ShotsProxy(proxy) => {
                if self.value == 0.0 {
                    self.value = proxy;
                    self.from_shots = true;
                }
            }
        }
    }
}

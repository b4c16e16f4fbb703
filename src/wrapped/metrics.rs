use super::sample::{GameweekSample, PlayerIndex};
use super::types::GameweekScore;
use crate::fpl::types::GameweekHistory;
use crate::model::RawMetrics;

/// Starters owned by fewer than this percentage count as differentials.
pub const DIFFERENTIAL_OWNERSHIP: f64 = 10.0;
/// Captaining a player owned by fewer than this percentage is a risky armband.
pub const RISKY_CAPTAIN_OWNERSHIP: f64 = 20.0;
/// Points deducted per transfer beyond the free allowance.
pub const HIT_COST: f64 = 4.0;

/// Running sums for one ordered pass over the season's gameweek samples.
#[derive(Debug, Clone, Default)]
pub struct MetricAccumulator {
    /// Sum over gameweeks of mean starter ownership.
    pub template_sum: f64,
    /// Gameweeks with at least one starter.
    pub starter_weeks: u32,
    /// Multiplied points of all starters sampled.
    pub sampled_points: i32,
    pub differential_points: i32,
    pub risky_captaincies: u32,
    /// Raw points left on the bench across the season.
    pub bench_points: i32,
    /// Gameweek with the highest bench subtotal; earliest wins ties.
    pub worst_bench: Option<GameweekScore>,
}

impl MetricAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, sample: &GameweekSample, players: &PlayerIndex) {
        let mut gw_ownership = 0.0;
        let mut gw_starters = 0u32;
        let mut gw_bench = 0;

        for pick in &sample.picks {
            let raw = sample.points(pick.element);
            let owned = players.get(pick.element).ownership();

            if pick.is_starter() {
                let pts = raw * pick.multiplier as i32;
                gw_ownership += owned;
                gw_starters += 1;
                self.sampled_points += pts;
                if owned < DIFFERENTIAL_OWNERSHIP {
                    self.differential_points += pts;
                }
                if pick.is_captain && owned < RISKY_CAPTAIN_OWNERSHIP {
                    self.risky_captaincies += 1;
                }
            } else {
                self.bench_points += raw;
                gw_bench += raw;
            }
        }

        if self.worst_bench.is_none_or(|w| gw_bench > w.points) {
            self.worst_bench = Some(GameweekScore {
                gw: sample.event,
                points: gw_bench,
            });
        }

        if gw_starters > 0 {
            self.template_sum += gw_ownership / gw_starters as f64;
            self.starter_weeks += 1;
        }
    }

    /// Season rates. `history` supplies transfer counts, hit costs and the
    /// final points total; every ratio is guarded against a zero denominator.
    pub fn raw_metrics(&self, history: &[GameweekHistory]) -> RawMetrics {
        let weeks = history.len() as f64;
        let transfers: u32 = history.iter().map(|h| h.event_transfers).sum();
        let hit_cost: u32 = history.iter().map(|h| h.event_transfers_cost).sum();
        let total_points = history.last().map(|h| h.total_points).unwrap_or(0);

        let per_week = |sum: f64| if weeks > 0.0 { sum / weeks } else { 0.0 };
        let per_starter_week = |sum: f64| {
            if self.starter_weeks > 0 {
                sum / self.starter_weeks as f64
            } else {
                0.0
            }
        };

        let differential_share = if self.sampled_points > 0 {
            self.differential_points as f64 / self.sampled_points as f64
        } else {
            0.0
        };

        let bench_denominator = total_points + self.bench_points;
        let bench_share = if bench_denominator > 0 {
            self.bench_points as f64 / bench_denominator as f64
        } else {
            0.0
        };

        RawMetrics {
            template: per_starter_week(self.template_sum),
            churn: per_week(transfers as f64),
            hits: per_week(hit_cost as f64) / HIT_COST,
            differential_share,
            captaincy_risk: per_starter_week(self.risky_captaincies as f64),
            bench_share,
        }
    }
}

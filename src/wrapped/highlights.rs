use super::sample::{GameweekSample, PlayerIndex, SeasonSamples};
use super::types::{
    BenchWeek, CaptainTally, ChipUsage, Differential, GameweekScore, NamedPoints, RankJump,
    SquadMember, TransferHighlight,
};
use crate::fpl::types::{ChipPlay, GameweekHistory, Transfer};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Minimum fractional rank improvement worth celebrating.
pub const MIN_RANK_IMPROVEMENT: f64 = 0.05;
/// A pick "returned" when it scored at least this many (multiplied) points.
pub const RETURN_POINTS: i32 = 4;

pub const TOP_RANK_JUMPS: usize = 3;
pub const TOP_DIFFERENTIALS: usize = 3;
pub const TOP_BENCH_PLAYERS: usize = 3;
pub const TOP_TRANSFERS: usize = 3;
pub const TOP_CAPTAINS: usize = 5;
pub const SQUAD_SIZE: usize = 15;

/// Highest and lowest scoring gameweeks. Ties keep chronological order, so
/// the best is the earliest of the top scores and the worst the latest of
/// the bottom ones.
pub fn best_and_worst(history: &[GameweekHistory]) -> Option<(GameweekScore, GameweekScore)> {
    let mut sorted: Vec<&GameweekHistory> = history.iter().collect();
    sorted.sort_by(|a, b| b.points.cmp(&a.points));
    let best = sorted.first()?;
    let worst = sorted.last()?;
    Some((
        GameweekScore {
            gw: best.event,
            points: best.points,
        },
        GameweekScore {
            gw: worst.event,
            points: worst.points,
        },
    ))
}

/// Counts of gameweeks whose overall rank improved / worsened on the previous one.
pub fn rank_arrows(history: &[GameweekHistory]) -> (usize, usize) {
    history.windows(2).fold((0, 0), |(green, red), w| {
        match w[1].overall_rank.cmp(&w[0].overall_rank) {
            Ordering::Less => (green + 1, red),
            Ordering::Greater => (green, red + 1),
            Ordering::Equal => (green, red),
        }
    })
}

/// Gameweeks whose rank improved by more than 5%, biggest relative jump first.
pub fn rank_jumps(history: &[GameweekHistory]) -> Vec<RankJump> {
    let mut jumps: Vec<RankJump> = history
        .windows(2)
        .filter_map(|w| {
            let (prev, curr) = (w[0].overall_rank, w[1].overall_rank);
            if prev <= curr {
                return None;
            }
            let score = (prev - curr) as f64 / prev as f64;
            (score > MIN_RANK_IMPROVEMENT).then_some(RankJump {
                event: w[1].event,
                rank_delta: prev - curr,
                points: w[1].points,
                rank: curr,
                score,
            })
        })
        .collect();
    jumps.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    jumps
}

/// Lowest-owned starters that returned in `sample`. Empty without live data.
pub fn differentials(sample: Option<&GameweekSample>, players: &PlayerIndex) -> Vec<Differential> {
    let Some(sample) = sample.filter(|s| s.has_live()) else {
        return Vec::new();
    };
    let mut picks: Vec<Differential> = sample
        .picks
        .iter()
        .filter(|p| p.is_starter())
        .map(|p| {
            let el = players.get(p.element);
            Differential {
                name: el.web_name.clone(),
                points: sample.points(p.element) * p.multiplier as i32,
                owned: el.ownership(),
            }
        })
        .filter(|d| d.points >= RETURN_POINTS)
        .collect();
    picks.sort_by(|a, b| a.owned.partial_cmp(&b.owned).unwrap_or(Ordering::Equal));
    picks.truncate(TOP_DIFFERENTIALS);
    picks
}

/// Detail for the week with the most points left on the bench.
pub fn bench_week(
    worst: Option<GameweekScore>,
    samples: &SeasonSamples,
    players: &PlayerIndex,
) -> BenchWeek {
    let Some(worst) = worst else {
        return BenchWeek::default();
    };
    let mut week = BenchWeek {
        event: worst.gw,
        players: Vec::new(),
        total: worst.points,
    };
    if let Some(sample) = samples.get(worst.gw).filter(|s| s.has_live()) {
        let mut bench: Vec<NamedPoints> = sample
            .picks
            .iter()
            .filter(|p| !p.is_starter())
            .map(|p| NamedPoints {
                name: players.get(p.element).web_name.clone(),
                points: sample.points(p.element),
            })
            .collect();
        bench.sort_by(|a, b| b.points.cmp(&a.points));
        bench.truncate(TOP_BENCH_PLAYERS);
        week.players = bench;
    }
    week
}

/// Display name for an upstream chip code.
pub fn chip_display_name(code: &str) -> String {
    match code {
        "3xc" => "Triple Captain".into(),
        other => other.to_string(),
    }
}

/// Each chip with that gameweek's points and the rank movement versus the
/// gameweek before it (0 when either side is missing).
pub fn chip_usage(chips: &[ChipPlay], history: &[GameweekHistory]) -> Vec<ChipUsage> {
    let find = |event: u32| history.iter().find(|h| h.event == event);
    chips
        .iter()
        .map(|chip| {
            let curr = find(chip.event);
            let prev = chip.event.checked_sub(1).and_then(find);
            let rank_delta = match (prev, curr) {
                (Some(p), Some(c)) => p.overall_rank as i64 - c.overall_rank as i64,
                _ => 0,
            };
            ChipUsage {
                name: chip_display_name(&chip.name),
                gw: chip.event,
                points: curr.map(|c| c.points).unwrap_or(0),
                rank_delta,
            }
        })
        .collect()
}

/// Incoming players who started the week they arrived and returned.
pub fn best_transfers(
    transfers: &[Transfer],
    samples: &SeasonSamples,
    players: &PlayerIndex,
) -> Vec<TransferHighlight> {
    let mut seen = HashSet::new();
    let mut best: Vec<TransferHighlight> = transfers
        .iter()
        .filter(|t| seen.insert((t.event, t.element_in)))
        .filter_map(|t| {
            let sample = samples.get(t.event)?;
            let pick = sample.pick_for(t.element_in).filter(|p| p.is_starter())?;
            Some(TransferHighlight {
                name: players.get(t.element_in).web_name.clone(),
                gw: t.event,
                points: sample.points(t.element_in) * pick.multiplier as i32,
            })
        })
        .filter(|t| t.points >= RETURN_POINTS)
        .collect();
    best.sort_by(|a, b| b.points.cmp(&a.points));
    best.truncate(TOP_TRANSFERS);
    best
}

/// Per-player captaincy counts. The bonus of an armband is the base score
/// itself, since the second multiplier unit is the extra.
pub fn captain_ledger(samples: &SeasonSamples, players: &PlayerIndex) -> Vec<CaptainTally> {
    let mut order: Vec<CaptainTally> = Vec::new();
    let mut slots: HashMap<u32, usize> = HashMap::new();

    for sample in samples.iter() {
        let Some(cap) = sample.captain() else {
            continue;
        };
        let slot = *slots.entry(cap.element).or_insert_with(|| {
            order.push(CaptainTally {
                name: players.get(cap.element).web_name.clone(),
                times: 0,
                bonus_points: 0,
            });
            order.len() - 1
        });
        order[slot].times += 1;
        order[slot].bonus_points += sample.points(cap.element);
    }

    order.sort_by(|a, b| b.bonus_points.cmp(&a.bonus_points));
    order.truncate(TOP_CAPTAINS);
    order
}

/// Top scorers across the season, counting multiplied points only (bench
/// picks contribute nothing). Gameweeks without live data are skipped.
pub fn dream_squad(samples: &SeasonSamples, players: &PlayerIndex) -> Vec<SquadMember> {
    let mut order: Vec<SquadMember> = Vec::new();
    let mut slots: HashMap<u32, usize> = HashMap::new();

    for sample in samples.iter().filter(|s| s.has_live()) {
        for pick in &sample.picks {
            let slot = *slots.entry(pick.element).or_insert_with(|| {
                let el = players.get(pick.element);
                order.push(SquadMember {
                    id: pick.element,
                    name: el.web_name.clone(),
                    pos: el.element_type,
                    team: el.team,
                    points: 0,
                });
                order.len() - 1
            });
            order[slot].points += sample.points(pick.element) * pick.multiplier as i32;
        }
    }

    order.sort_by(|a, b| b.points.cmp(&a.points));
    order.truncate(SQUAD_SIZE);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrapped::sample::fixtures::*;

    fn ranks(seq: &[u64]) -> Vec<GameweekHistory> {
        seq.iter()
            .enumerate()
            .map(|(i, &r)| GameweekHistory {
                event: i as u32 + 1,
                points: 40 + i as i32,
                total_points: 0,
                overall_rank: r,
                event_transfers: 0,
                event_transfers_cost: 0,
            })
            .collect()
    }

    #[test]
    fn rank_jumps_rank_by_relative_improvement() {
        let jumps = rank_jumps(&ranks(&[100, 100, 40, 50, 10]));
        let events: Vec<u32> = jumps.iter().map(|j| j.event).collect();
        assert_eq!(events, vec![5, 3]);
        assert!((jumps[0].score - 0.8).abs() < 1e-9);
        assert!((jumps[1].score - 0.6).abs() < 1e-9);
        assert_eq!(jumps[0].rank_delta, 40);
        assert_eq!(jumps[0].rank, 10);
    }

    #[test]
    fn small_rank_improvements_are_noise() {
        assert!(rank_jumps(&ranks(&[1000, 960, 951])).is_empty());
    }

    #[test]
    fn arrows_count_direction_changes() {
        assert_eq!(rank_arrows(&ranks(&[100, 100, 40, 50, 10])), (2, 1));
        assert_eq!(rank_arrows(&ranks(&[5])), (0, 0));
    }

    #[test]
    fn best_and_worst_keep_first_on_ties() {
        let mut history = ranks(&[1, 1, 1]);
        history[0].points = 70;
        history[1].points = 70;
        history[2].points = 30;
        let (best, worst) = best_and_worst(&history).unwrap();
        assert_eq!(best, GameweekScore { gw: 1, points: 70 });
        assert_eq!(worst, GameweekScore { gw: 3, points: 30 });
        assert!(best_and_worst(&[]).is_none());
    }

    #[test]
    fn differentials_are_lowest_owned_returners() {
        let players = index(vec![
            player(1, "A", "3.0"),
            player(2, "B", "1.0"),
            player(3, "C", "25.0"),
            player(4, "D", "0.5"),
            player(5, "E", "2.0"),
            player(6, "F", "0.1"),
        ]);
        // D blanks, F is benched.
        let s = sample(
            7,
            &[(1, 1, 6), (2, 1, 5), (3, 2, 8), (4, 1, 2), (5, 1, 4), (6, 0, 12)],
        );
        let names: Vec<String> = differentials(Some(&s), &players)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["B", "E", "A"]);
    }

    #[test]
    fn bench_week_lists_top_three_subs() {
        let players = index(vec![
            player(1, "GK2", "1"),
            player(2, "Sub1", "1"),
            player(3, "Sub2", "1"),
            player(4, "Sub3", "1"),
            player(5, "Starter", "1"),
        ]);
        let samples = SeasonSamples::new(vec![sample(
            4,
            &[(1, 0, 1), (2, 0, 9), (3, 0, 2), (4, 0, 6), (5, 1, 3)],
        )]);
        let week = bench_week(Some(GameweekScore { gw: 4, points: 18 }), &samples, &players);
        assert_eq!(week.event, 4);
        assert_eq!(week.total, 18);
        let pts: Vec<i32> = week.players.iter().map(|p| p.points).collect();
        assert_eq!(pts, vec![9, 6, 2]);
        assert_eq!(bench_week(None, &samples, &players), BenchWeek::default());
    }

    #[test]
    fn chips_report_rank_delta_versus_previous_gameweek() {
        let history = ranks(&[500, 300, 400]);
        let chips = vec![
            ChipPlay {
                name: "3xc".into(),
                event: 2,
            },
            ChipPlay {
                name: "bboost".into(),
                event: 3,
            },
            ChipPlay {
                name: "wildcard".into(),
                event: 1,
            },
        ];
        let usage = chip_usage(&chips, &history);
        assert_eq!(usage[0].name, "Triple Captain");
        assert_eq!(usage[0].rank_delta, 200);
        assert_eq!(usage[0].points, 41);
        assert_eq!(usage[1].name, "bboost");
        assert_eq!(usage[1].rank_delta, -100);
        assert_eq!(usage[2].rank_delta, 0);
    }

    #[test]
    fn benched_transfer_never_counts() {
        let players = index(vec![player(10, "Haul", "5"), player(11, "Bencher", "5")]);
        let samples = SeasonSamples::new(vec![sample(2, &[(10, 1, 9), (11, 0, 20)])]);
        let transfers = vec![
            Transfer {
                event: 2,
                element_in: 11,
                element_out: 1,
            },
            Transfer {
                event: 2,
                element_in: 10,
                element_out: 2,
            },
            Transfer {
                event: 2,
                element_in: 10,
                element_out: 3,
            },
        ];
        let best = best_transfers(&transfers, &samples, &players);
        assert_eq!(best.len(), 1);
        assert_eq!(best[0].name, "Haul");
        assert_eq!(best[0].points, 9);
    }

    #[test]
    fn transfer_points_use_multiplier() {
        let players = index(vec![player(10, "Cap", "5")]);
        let samples = SeasonSamples::new(vec![sample(5, &[(10, 2, 3)])]);
        let transfers = vec![Transfer {
            event: 5,
            element_in: 10,
            element_out: 0,
        }];
        assert_eq!(best_transfers(&transfers, &samples, &players)[0].points, 6);
    }

    #[test]
    fn captain_ledger_sums_base_scores() {
        let players = index(vec![player(1, "Haaland", "80"), player(2, "Salah", "60")]);
        let samples = SeasonSamples::new(vec![
            sample(1, &[(1, 2, 6)]),
            sample(2, &[(2, 2, 15)]),
            sample(3, &[(1, 2, 2)]),
            sample(4, &[(1, 3, 10)]),
        ]);
        let ledger = captain_ledger(&samples, &players);
        assert_eq!(
            ledger[0],
            CaptainTally {
                name: "Haaland".into(),
                times: 3,
                bonus_points: 18,
            }
        );
        assert_eq!(ledger[1].times, 1);
        assert_eq!(ledger[1].bonus_points, 15);
    }

    #[test]
    fn dream_squad_counts_multiplied_points() {
        let players = index(vec![player(1, "A", "1"), player(2, "B", "1")]);
        let samples = SeasonSamples::new(vec![
            sample(1, &[(1, 2, 5), (2, 0, 9)]),
            sample(2, &[(1, 1, 3), (2, 1, 4)]),
        ]);
        let squad = dream_squad(&samples, &players);
        assert_eq!(squad[0].id, 1);
        assert_eq!(squad[0].points, 13);
        assert_eq!(squad[1].points, 4);
        assert_eq!(squad[0].pos, 3);
    }
}

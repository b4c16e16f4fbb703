// Season digest engine: fetch -> per-gameweek samples -> metrics + highlights -> archetype.

pub mod highlights;
pub mod metrics;
pub mod sample;
pub mod types;

use crate::error::{Error, Result};
use crate::fpl::SeasonSource;
use crate::fpl::types::{EntryHistory, EntryProfile, Transfer};
use crate::model::{self, Classification};
use futures::future::join_all;
use metrics::MetricAccumulator;
use sample::{GameweekSample, PlayerIndex, SeasonSamples};
use tracing::{error, info, warn};
use types::{
    ArchetypeStats, BenchStory, Genome, ManagerDetails, RankJump, SeasonDigest, SeasonMeta,
    Series, Story, Style, TransferStory,
};

/// Gameweeks fetched concurrently per batch unless configured otherwise.
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Build the season digest for `entry_id`.
///
/// 1. History, bootstrap, transfers and entry profile are fetched together;
///    any failure aborts the build.
/// 2. An empty history is terminal (`Error::EmptyHistory`).
/// 3. Picks + live scores are fetched per gameweek in batches of
///    `batch_size`; a gameweek whose picks fail is dropped.
/// 4. One metric pass and the highlight extractors run over the samples.
pub async fn build_digest<S: SeasonSource + ?Sized>(
    source: &S,
    entry_id: u64,
    batch_size: usize,
) -> Result<SeasonDigest> {
    info!(entry_id, "building season digest");
    let result = build(source, entry_id, batch_size).await;
    if let Err(ref e) = result {
        error!(entry_id, error = %e, "season digest failed");
    }
    result
}

async fn build<S: SeasonSource + ?Sized>(
    source: &S,
    entry_id: u64,
    batch_size: usize,
) -> Result<SeasonDigest> {
    let (history, bootstrap, transfers, profile) = tokio::try_join!(
        source.history(entry_id),
        source.bootstrap(),
        source.transfers(entry_id),
        source.entry(entry_id),
    )?;

    if history.current.is_empty() {
        return Err(Error::EmptyHistory { entry_id });
    }

    let events: Vec<u32> = history.current.iter().map(|h| h.event).collect();
    let samples = fetch_samples(source, entry_id, &events, batch_size).await;
    info!(
        entry_id,
        gameweeks = events.len(),
        sampled = samples.len(),
        "gameweek data loaded"
    );

    let players = PlayerIndex::new(bootstrap);
    assemble(entry_id, &history, &transfers, &profile, &samples, &players)
}

/// Fetch picks and live scores for every gameweek, `batch_size` gameweeks at
/// a time. The next batch starts only once the current one has finished.
pub async fn fetch_samples<S: SeasonSource + ?Sized>(
    source: &S,
    entry_id: u64,
    events: &[u32],
    batch_size: usize,
) -> SeasonSamples {
    let mut samples = Vec::with_capacity(events.len());

    for batch in events.chunks(batch_size.max(1)) {
        let results = join_all(batch.iter().map(|&gw| async move {
            let (picks, live) = tokio::join!(source.picks(entry_id, gw), source.live(gw));
            match picks {
                Ok(picks) => Some(GameweekSample::new(gw, picks, live)),
                Err(e) => {
                    warn!(entry_id, gameweek = gw, error = %e, "gameweek picks missing, skipping");
                    None
                }
            }
        }))
        .await;
        samples.extend(results.into_iter().flatten());
    }

    SeasonSamples::new(samples)
}

/// Pure part of the build: everything after the data has been fetched.
pub fn assemble(
    entry_id: u64,
    history: &EntryHistory,
    transfers: &[Transfer],
    profile: &EntryProfile,
    samples: &SeasonSamples,
    players: &PlayerIndex,
) -> Result<SeasonDigest> {
    let current = &history.current;
    let last = current.last().ok_or(Error::EmptyHistory { entry_id })?;

    let mut acc = MetricAccumulator::new();
    for sample in samples.iter() {
        acc.observe(sample, players);
    }
    let raw = acc.raw_metrics(current);
    let classification = model::classify(&raw);

    let (best, worst) =
        highlights::best_and_worst(current).ok_or(Error::EmptyHistory { entry_id })?;
    let jumps = highlights::rank_jumps(current);
    let best_rank_gw = jumps.first().copied().unwrap_or_default();
    let best_rank_differentials = if best_rank_gw.event != 0 {
        highlights::differentials(samples.get(best_rank_gw.event), players)
    } else {
        Vec::new()
    };
    let top_rank_gws: Vec<RankJump> = jumps
        .iter()
        .take(highlights::TOP_RANK_JUMPS)
        .copied()
        .collect();
    let (green_arrows, red_arrows) = highlights::rank_arrows(current);

    let story = Story {
        best,
        worst,
        best_rank_gw,
        top_rank_gws,
        best_rank_differentials,
        bench: BenchStory {
            total: acc.bench_points,
            max: acc.worst_bench,
            weak: highlights::bench_week(acc.worst_bench, samples, players),
        },
        transfers: TransferStory {
            total: current.iter().map(|h| h.event_transfers).sum(),
            best: highlights::best_transfers(transfers, samples, players),
        },
        chips: highlights::chip_usage(&history.chips, current),
        captains: highlights::captain_ledger(samples, players),
        squad: highlights::dream_squad(samples, players),
        archetype_stats: archetype_stats(&classification),
        style: style(&classification),
    };

    Ok(SeasonDigest {
        entry_id,
        details: ManagerDetails {
            player: profile.player_name(),
            team: profile.name.clone(),
            region: profile.player_region_name.clone(),
        },
        meta: SeasonMeta {
            total_points: last.total_points,
            rank: last.overall_rank,
            green_arrows,
            red_arrows,
        },
        story,
        series: Series {
            ranks: current.iter().map(|h| h.overall_rank).collect(),
        },
    })
}

fn percent(v: f64) -> u32 {
    (v * 100.0).round() as u32
}

fn archetype_stats(c: &Classification) -> ArchetypeStats {
    let v = &c.vector;
    ArchetypeStats {
        transfer_activity: percent(v.get(1)),
        risk_score: percent(v.get(4)),
        differential_reliance: percent(v.get(3)),
        bench_efficiency: percent(1.0 - v.get(5)),
    }
}

fn style(c: &Classification) -> Style {
    let v = &c.vector;
    Style {
        archetype: c.archetype.name.to_string(),
        archetype_desc: c.archetype.description.to_string(),
        soul: c.archetype.color.to_string(),
        fingerprint: v.fingerprint().to_vec(),
        genome: Genome {
            template: v.get(0),
            churn: v.get(1),
            hits: v.get(2),
            diff: v.get(3),
            risk: v.get(4),
            bench: v.get(5),
        },
    }
}

use crate::fpl::types::{Bootstrap, GameweekPicks, LiveEvent, Pick, PlayerElement};
use std::collections::HashMap;

/// Bootstrap players by id. Ids missing from the table resolve to an
/// "Unknown" placeholder, so lookups never fail.
pub struct PlayerIndex {
    players: HashMap<u32, PlayerElement>,
    unknown: PlayerElement,
}

impl PlayerIndex {
    pub fn new(bootstrap: Bootstrap) -> Self {
        Self {
            players: bootstrap.elements.into_iter().map(|e| (e.id, e)).collect(),
            unknown: PlayerElement::unknown(0),
        }
    }

    pub fn get(&self, id: u32) -> &PlayerElement {
        self.players.get(&id).unwrap_or(&self.unknown)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// One gameweek whose picks were fetched. `live` is `None` when the live
/// scores could not be loaded; every player then counts as scoring 0.
#[derive(Debug, Clone)]
pub struct GameweekSample {
    pub event: u32,
    pub picks: Vec<Pick>,
    pub live: Option<HashMap<u32, i32>>,
}

impl GameweekSample {
    pub fn new(event: u32, picks: GameweekPicks, live: Option<LiveEvent>) -> Self {
        let live = live.map(|l| {
            l.elements
                .into_iter()
                .map(|e| (e.id, e.stats.total_points))
                .collect()
        });
        Self {
            event,
            picks: picks.picks,
            live,
        }
    }

    /// Raw (unmultiplied) score of `player` this gameweek.
    pub fn points(&self, player: u32) -> i32 {
        self.live
            .as_ref()
            .and_then(|l| l.get(&player).copied())
            .unwrap_or(0)
    }

    pub fn has_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn captain(&self) -> Option<&Pick> {
        self.picks.iter().find(|p| p.is_captain)
    }

    pub fn pick_for(&self, player: u32) -> Option<&Pick> {
        self.picks.iter().find(|p| p.element == player)
    }
}

/// Samples in gameweek order.
#[derive(Debug, Clone, Default)]
pub struct SeasonSamples {
    samples: Vec<GameweekSample>,
}

impl SeasonSamples {
    pub fn new(mut samples: Vec<GameweekSample>) -> Self {
        samples.sort_by_key(|s| s.event);
        Self { samples }
    }

    pub fn get(&self, event: u32) -> Option<&GameweekSample> {
        self.samples.iter().find(|s| s.event == event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameweekSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

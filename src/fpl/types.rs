use serde::{Deserialize, Serialize};

/// `/entry/{id}/history/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryHistory {
    #[serde(default)]
    pub current: Vec<GameweekHistory>,
    #[serde(default)]
    pub chips: Vec<ChipPlay>,
}

/// One completed gameweek in a manager's season.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GameweekHistory {
    pub event: u32,
    pub points: i32,
    pub total_points: i32,
    #[serde(default)]
    pub overall_rank: u64,
    #[serde(default)]
    pub event_transfers: u32,
    #[serde(default)]
    pub event_transfers_cost: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChipPlay {
    pub name: String,
    pub event: u32,
}

/// `/bootstrap-static/`, reduced to the player table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub elements: Vec<PlayerElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerElement {
    pub id: u32,
    pub web_name: String,
    /// Percentage of all managers owning the player, e.g. `"45.3"`.
    #[serde(default)]
    pub selected_by_percent: String,
    /// 1 = GK, 2 = DEF, 3 = MID, 4 = FWD.
    #[serde(default = "default_element_type")]
    pub element_type: u8,
    #[serde(default)]
    pub team: u32,
}

fn default_element_type() -> u8 {
    1
}

impl PlayerElement {
    /// Stand-in for ids missing from the bootstrap table.
    pub fn unknown(id: u32) -> Self {
        Self {
            id,
            web_name: "Unknown".into(),
            selected_by_percent: "0".into(),
            element_type: 1,
            team: 0,
        }
    }

    /// Ownership as a float percentage; unparsable values count as 0.
    pub fn ownership(&self) -> f64 {
        self.selected_by_percent.trim().parse().unwrap_or(0.0)
    }
}

/// `/entry/{id}/event/{gw}/picks/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameweekPicks {
    #[serde(default)]
    pub picks: Vec<Pick>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pick {
    pub element: u32,
    /// 0 bench, 1 starter, 2 captain, 3 triple captain.
    pub multiplier: u32,
    #[serde(default)]
    pub is_captain: bool,
}

impl Pick {
    pub fn is_starter(&self) -> bool {
        self.multiplier > 0
    }
}

/// `/event/{gw}/live/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveEvent {
    #[serde(default)]
    pub elements: Vec<LiveElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveElement {
    pub id: u32,
    pub stats: LiveStats,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveStats {
    #[serde(default)]
    pub total_points: i32,
}

/// One entry of `/entry/{id}/transfers/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transfer {
    pub event: u32,
    pub element_in: u32,
    #[serde(default)]
    pub element_out: u32,
}

/// `/entry/{id}/`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntryProfile {
    #[serde(default)]
    pub player_first_name: String,
    #[serde(default)]
    pub player_last_name: String,
    /// Team name.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub player_region_name: Option<String>,
}

impl EntryProfile {
    pub fn player_name(&self) -> String {
        format!("{} {}", self.player_first_name, self.player_last_name)
    }
}

/// `/leagues-classic/{id}/standings/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeagueResponse {
    pub standings: StandingsPage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StandingsPage {
    #[serde(default)]
    pub results: Vec<LeagueStanding>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeagueStanding {
    pub entry: u64,
    pub entry_name: String,
    pub player_name: String,
    #[serde(default)]
    pub rank: u32,
    #[serde(default)]
    pub total: i32,
}

use serde::{Deserialize, Serialize};

/// Everything a slide deck needs to tell one manager's season.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDigest {
    pub entry_id: u64,
    pub details: ManagerDetails,
    pub meta: SeasonMeta,
    pub story: Story,
    pub series: Series,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDetails {
    pub player: String,
    pub team: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonMeta {
    pub total_points: i32,
    pub rank: u64,
    /// Gameweeks where overall rank improved on the previous one.
    pub green_arrows: usize,
    pub red_arrows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub best: GameweekScore,
    pub worst: GameweekScore,
    pub best_rank_gw: RankJump,
    pub top_rank_gws: Vec<RankJump>,
    pub best_rank_differentials: Vec<Differential>,
    pub bench: BenchStory,
    pub transfers: TransferStory,
    pub chips: Vec<ChipUsage>,
    pub captains: Vec<CaptainTally>,
    pub squad: Vec<SquadMember>,
    pub archetype_stats: ArchetypeStats,
    pub style: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameweekScore {
    pub gw: u32,
    pub points: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankJump {
    pub event: u32,
    pub rank_delta: u64,
    pub points: i32,
    pub rank: u64,
    /// Fractional improvement, `(prev - curr) / prev`.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Differential {
    pub name: String,
    pub points: i32,
    pub owned: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchStory {
    pub total: i32,
    pub max: Option<GameweekScore>,
    pub weak: BenchWeek,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchWeek {
    pub event: u32,
    pub players: Vec<NamedPoints>,
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedPoints {
    pub name: String,
    pub points: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferStory {
    pub total: u32,
    pub best: Vec<TransferHighlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferHighlight {
    pub name: String,
    pub gw: u32,
    pub points: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChipUsage {
    pub name: String,
    pub gw: u32,
    pub points: i32,
    pub rank_delta: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptainTally {
    pub name: String,
    pub times: u32,
    pub bonus_points: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadMember {
    pub id: u32,
    pub name: String,
    pub pos: u8,
    pub team: u32,
    pub points: i32,
}

/// Feature vector re-expressed as whole percentages for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchetypeStats {
    pub transfer_activity: u32,
    pub risk_score: u32,
    pub differential_reliance: u32,
    pub bench_efficiency: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub archetype: String,
    pub archetype_desc: String,
    /// Display color of the archetype.
    pub soul: String,
    pub fingerprint: Vec<[f64; 2]>,
    pub genome: Genome,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    pub template: f64,
    pub churn: f64,
    pub hits: f64,
    pub diff: f64,
    pub risk: f64,
    pub bench: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub ranks: Vec<u64>,
}

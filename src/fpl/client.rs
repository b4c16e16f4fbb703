use super::types::{
    Bootstrap, EntryHistory, EntryProfile, GameweekPicks, LeagueResponse, LeagueStanding,
    LiveEvent, Transfer,
};
use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::HttpClient;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Everything the digest engine reads about one manager's season.
///
/// `FplClient` is the production implementation; tests drive the engine with
/// in-memory sources.
#[async_trait]
pub trait SeasonSource: Send + Sync {
    async fn history(&self, entry_id: u64) -> Result<EntryHistory>;
    async fn bootstrap(&self) -> Result<Bootstrap>;
    async fn picks(&self, entry_id: u64, gameweek: u32) -> Result<GameweekPicks>;
    async fn transfers(&self, entry_id: u64) -> Result<Vec<Transfer>>;
    async fn entry(&self, entry_id: u64) -> Result<EntryProfile>;
    /// Best-effort: `None` on any failure.
    async fn live(&self, gameweek: u32) -> Option<LiveEvent>;
}

/// Upstream FPL client with per-resource response caching.
pub struct FplClient {
    http: HttpClient,
    cache: TtlCache<Value>,
}

impl FplClient {
    pub fn new(http: HttpClient, cache_ttl: Duration) -> Self {
        Self {
            http,
            cache: TtlCache::new(cache_ttl),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let http = HttpClient::new(
            &config.api.base_url,
            &config.api.user_agent,
            Duration::from_secs(config.api.timeout_secs),
        )?;
        Ok(Self::new(http, Duration::from_secs(config.cache.ttl_secs)))
    }

    /// Fetch `endpoint`, memoized under `key`.
    async fn cached<T: DeserializeOwned>(&self, key: &str, endpoint: &str) -> Result<T> {
        let value = match self.cache.get(key) {
            Some(v) => {
                debug!(key, "cache hit");
                v
            }
            None => {
                debug!(key, endpoint, "cache miss");
                let fresh: Value = self.http.get_json(endpoint).await?;
                self.cache.put(key, fresh)
            }
        };
        serde_json::from_value(value).map_err(|e| Error::parse(format!("decode {endpoint}: {e}")))
    }

    /// Classic league standings. Failures are logged and yield an empty list.
    pub async fn league_standings(&self, league_id: u64) -> Vec<LeagueStanding> {
        let key = format!("l:{league_id}");
        if let Some(cached) = self.cache.get(&key) {
            if let Ok(rows) = serde_json::from_value::<Vec<LeagueStanding>>(cached) {
                return rows;
            }
        }

        let endpoint = format!("/leagues-classic/{league_id}/standings/");
        match self.http.get_json::<LeagueResponse>(&endpoint).await {
            Ok(resp) => {
                let rows = resp.standings.results;
                if let Ok(v) = serde_json::to_value(&rows) {
                    self.cache.put(key, v);
                }
                rows
            }
            Err(e) => {
                warn!(league_id, error = %e, "failed to fetch league standings");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl SeasonSource for FplClient {
    async fn history(&self, entry_id: u64) -> Result<EntryHistory> {
        self.cached(&format!("h:{entry_id}"), &format!("/entry/{entry_id}/history/"))
            .await
    }

    async fn bootstrap(&self) -> Result<Bootstrap> {
        self.cached("b:static", "/bootstrap-static/").await
    }

    async fn picks(&self, entry_id: u64, gameweek: u32) -> Result<GameweekPicks> {
        self.cached(
            &format!("p:{entry_id}:{gameweek}"),
            &format!("/entry/{entry_id}/event/{gameweek}/picks/"),
        )
        .await
    }

    async fn transfers(&self, entry_id: u64) -> Result<Vec<Transfer>> {
        self.cached(
            &format!("t:{entry_id}"),
            &format!("/entry/{entry_id}/transfers/"),
        )
        .await
    }

    async fn entry(&self, entry_id: u64) -> Result<EntryProfile> {
        self.cached(&format!("e:{entry_id}"), &format!("/entry/{entry_id}/"))
            .await
    }

    async fn live(&self, gameweek: u32) -> Option<LiveEvent> {
        match self
            .http
            .get_json::<LiveEvent>(&format!("/event/{gameweek}/live/"))
            .await
        {
            Ok(live) => Some(live),
            Err(e) => {
                debug!(gameweek, error = %e, "live scores unavailable");
                None
            }
        }
    }
}

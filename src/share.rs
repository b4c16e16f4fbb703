use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use uuid::Uuid;

pub fn default_share_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".fpl-wrapped").join("shares")
}

/// A shared digest. The payload is opaque to the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareRecord {
    pub id: String,
    pub payload: Value,
    pub created_at: DateTime<Utc>,
}

pub trait ShareStore {
    /// Persist `payload` under a freshly generated id.
    fn save(&self, payload: Value) -> Result<ShareRecord>;
    /// Fetch a record, or `Error::NotFound`.
    fn load(&self, id: &str) -> Result<ShareRecord>;
}

/// One JSON file per record.
pub struct FileShareStore {
    dir: PathBuf,
}

impl FileShareStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        if !is_valid_id(id) {
            return Err(Error::NotFound { id: id.to_string() });
        }
        Ok(self.dir.join(format!("{id}.json")))
    }
}

/// Share ids are ASCII alphanumerics and dashes; anything else could escape
/// the store directory.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 64
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl ShareStore for FileShareStore {
    fn save(&self, payload: Value) -> Result<ShareRecord> {
        let record = ShareRecord {
            id: Uuid::new_v4().simple().to_string(),
            payload,
            created_at: Utc::now(),
        };
        std::fs::create_dir_all(&self.dir)?;
        let body = serde_json::to_string_pretty(&record)
            .map_err(|e| Error::parse(format!("serialize share: {e}")))?;
        std::fs::write(self.path_for(&record.id)?, body)?;
        tracing::info!(id = %record.id, "share saved");
        Ok(record)
    }

    fn load(&self, id: &str) -> Result<ShareRecord> {
        let path = self.path_for(id)?;
        let body = match std::fs::read_to_string(&path) {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound { id: id.to_string() });
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&body).map_err(|e| Error::parse(format!("share {id}: {e}")))
    }
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Upstream error on {endpoint}: HTTP {status}")]
    Upstream { endpoint: String, status: u16 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("No history found for entry {entry_id}")]
    EmptyHistory { entry_id: u64 },

    #[error("Share {id} not found")]
    NotFound { id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn upstream(endpoint: impl Into<String>, status: u16) -> Self {
        Self::Upstream {
            endpoint: endpoint.into(),
            status,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Upstream HTTP status, if the failure came from a non-success response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

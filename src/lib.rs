pub mod cache;
pub mod config;
pub mod error;
pub mod fpl;
pub mod http;
pub mod model;
pub mod share;
pub mod wrapped;

pub use error::{Error, Result};
pub use wrapped::build_digest;
pub use wrapped::types::SeasonDigest;

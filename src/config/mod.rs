//! Configuration: TOML file plus environment overrides.

mod loader;
mod types;

pub use loader::{ConfigError, API_KEY_ENV, API_URL_ENV};
pub use types::{ApiConfig, Config, SearchConfig};

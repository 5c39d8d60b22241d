use std::net::SocketAddr;

const DEFAULT_DATABASE_URL: &str = "sqlite:data/lostfound.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Process settings, read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
}

#[derive(Debug)]
pub struct ConfigError {
    key: &'static str,
    value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.key, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind.parse().map_err(|_| ConfigError {
            key: "BIND_ADDR",
            value: bind.clone(),
        })?;

        Ok(Self {
            database_url,
            bind_addr,
        })
    }
}

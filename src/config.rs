//! Runtime configuration read from the environment (and `.env` in development)

use crate::pricing::distance::DISTANCE_MATRIX_URL;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Trip quotes are disabled when unset
    pub google_maps_api_key: Option<String>,
    pub distance_matrix_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup (the process env in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            google_maps_api_key: lookup("GOOGLE_MAPS_API_KEY").filter(|k| !k.trim().is_empty()),
            distance_matrix_url: lookup("DISTANCE_MATRIX_URL")
                .unwrap_or_else(|| DISTANCE_MATRIX_URL.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

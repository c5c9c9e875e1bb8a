use crate::server::error::config::ConfigError;

static DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// `DATABASE_URL` is required, `LISTEN_ADDR` falls back to `0.0.0.0:8080`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        if database_url.trim().is_empty() {
            return Err(ConfigError::InvalidEnvValue {
                var: "DATABASE_URL".to_string(),
                reason: "value is empty".to_string(),
            });
        }

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        if listen_addr.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidEnvValue {
                var: "LISTEN_ADDR".to_string(),
                reason: format!("{:?} is not a socket address", listen_addr),
            });
        }

        Ok(Self {
            database_url,
            listen_addr,
        })
    }
}

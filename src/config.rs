use derive_more::Display;

/// Environment variable names.
pub mod env_vars {
    pub const APP_TOKEN: &str = "APP_TOKEN";
    pub const ENCRYPTION_KEY: &str = "ENCRYPTION_KEY";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const PORT: &str = "PORT";
}

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum ConfigError {
    #[display(fmt = "env {} is not set", _0)]
    Missing(&'static str),
    #[display(fmt = "env {} is invalid: {}", _0, _1)]
    Invalid(&'static str, String),
}

/// Values read once at startup. The token and key are handed to the access
/// gate and the cipher; nothing reads them from the environment afterwards.
#[derive(Clone)]
pub struct Config {
    pub app_token: String,
    pub encryption_key: Vec<u8>,
    pub database_url: String,
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| match lookup(name) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(ConfigError::Missing(name)),
        };

        let port = match lookup(env_vars::PORT) {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid(env_vars::PORT, e.to_string()))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            app_token: required(env_vars::APP_TOKEN)?,
            encryption_key: required(env_vars::ENCRYPTION_KEY)?.into_bytes(),
            database_url: required(env_vars::DATABASE_URL)?,
            port,
        })
    }
}

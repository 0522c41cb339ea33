use std::fmt;

use crate::error::config::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite://silver.db?mode=rwc";

/// Runtime configuration loaded once at startup.
pub struct Config {
    /// Bot token used to authenticate with the Discord gateway.
    pub discord_token: String,
    /// Guild the slash commands are registered to.
    pub dev_guild_id: u64,
    /// SeaORM connection string for the ledger database.
    pub database_url: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// `.env` is expected to have been loaded beforehand with `dotenvy::dotenv()`, which
    /// never overrides variables already set in the environment.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DISCORD_TOKEN` or `DEV_GUILD_ID` unset or empty
    /// - `Err(ConfigError::InvalidEnvVar)` - `DEV_GUILD_ID` is not a valid snowflake
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Values are trimmed; empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let discord_token = get("DISCORD_TOKEN")
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let raw_guild_id = get("DEV_GUILD_ID")
            .ok_or_else(|| ConfigError::MissingEnvVar("DEV_GUILD_ID".to_string()))?;
        let dev_guild_id = parse_guild_id(&raw_guild_id)?;

        let database_url =
            get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        Ok(Self {
            discord_token,
            dev_guild_id,
            database_url,
        })
    }
}

fn parse_guild_id(value: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "DEV_GUILD_ID".to_string(),
        value: value.to_string(),
        reason,
    };

    let id = value.parse::<u64>().map_err(|e| invalid(e.to_string()))?;
    if id == 0 {
        return Err(invalid("guild id must be non-zero".to_string()));
    }

    Ok(id)
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("discord_token", &"<redacted>")
            .field("dev_guild_id", &self.dev_guild_id)
            .field("database_url", &self.database_url)
            .finish()
    }
}

use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

/// Configuration for the application, read from the environment.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// SQLite URL of the client database. `DATABASE_URL` in the
    /// environment; defaults to a file next to the binary.
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

fn default_database_url() -> String {
    "sqlite://clients.db?mode=rwc".to_string()
}

impl Config {
    /// Load variables from a `.env` file if present, then deserialize the
    /// environment into a `Config`.
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;
        Ok(config)
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

/// Initialize environment variables and load configuration.
pub fn init() -> Result<Config> {
    dotenv().ok();

    let config = Config::load()?;
    Ok(config)
}

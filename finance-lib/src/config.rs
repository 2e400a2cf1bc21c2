use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fs};

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SSLConfig {
    pub private_key_file: PathBuf,
    pub certificate_chain_file: PathBuf,
}

/// Where spans are exported over OTLP/gRPC. `headers` are sent as request
/// metadata, e.g. an API key for a hosted collector.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct TelemetryConfig {
    pub endpoint: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Postgres connection string. Without one the server keeps everything in memory.
    pub database_url: Option<String>,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    #[serde(default = "default_true")]
    pub run_migrations: bool,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// When false, login accepts any password for an existing username.
    #[serde(default = "default_true")]
    pub verify_login_password: bool,
    pub telemetry: Option<TelemetryConfig>,
    pub ssl: Option<SSLConfig>,
}

fn default_max_pool_size() -> u32 {
    10
}

fn default_true() -> bool {
    true
}

fn default_bind_address() -> String {
    "0.0.0.0:8000".to_string()
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        config.parse()
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        let database_url = env::var("DATABASE_URL").ok();
        let max_pool_size = parse_env("MAX_POOL_SIZE")?.unwrap_or_else(default_max_pool_size);
        let run_migrations = parse_env("RUN_MIGRATIONS")?.unwrap_or(true);
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| default_bind_address());
        let verify_login_password = parse_env("VERIFY_LOGIN_PASSWORD")?.unwrap_or(true);
        let telemetry = env::var("OTLP_ENDPOINT").ok().map(|endpoint| TelemetryConfig {
            endpoint,
            headers: HashMap::new(),
        });

        let config = Config {
            database_url,
            max_pool_size,
            run_migrations,
            bind_address,
            verify_login_password,
            telemetry,
            ssl: None,
        };
        Ok(config)
    }
}

impl FromStr for Config {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).context("Unable to parse config")
    }
}

fn parse_env<T>(key: &str) -> Result<Option<T>, anyhow::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(value) => value
            .parse()
            .map(Some)
            .with_context(|| format!("Unable to parse {} value", key)),
        Err(_) => Ok(None),
    }
}

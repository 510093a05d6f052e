use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub viewer: ViewerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    /// File opened at startup by the terminal viewer.
    pub default_file: Option<PathBuf>,
    /// Event poll interval of the terminal viewer, in milliseconds.
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the terminal viewer's log file.
    pub log_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_default()
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            viewer: ViewerConfig {
                default_file: env::var("JOB_LENS_FILE").ok().map(PathBuf::from),
                tick_rate_ms: env::var("JOB_LENS_TICK_MS")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()?,
            },
            logging: LoggingConfig {
                log_dir: env::var("JOB_LENS_LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| env::temp_dir()),
            },
        })
    }
}

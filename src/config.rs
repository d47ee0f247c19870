use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct HttpConfig {
    pub address: String,
    pub port: String,
}

impl HttpConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub dir: String,
    pub service: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub debug: bool,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads configuration from the file named by the first CLI argument,
    /// falling back to built-in defaults when none is given.
    pub fn new() -> Result<Self, ConfigError> {
        let config_path = env::args().nth(1);
        Self::load(config_path.as_deref())
    }

    pub fn from_path(config_path: &str) -> Result<Self, ConfigError> {
        Self::load(Some(config_path))
    }

    /// Defaults, then the optional file, then `APP__*` environment overrides.
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("debug", false)?
            .set_default("http.address", "0.0.0.0")?
            .set_default("http.port", "8080")?
            .set_default("logging.dir", "app/logs")?
            .set_default("logging.service", "pipeline-demo")?;

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path));
        }

        builder
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

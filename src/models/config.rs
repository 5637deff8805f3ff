//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

pub const DEFAULT_DATABASE_URL: &str = "app.db";
pub const DEFAULT_ZMQ_ADDRESS: &str = "tcp://127.0.0.1:5556";

#[derive(Clone, Debug, Deserialize)]
/// Settings for the matching worker.
pub struct ServerConfig {
    pub database_url: String,
    pub zmq_address: String,
}

impl ServerConfig {
    /// Load settings from defaults, an optional `config.yaml`, then the
    /// environment (`DATABASE_URL`, `ZMQ_ADDRESS`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config", None)
    }

    /// Layered load with an explicit config file stem. `env` replaces the
    /// process environment when given.
    fn load_from(config_file: &str, env: Option<Map<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("database_url", DEFAULT_DATABASE_URL)?
            .set_default("zmq_address", DEFAULT_ZMQ_ADDRESS)?
            .add_source(File::with_name(config_file).required(false))
            .add_source(Environment::default().try_parsing(false).source(env))
            .build()?
            .try_deserialize()
    }
}

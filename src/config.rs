use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Runtime settings. Defaults are overridden by `COVID_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub loglevel: String,
    pub max_connections: u32,
    /// Create the store file when it does not exist yet.
    pub create_if_missing: bool,
    /// Run the bundled DDL on startup. Off for pre-provisioned stores.
    pub init_schema: bool,
    pub foreign_keys: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite:covid19India.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            loglevel: "info".to_string(),
            max_connections: 5,
            create_if_missing: false,
            init_schema: false,
            foreign_keys: true,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("COVID_"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

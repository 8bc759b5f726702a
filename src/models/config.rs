use serde::Deserialize;

/// Runtime settings for the HTTP server.
///
/// Loaded from `config/default.yaml` and overridden by `APP__*` environment
/// variables (e.g. `APP__PORT=9000`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path of the SQLite database file.
    pub database_url: String,
    pub address: String,
    pub port: u16,
}

impl ServerConfig {
    /// Reads configuration from the optional YAML file and the environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// `address:port` pair handed to `HttpServer::bind`.
    pub fn bind_address(&self) -> (String, u16) {
        (self.address.clone(), self.port)
    }
}

use serde::Deserialize;

/// Configuration options of the categories service.
///
/// Loaded from `config/default.yaml`, an optional `config/{APP_ENV}.yaml` and
/// `APP__*` environment variables.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    pub templates_dir: String,
    pub static_dir: String,
    /// Signs session and flash-message cookies; must be at least 64 bytes.
    pub secret: String,
    /// Link rendered as the home page of the authentication service.
    pub auth_service_url: String,
}

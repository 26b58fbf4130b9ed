use serde::Deserialize;

/// Configuration options for the marketing-site server.
#[derive(Clone, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite content database.
    pub database_url: String,
    /// Interface the HTTP server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Secret the session/flash cookies are signed with.
    pub secret_key: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

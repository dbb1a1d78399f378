use serde::{Deserialize, Serialize};
use std::env;

/// Token used when `API_TOKEN` is unset. Anyone reading the source knows it.
pub const DEFAULT_API_TOKEN: &str = "my-secret-token";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Reject malformed path ids with 400 instead of looking up id 0.
    pub strict_ids: bool,
    pub max_request_size_bytes: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub api_token: String,
    pub enable_cors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                host: "localhost".to_string(),
                port: 5432,
                user: "workflow".to_string(),
                password: "workflow".to_string(),
                name: "postgres".to_string(),
                ssl_mode: "disable".to_string(),
                max_connections: 10,
                connect_timeout_secs: 30,
            },
            api: ApiConfig {
                strict_ids: false,
                max_request_size_bytes: 2 * 1024 * 1024, // 2MB
            },
            security: SecurityConfig {
                api_token: DEFAULT_API_TOKEN.to_string(),
                enable_cors: false,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source. Empty values are
    /// treated as unset and unparseable values keep the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut config = Self::default();

        // Server overrides
        if let Some(v) = get("HOST") {
            config.server.host = v;
        }
        if let Some(v) = get("LIBRARY_API_PORT").or_else(|| get("PORT")) {
            config.server.port = v.parse().unwrap_or(config.server.port);
        }

        // Database overrides
        if let Some(v) = get("DB_HOST") {
            config.database.host = v;
        }
        if let Some(v) = get("DB_PORT") {
            config.database.port = v.parse().unwrap_or(config.database.port);
        }
        if let Some(v) = get("DB_USER") {
            config.database.user = v;
        }
        if let Some(v) = get("DB_PASSWORD") {
            config.database.password = v;
        }
        if let Some(v) = get("DB_NAME") {
            config.database.name = v;
        }
        if let Some(v) = get("DB_SSLMODE") {
            config.database.ssl_mode = v;
        }
        if let Some(v) = get("DB_MAX_CONNECTIONS") {
            config.database.max_connections = v.parse().unwrap_or(config.database.max_connections);
        }
        if let Some(v) = get("DB_CONNECT_TIMEOUT") {
            config.database.connect_timeout_secs = v.parse().unwrap_or(config.database.connect_timeout_secs);
        }

        // API overrides
        if let Some(v) = get("API_STRICT_IDS") {
            config.api.strict_ids = v.parse().unwrap_or(config.api.strict_ids);
        }
        if let Some(v) = get("API_MAX_REQUEST_SIZE_BYTES") {
            config.api.max_request_size_bytes = v.parse().unwrap_or(config.api.max_request_size_bytes);
        }

        // Security overrides
        if let Some(v) = get("API_TOKEN") {
            config.security.api_token = v;
        }
        if let Some(v) = get("SECURITY_ENABLE_CORS") {
            config.security.enable_cors = v.parse().unwrap_or(config.security.enable_cors);
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn uses_default_token(&self) -> bool {
        self.security.api_token == DEFAULT_API_TOKEN
    }
}

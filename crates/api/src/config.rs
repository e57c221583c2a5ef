//! Server configuration loaded from the environment.

use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server.
///
/// Everything is read once at startup from the environment:
///
/// | Variable               | Default                 | Purpose                          |
/// |------------------------|-------------------------|----------------------------------|
/// | `HOST`                 | `0.0.0.0`               | Bind address                     |
/// | `PORT`                 | `5000`                  | Bind port                        |
/// | `CORS_ORIGINS`         | `http://localhost:3000` | Comma-separated allowed origins  |
/// | `REQUEST_TIMEOUT_SECS` | `30`                    | Per-request timeout              |
///
/// JWT settings are nested under [`JwtConfig`] and documented there.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load the configuration, falling back to defaults for anything unset.
    ///
    /// Panics when `JWT_SECRET` is missing. Refusing to start beats issuing
    /// tokens signed with a default secret.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "5000").parse().unwrap_or(5000),
            cors_origins: env_or("CORS_ORIGINS", "http://localhost:3000")
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            request_timeout_secs: env_or("REQUEST_TIMEOUT_SECS", "30").parse().unwrap_or(30),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

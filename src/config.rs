use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

/// Allowed CORS origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            Self::Any
        } else {
            Self::List(origins)
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: CorsOrigins,

    // Requests
    pub request_body_limit_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env: Environment::Dev,
            server_addr: "0.0.0.0:3000".to_string(),
            cors_allow_origins: CorsOrigins::Any,
            request_body_limit_bytes: 64 * 1024,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));

        // SERVER_ADDR wins; a bare PORT binds on all interfaces
        let server_addr = match (env::var("SERVER_ADDR"), env::var("PORT")) {
            (Ok(addr), _) => addr,
            (Err(_), Ok(port)) => {
                let port: u16 = port.parse().context("PORT must be a valid port number")?;
                format!("0.0.0.0:{port}")
            }
            _ => defaults.server_addr,
        };

        // CORS
        let cors_allow_origins = env::var("CORS_ALLOW_ORIGINS")
            .map(|raw| CorsOrigins::parse(&raw))
            .unwrap_or(defaults.cors_allow_origins);

        // Requests
        let request_body_limit_bytes = env::var("REQUEST_BODY_LIMIT_BYTES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.request_body_limit_bytes);

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            request_body_limit_bytes,
        })
    }
}

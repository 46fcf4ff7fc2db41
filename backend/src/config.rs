//! Runtime configuration for the template gate server.
//!
//! Every setting comes from an environment variable with a default that
//! suits local development:
//!
//! | Variable              | Default            |
//! |-----------------------|--------------------|
//! | `TEMPLATE_GATE_HOST`  | `127.0.0.1`        |
//! | `TEMPLATE_GATE_PORT`  | `8080`             |
//! | `TEMPLATE_GATE_DB`    | `templates.sqlite` |

use log::warn;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_PATH: &str = "templates.sqlite";

/// Maximum accepted JSON payload size for template requests.
pub const JSON_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("TEMPLATE_GATE_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("TEMPLATE_GATE_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid TEMPLATE_GATE_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let db_path = lookup("TEMPLATE_GATE_DB")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        Self {
            host,
            port,
            db_path,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

use std::{env, fmt::Display, net::SocketAddr, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use tracing::info;

use crate::domain::AdminCredentials;

const DEFAULT_DATABASE_PATH: &str = "site.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "password";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// Allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
    pub admin: AdminCredentials,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_path: try_load(&lookup, "DATABASE_PATH", DEFAULT_DATABASE_PATH)?,
            bind_addr: try_load(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?,
            cors_origin: lookup("CORS_ORIGIN").filter(|v| !v.trim().is_empty()),
            admin: AdminCredentials {
                username: try_load(&lookup, "ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME)?,
                password: load_secret(&lookup, "ADMIN_PASSWORD", DEFAULT_ADMIN_PASSWORD),
            },
        })
    }
}

fn try_load<T, F>(lookup: &F, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| anyhow!("Invalid {key} value '{raw}': {e}"))
}

fn load_secret<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using built-in default");
        default.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_path, PathBuf::from("site.db"));
        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cors_origin, None);
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.admin.password, "password");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_PATH", "/var/data/fees.db"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("CORS_ORIGIN", "http://localhost:5173"),
            ("ADMIN_USERNAME", "office"),
            ("ADMIN_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/data/fees.db"));
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
        assert_eq!(config.admin.username, "office");
        assert_eq!(config.admin.password, "hunter2");
    }

    #[test]
    fn test_invalid_bind_addr_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("BIND_ADDR", "not-an-address")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_cors_origin_means_any() {
        let config = AppConfig::from_lookup(lookup_from(&[("CORS_ORIGIN", "  ")])).unwrap();
        assert_eq!(config.cors_origin, None);
    }
}

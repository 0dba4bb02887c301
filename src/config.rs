//! Configuration management for ticketdesk
//!
//! Settings come from an optional `ticketdesk.toml` in the working
//! directory, overridden by `TICKETDESK_*` environment variables (nested
//! keys separated with `__`, e.g. `TICKETDESK_SERVER__PORT=9090`). Every
//! field has a default, so running with no configuration at all works.

use crate::core::{Admin, CategoryDirectory, default_admins};
use crate::error::Result;
use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Admin directory: who owns which category
    pub admins: Vec<Admin>,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Directory of static assets served at the root path
    pub static_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            admins: default_admins(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: PathBuf::from("static"),
        }
    }
}

impl Config {
    /// Load configuration from file and environment, falling back to
    /// defaults for anything unset
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    pub fn load_or_default() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(File::with_name("ticketdesk").required(false))
            .add_source(Environment::with_prefix("TICKETDESK").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// The category directory backed by the configured admins
    #[must_use]
    pub fn directory(&self) -> CategoryDirectory {
        CategoryDirectory::new(self.admins.clone())
    }

    /// `host:port` string for binding the HTTP listener
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, PathBuf::from("static"));
        assert_eq!(config.admins.len(), 3);
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_directory_from_admins() {
        let config = Config {
            admins: vec![Admin::new("Dana", "Legal")],
            ..Config::default()
        };

        let directory = config.directory();
        assert!(directory.is_valid("legal"));
        assert!(!directory.is_valid("IT"));
    }
}

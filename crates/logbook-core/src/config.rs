//! Configuration types for logbook.
//!
//! Sources are layered, lowest priority first:
//!
//! 1. the embedded defaults below,
//! 2. an optional TOML file passed with `--config`,
//! 3. the `SERVERPORT` environment variable (listen port only).
//!
//! CLI flags are applied on top by the binary. [`Config::defaults`] returns
//! the embedded layer alone without touching the environment (useful in tests).

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Environment variable that selects the listen port.
pub const PORT_ENV: &str = "SERVERPORT";

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host = "localhost"
port = 8080
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "localhost".to_string() }
fn default_port() -> u16 { 8080 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the defaults, the optional file at `path`, and `SERVERPORT`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let port = match std::env::var(PORT_ENV) {
            Ok(raw) => Some(parse_port(&raw)?),
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => return Err(e).with_context(|| format!("reading {PORT_ENV}")),
        };
        Self::build(path, port)
    }

    /// Same layering as [`Config::load`] with the port override passed in
    /// rather than read from the environment.
    pub fn build(path: Option<&Path>, port_override: Option<u16>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .set_override_option("server.port", port_override.map(i64::from))?
            .build()
            .with_context(|| match path {
                Some(p) => format!("loading config from {}", p.display()),
                None => "loading built-in config".to_string(),
            })?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem or env.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("{PORT_ENV}={raw:?} is not a valid port"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

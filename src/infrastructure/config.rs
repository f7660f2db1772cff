use crate::domain::site_score::SiteScore;
use serde::Deserialize;
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:8080";
const DEFAULT_TITLE: &str = "Navi Dashboard";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
    /// Sites to show; the built-in sample is used when empty
    #[serde(default)]
    pub sites: Vec<SiteScore>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardSettings {
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid server.bind '{}': {}", self.bind, e))
    }
}

/// `NAVI_SERVER__BIND` -> `server.bind`
fn env_source() -> config::Environment {
    config::Environment::with_prefix("NAVI")
        .prefix_separator("_")
        .separator("__")
}

fn build_app_config(file: &str, env: config::Environment) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(file).required(false))
        .add_source(env)
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Load `config/dashboard.*` (optional) overlaid with `NAVI_*` env vars.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    build_app_config("config/dashboard", env_source())
}

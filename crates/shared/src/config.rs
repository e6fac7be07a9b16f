//! Application configuration management.

use std::time::Duration;

use serde::Deserialize;

use crate::types::Theme;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Dashboard view configuration.
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Dashboard view configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Founder chart rotation period in milliseconds.
    #[serde(default = "default_founder_rotation_ms")]
    pub founder_rotation_ms: u64,
    /// Investor chart rotation period in milliseconds.
    #[serde(default = "default_investor_rotation_ms")]
    pub investor_rotation_ms: u64,
    /// Theme used when a request does not name one.
    #[serde(default)]
    pub default_theme: Theme,
    /// Avatar endpoint used when a team member has no avatar.
    #[serde(default = "default_avatar_base_url")]
    pub avatar_base_url: String,
    /// Optional JSON snapshot file; the built-in demo data is served when unset.
    #[serde(default)]
    pub snapshot_path: Option<String>,
}

fn default_founder_rotation_ms() -> u64 {
    4000
}

fn default_investor_rotation_ms() -> u64 {
    5000
}

fn default_avatar_base_url() -> String {
    "https://api.dicebear.com/7.x/initials/svg".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            founder_rotation_ms: default_founder_rotation_ms(),
            investor_rotation_ms: default_investor_rotation_ms(),
            default_theme: Theme::default(),
            avatar_base_url: default_avatar_base_url(),
            snapshot_path: None,
        }
    }
}

impl DashboardConfig {
    /// Checks values the deserializer cannot.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first rotation period that is zero.
    pub fn validate(&self) -> Result<(), String> {
        for (name, ms) in [
            ("founder_rotation_ms", self.founder_rotation_ms),
            ("investor_rotation_ms", self.investor_rotation_ms),
        ] {
            if ms == 0 {
                return Err(format!("dashboard.{name} must be greater than zero"));
            }
        }
        Ok(())
    }

    /// Rotation period of the founder charts.
    #[must_use]
    pub const fn founder_rotation(&self) -> Duration {
        Duration::from_millis(self.founder_rotation_ms)
    }

    /// Rotation period of the investor charts.
    #[must_use]
    pub const fn investor_rotation(&self) -> Duration {
        Duration::from_millis(self.investor_rotation_ms)
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or a value is out
    /// of range.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("VENTUREHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded
            .dashboard
            .validate()
            .map_err(config::ConfigError::Message)?;
        Ok(loaded)
    }
}

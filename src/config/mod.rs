//! Server configuration

use anyhow::Result;
use serde::Deserialize;

use crate::auth::{AuthConfig, AuthError};
pub use crate::site::nav::DEFAULT_PLATFORM_LOGIN_URL;

pub const DEFAULT_PORT: u16 = 5174;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Target of the navigation bar's "Sign In" link.
    #[serde(default = "default_platform_login_url")]
    pub platform_login_url: String,

    #[serde(default)]
    pub auth: AuthSettings,

    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_platform_login_url() -> String {
    DEFAULT_PLATFORM_LOGIN_URL.to_string()
}

/// Hosted auth service. Both values are required to start.
#[derive(Debug, Default, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub anon_key: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct TelemetrySettings {
    pub dsn: Option<String>,
}

impl Config {
    /// Validated auth settings; an error here is fatal at startup.
    pub fn auth(&self) -> Result<AuthConfig, AuthError> {
        AuthConfig::new(&self.auth.url, &self.auth.anon_key)
    }
}

/// Get config directory (AIDRA_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("AIDRA_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/aidra-landing");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("aidra-landing");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/aidra-landing");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("aidra-landing");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

/// Legacy variable names from the previous deployment, applied only when the
/// namespaced variable is unset.
const LEGACY_OVERRIDES: &[(&str, &str, &str)] = &[
    ("VITE_SUPABASE_URL", "AIDRA_AUTH__URL", "auth.url"),
    ("VITE_SUPABASE_ANON_KEY", "AIDRA_AUTH__ANON_KEY", "auth.anon_key"),
    ("VITE_SENTRY_DSN", "AIDRA_TELEMETRY__DSN", "telemetry.dsn"),
];

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        .set_default("port", DEFAULT_PORT as i64)?
        .set_default("platform_login_url", DEFAULT_PLATFORM_LOGIN_URL)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // AIDRA_PORT, AIDRA_AUTH__URL, AIDRA_TELEMETRY__DSN, ...
        .add_source(
            ::config::Environment::with_prefix("AIDRA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: AIDRA_PORT > PORT > config file > default
    if let Ok(port) = std::env::var("AIDRA_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    for (legacy, current, key) in LEGACY_OVERRIDES {
        if std::env::var(current).is_ok() {
            continue;
        }
        if let Ok(value) = std::env::var(legacy) {
            builder = builder.set_override(*key, value)?;
        }
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

//! Error reporting to a Sentry-compatible collector.
//!
//! Optional: with no DSN configured nothing is installed. When enabled, ERROR
//! level `tracing` events are copied into a bounded channel and posted by a
//! single background task. Emission never blocks; a full buffer drops.
//!
//! The server reads its DSN from configuration; the browser client uses the
//! one baked in at build time, so failures in the page are reported too.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("invalid telemetry DSN: {0}")]
    InvalidDsn(#[from] url::ParseError),
    #[error("telemetry DSN has no public key")]
    MissingKey,
    #[error("telemetry DSN has no host")]
    MissingHost,
    #[error("telemetry DSN has no project id")]
    MissingProject,
}

/// A parsed `https://<public_key>@<host>/<project_id>` DSN.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dsn {
    pub public_key: String,
    pub project_id: String,
    origin: String,
}

impl Dsn {
    pub fn parse(raw: &str) -> Result<Self, TelemetryError> {
        let url = Url::parse(raw.trim())?;
        let public_key = url.username();
        if public_key.is_empty() {
            return Err(TelemetryError::MissingKey);
        }
        let host = url.host_str().ok_or(TelemetryError::MissingHost)?;
        let project_id = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|id| !id.is_empty())
            .ok_or(TelemetryError::MissingProject)?;
        let origin = match url.port() {
            Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
            None => format!("{}://{}", url.scheme(), host),
        };
        Ok(Self {
            public_key: public_key.to_string(),
            project_id: project_id.to_string(),
            origin,
        })
    }

    /// Where events are posted.
    pub fn store_url(&self) -> String {
        format!("{}/api/{}/store/", self.origin, self.project_id)
    }

    pub fn auth_header(&self) -> String {
        format!(
            "Sentry sentry_version=7, sentry_client=aidra-landing/{}, sentry_key={}",
            env!("AIDRA_VERSION"),
            self.public_key
        )
    }
}

/// Parse an optional DSN; blank counts as absent.
pub fn parse_optional(raw: Option<&str>) -> Result<Option<Dsn>, TelemetryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => Dsn::parse(raw).map(Some),
    }
}

/// DSN baked into the client bundle by `build.rs`, if any.
pub fn baked_dsn() -> Option<&'static str> {
    option_env!("AIDRA_TELEMETRY_DSN")
}

#[cfg(any(feature = "server", target_arch = "wasm32"))]
mod reporter;

#[cfg(any(feature = "server", target_arch = "wasm32"))]
pub use reporter::{init, ErrorReport, ErrorReportLayer, Reporter, DEFAULT_BUFFER_SIZE};

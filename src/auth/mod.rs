//! Read-only view of the hosted auth service's browser session.
//!
//! The site never signs anyone in itself. The platform's auth client keeps its
//! session under `sb-<project-ref>-auth-token` in browser storage; the route
//! guard only asks whether a non-expired credential is there.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, TimeZone, Utc};
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::site::SessionStatus;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing auth configuration: {0}")]
    Missing(&'static str),
    #[error("invalid auth url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("auth url {0} has no host")]
    NoHost(String),
}

/// Endpoint and public key of the hosted auth service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    pub url: Url,
    pub anon_key: String,
}

impl AuthConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, AuthError> {
        let url = url.trim();
        let anon_key = anon_key.trim();
        if url.is_empty() {
            return Err(AuthError::Missing("auth url"));
        }
        if anon_key.is_empty() {
            return Err(AuthError::Missing("auth anon key"));
        }
        let parsed = Url::parse(url).map_err(|source| AuthError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        if parsed.host_str().is_none() {
            return Err(AuthError::NoHost(url.to_string()));
        }
        Ok(Self {
            url: parsed,
            anon_key: anon_key.to_string(),
        })
    }

    /// Settings baked into the client bundle by `build.rs`.
    pub fn from_build_env() -> Result<Self, AuthError> {
        let url = option_env!("AIDRA_AUTH_URL").ok_or(AuthError::Missing("AIDRA_AUTH_URL"))?;
        let key =
            option_env!("AIDRA_AUTH_ANON_KEY").ok_or(AuthError::Missing("AIDRA_AUTH_ANON_KEY"))?;
        Self::new(url, key)
    }

    /// First label of the service host (`abcd` in `abcd.supabase.co`).
    pub fn project_ref(&self) -> &str {
        self.url
            .host_str()
            .and_then(|host| host.split('.').next())
            .unwrap_or_default()
    }

    /// Browser storage key the auth client persists its session under.
    pub fn storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }
}

/// The parts of a stored session the guard cares about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCredential {
    pub access_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct StoredSession {
    access_token: String,
    /// Unix seconds.
    expires_at: Option<i64>,
}

#[derive(Deserialize)]
struct TokenClaims {
    exp: Option<i64>,
}

impl SessionCredential {
    /// Parse the stored JSON. Missing `expires_at` falls back to the
    /// token's own `exp` claim.
    pub fn parse(raw: &str) -> Option<Self> {
        let stored: StoredSession = serde_json::from_str(raw).ok()?;
        if stored.access_token.is_empty() {
            return None;
        }
        let expires_at = stored
            .expires_at
            .or_else(|| token_expiry(&stored.access_token))
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single());
        Some(Self {
            access_token: stored.access_token,
            expires_at,
        })
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(true, |exp| exp > now)
    }
}

/// `exp` claim of a JWT, without verifying it.
fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice::<TokenClaims>(&bytes).ok()?.exp
}

/// Read access to wherever the auth client keeps its session.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
}

/// In-memory store for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemorySessionStore {
    pub fn with(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = std::collections::HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// `window.localStorage`, read-only.
#[cfg(target_arch = "wasm32")]
pub struct BrowserSessionStore;

#[cfg(target_arch = "wasm32")]
impl SessionStore for BrowserSessionStore {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
}

/// Whether `store` holds a credential that is still valid at `now`.
pub fn session_status(
    config: &AuthConfig,
    store: &impl SessionStore,
    now: DateTime<Utc>,
) -> SessionStatus {
    let key = config.storage_key();
    let Some(raw) = store.read(&key) else {
        return SessionStatus::Absent;
    };
    match SessionCredential::parse(&raw) {
        Some(credential) if credential.is_valid_at(now) => SessionStatus::Present,
        Some(_) => {
            tracing::debug!("Stored session under {} has expired", key);
            SessionStatus::Absent
        }
        None => {
            tracing::warn!("Unreadable session under {}", key);
            SessionStatus::Absent
        }
    }
}

/// Check the browser session with the baked-in configuration.
///
/// A missing configuration is treated as no session.
#[cfg(target_arch = "wasm32")]
pub fn current_session_status() -> SessionStatus {
    match AuthConfig::from_build_env() {
        Ok(config) => session_status(&config, &BrowserSessionStore, Utc::now()),
        Err(e) => {
            tracing::error!("Session check skipped: {}", e);
            SessionStatus::Absent
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_session_status() -> SessionStatus {
    SessionStatus::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn config() -> AuthConfig {
        AuthConfig::new("https://abcdefgh.supabase.co", "anon-key").unwrap()
    }

    fn jwt_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{exp}}}"#));
        format!("{header}.{payload}.sig")
    }

    #[test]
    fn test_missing_settings_are_errors() {
        assert!(matches!(
            AuthConfig::new("", "key"),
            Err(AuthError::Missing(_))
        ));
        assert!(matches!(
            AuthConfig::new("https://x.supabase.co", "  "),
            Err(AuthError::Missing(_))
        ));
        assert!(matches!(
            AuthConfig::new("not a url", "key"),
            Err(AuthError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_storage_key_uses_project_ref() {
        assert_eq!(config().project_ref(), "abcdefgh");
        assert_eq!(config().storage_key(), "sb-abcdefgh-auth-token");
    }

    #[test]
    fn test_no_stored_session_is_absent() {
        let store = MemorySessionStore::default();
        assert_eq!(
            session_status(&config(), &store, Utc::now()),
            SessionStatus::Absent
        );
    }

    #[test]
    fn test_live_session_is_present() {
        let now = Utc::now();
        let raw = format!(
            r#"{{"access_token":"tok","expires_at":{}}}"#,
            (now + Duration::hours(1)).timestamp()
        );
        let store = MemorySessionStore::with("sb-abcdefgh-auth-token", raw);
        assert_eq!(session_status(&config(), &store, now), SessionStatus::Present);
    }

    #[test]
    fn test_expired_session_is_absent() {
        let now = Utc::now();
        let raw = format!(
            r#"{{"access_token":"tok","expires_at":{}}}"#,
            (now - Duration::minutes(1)).timestamp()
        );
        let store = MemorySessionStore::with("sb-abcdefgh-auth-token", raw);
        assert_eq!(session_status(&config(), &store, now), SessionStatus::Absent);
    }

    #[test]
    fn test_expiry_falls_back_to_token_claim() {
        let now = Utc::now();
        let token = jwt_with_exp((now - Duration::seconds(5)).timestamp());
        let credential =
            SessionCredential::parse(&format!(r#"{{"access_token":"{token}"}}"#)).unwrap();
        assert!(credential.expires_at.is_some());
        assert!(!credential.is_valid_at(now));
    }

    #[test]
    fn test_garbage_is_absent_not_a_fault() {
        let store = MemorySessionStore::with("sb-abcdefgh-auth-token", "{not json");
        assert_eq!(
            session_status(&config(), &store, Utc::now()),
            SessionStatus::Absent
        );
        assert_eq!(SessionCredential::parse(r#"{"access_token":""}"#), None);
    }
}

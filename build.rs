//! Build script to inject version and git SHA at compile time, and to bake
//! the public auth and telemetry settings into the client bundle.
//!
//! Environment variables (set by CI or fall back to defaults):
//! - AIDRA_VERSION: Version string (defaults to CARGO_PKG_VERSION)
//! - AIDRA_GIT_SHA: Git commit SHA (defaults to "unknown" or git rev-parse)
//! - AIDRA_AUTH__URL / VITE_SUPABASE_URL: auth service URL
//! - AIDRA_AUTH__ANON_KEY / VITE_SUPABASE_ANON_KEY: auth service public key
//! - AIDRA_TELEMETRY__DSN / VITE_SENTRY_DSN: error collector DSN for the client

use std::process::Command;

/// (baked name, sources in precedence order)
const BAKED: &[(&str, &[&str])] = &[
    ("AIDRA_AUTH_URL", &["AIDRA_AUTH__URL", "VITE_SUPABASE_URL"]),
    (
        "AIDRA_AUTH_ANON_KEY",
        &["AIDRA_AUTH__ANON_KEY", "VITE_SUPABASE_ANON_KEY"],
    ),
    (
        "AIDRA_TELEMETRY_DSN",
        &["AIDRA_TELEMETRY__DSN", "VITE_SENTRY_DSN"],
    ),
];

fn main() {
    // Version: prefer AIDRA_VERSION env var, fall back to CARGO_PKG_VERSION
    let version = std::env::var("AIDRA_VERSION").unwrap_or_else(|_| {
        std::env::var("CARGO_PKG_VERSION").unwrap_or_else(|_| "unknown".into())
    });
    println!("cargo:rustc-env=AIDRA_VERSION={}", version);

    // Git SHA: prefer AIDRA_GIT_SHA, then GITHUB_SHA, then try git command
    let git_sha = std::env::var("AIDRA_GIT_SHA")
        .or_else(|_| std::env::var("GITHUB_SHA").map(|s| s.chars().take(7).collect()))
        .unwrap_or_else(|_| get_git_sha());
    println!("cargo:rustc-env=AIDRA_GIT_SHA={}", git_sha);

    // Public settings; read with option_env! by the client
    for (name, sources) in BAKED {
        let value = sources
            .iter()
            .find_map(|source| std::env::var(source).ok())
            .filter(|value| !value.trim().is_empty());
        if let Some(value) = value {
            println!("cargo:rustc-env={}={}", name, value.trim());
        }
        for source in *sources {
            println!("cargo:rerun-if-env-changed={}", source);
        }
    }

    // Rebuild if these change
    println!("cargo:rerun-if-env-changed=AIDRA_VERSION");
    println!("cargo:rerun-if-env-changed=AIDRA_GIT_SHA");
    println!("cargo:rerun-if-env-changed=AIDRA_PLATFORM_LOGIN_URL");
    println!("cargo:rerun-if-env-changed=GITHUB_SHA");
}

fn get_git_sha() -> String {
    Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .and_then(|o| {
            if o.status.success() {
                String::from_utf8(o.stdout)
                    .ok()
                    .map(|s| s.trim().to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".into())
}

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Route Contract Tests
//!
//! Ensures page routes and server endpoints don't change without explicit
//! approval. The golden file at tests/fixtures/routes.txt is the source of
//! truth.
//!
//! If this test fails:
//! 1. Review the route changes carefully
//! 2. Update routes.txt if the change is intentional
//!
//! Run with: cargo test --test route_contract

use std::collections::BTreeSet;
use std::fs;

const GOLDEN: &str = "tests/fixtures/routes.txt";

fn golden_lines() -> Vec<String> {
    let content = fs::read_to_string(GOLDEN).expect("Failed to read routes.txt");

    content
        .lines()
        .filter(|line| !line.starts_with('#') && !line.trim().is_empty())
        .map(|line| line.trim().to_string())
        .collect()
}

/// First string literal after `marker` on the line.
fn quoted_after<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let start = line.find(marker)? + marker.len();
    let rest = &line[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// `#[route("...")]` attributes on the router enum.
fn extract_page_routes() -> BTreeSet<String> {
    let content = fs::read_to_string("src/app/mod.rs").expect("Failed to read app/mod.rs");

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with("//"))
        .filter_map(|line| quoted_after(line, "#[route(\""))
        .map(|path| format!("PAGE {}", path))
        .collect()
}

/// `.route("/path", get(handler))` calls in the server binary.
fn extract_server_routes() -> BTreeSet<String> {
    let content = fs::read_to_string("src/main.rs").expect("Failed to read main.rs");

    let mut routes = BTreeSet::new();
    for line in content.lines().map(str::trim) {
        if line.starts_with("//") {
            continue;
        }
        let Some(path) = quoted_after(line, ".route(\"") else {
            continue;
        };
        let method = if line.contains("get(") {
            "GET"
        } else if line.contains("post(") {
            "POST"
        } else {
            continue; // Unknown method
        };
        routes.insert(format!("{} {}", method, path));
    }
    routes
}

#[test]
fn routes_match_contract() {
    let golden: BTreeSet<String> = golden_lines().into_iter().collect();
    let mut actual = extract_page_routes();
    actual.extend(extract_server_routes());

    let added: Vec<_> = actual.difference(&golden).collect();
    let removed: Vec<_> = golden.difference(&actual).collect();

    if !added.is_empty() || !removed.is_empty() {
        let mut msg = String::from("\n\nROUTE CONTRACT VIOLATION!\n\n");

        if !added.is_empty() {
            msg.push_str("Routes ADDED (not in contract):\n");
            for route in &added {
                msg.push_str(&format!("  + {}\n", route));
            }
            msg.push('\n');
        }

        if !removed.is_empty() {
            msg.push_str("Routes REMOVED (missing from implementation):\n");
            for route in &removed {
                msg.push_str(&format!("  - {}\n", route));
            }
            msg.push('\n');
        }

        msg.push_str("If intentional: update tests/fixtures/routes.txt\n");
        panic!("{}", msg);
    }
}

#[test]
fn catch_all_is_declared_last() {
    let content = fs::read_to_string("src/app/mod.rs").expect("Failed to read app/mod.rs");
    let paths: Vec<_> = content
        .lines()
        .filter_map(|line| quoted_after(line.trim(), "#[route(\""))
        .collect();
    assert_eq!(paths.last(), Some(&"/:..route"), "404 route must come last");
}

#[test]
fn golden_file_is_sorted() {
    let routes = golden_lines();
    let mut sorted = routes.clone();
    sorted.sort();

    assert_eq!(
        routes, sorted,
        "routes.txt is not sorted! Please sort alphabetically."
    );
}

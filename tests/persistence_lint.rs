//! Nothing the site does is persisted in the browser.
//!
//! The locale is memory-only and the session belongs to the external auth
//! client, which we only read. This scans `src/` for storage and cookie
//! writes.

use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Patterns that write browser state
const DISALLOWED_PATTERNS: &[(&str, &str)] = &[
    (".set_item(", "Storage writes are not allowed"),
    (".remove_item(", "Storage writes are not allowed"),
    ("session_storage(", "Session storage is not used"),
    ("set_cookie(", "Cookies are not written"),
    ("\"document.cookie\"", "Cookies are not written"),
];

#[test]
fn no_browser_state_is_written() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut violations = Vec::new();
    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
    {
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };
        for (line_no, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.starts_with("//") {
                continue;
            }
            for (pattern, reason) in DISALLOWED_PATTERNS {
                if !trimmed.contains(pattern) {
                    continue;
                }
                violations.push(format!(
                    "{}:{}: {} ({})",
                    entry.path().display(),
                    line_no + 1,
                    trimmed,
                    reason
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "\n\nBrowser state writes found:\n  {}\n",
        violations.join("\n  ")
    );
}

#[test]
fn session_store_is_read_only() {
    let content = fs::read_to_string(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("src/auth/mod.rs"),
    )
    .expect("Failed to read auth/mod.rs");
    assert!(content.contains("get_item("), "session lookup should read storage");
    assert!(!content.contains("set_item("));
}

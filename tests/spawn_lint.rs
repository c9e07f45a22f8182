//! AST-level checks on how background work is started.
//!
//! 1. UI code under `src/app` must only use Dioxus' scope-bound `spawn`, so
//!    a task dies with the component that started it. Detached executors
//!    (`tokio::spawn`, `spawn_local`, `thread::spawn`) can update state after
//!    unmount.
//! 2. Any `tokio::spawn`ed `loop` on the server must have a `select!` so it
//!    can be cancelled on shutdown. Loops that end when their channel closes
//!    (`while let Some(..) = rx.recv().await`) are fine.

use std::fs;
use std::path::Path;
use syn::visit::Visit;
use syn::{Expr, ExprCall, ExprLoop, ExprMacro, File, Macro, StmtMacro};
use walkdir::WalkDir;

/// Call paths that start work outside the component scope.
const DETACHED_SPAWNS: &[&[&str]] = &[
    &["tokio", "spawn"],
    &["tokio", "task", "spawn"],
    &["tokio", "task", "spawn_local"],
    &["spawn_local"],
    &["wasm_bindgen_futures", "spawn_local"],
    &["std", "thread", "spawn"],
    &["thread", "spawn"],
];

fn call_path(call: &ExprCall) -> Option<Vec<String>> {
    if let Expr::Path(path) = &*call.func {
        return Some(
            path.path
                .segments
                .iter()
                .map(|s| s.ident.to_string())
                .collect(),
        );
    }
    None
}

fn macro_path(mac: &Macro) -> String {
    mac.path
        .segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

fn rust_files(dir: &Path) -> impl Iterator<Item = walkdir::DirEntry> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
}

fn parse(path: &Path) -> Option<File> {
    let content = fs::read_to_string(path).ok()?;
    match syn::parse_file(&content) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

/// Flags detached spawns, including ones written inside `rsx!` bodies.
struct DetachedSpawnVisitor {
    current_file: String,
    violations: Vec<(String, String)>,
}

impl<'ast> Visit<'ast> for DetachedSpawnVisitor {
    fn visit_expr_call(&mut self, call: &'ast ExprCall) {
        if let Some(path) = call_path(call) {
            if DETACHED_SPAWNS.iter().any(|bad| path == *bad) {
                self.violations
                    .push((self.current_file.clone(), path.join("::")));
            }
        }
        syn::visit::visit_expr_call(self, call);
    }

    fn visit_macro(&mut self, mac: &'ast Macro) {
        // Macro bodies are opaque to syn; fall back to a token scan.
        let tokens = mac.tokens.to_string();
        for needle in ["spawn_local", "tokio :: spawn", "thread :: spawn"] {
            if tokens.contains(needle) {
                self.violations.push((
                    self.current_file.clone(),
                    format!("{} inside {}!", needle.replace(' ', ""), macro_path(mac)),
                ));
            }
        }
        syn::visit::visit_macro(self, mac);
    }
}

/// Tracks `tokio::spawn`ed async blocks and whether their loops can be cancelled
struct SpawnLoopVisitor {
    current_file: String,
    in_spawn_depth: usize,
    in_loop_depth: usize,
    has_select_in_loop: bool,
    violations: Vec<(String, String)>,
}

impl SpawnLoopVisitor {
    fn is_select_macro_path(&self, mac: &Macro) -> bool {
        let path = macro_path(mac);
        path == "tokio::select" || path == "select"
    }
}

impl<'ast> Visit<'ast> for SpawnLoopVisitor {
    fn visit_expr_call(&mut self, call: &'ast ExprCall) {
        let is_tokio_spawn = call_path(call).is_some_and(|p| p == ["tokio", "spawn"]);
        if is_tokio_spawn {
            self.in_spawn_depth += 1;
            for arg in &call.args {
                self.visit_expr(arg);
            }
            self.in_spawn_depth -= 1;
        } else {
            syn::visit::visit_expr_call(self, call);
        }
    }

    fn visit_expr_loop(&mut self, loop_expr: &'ast ExprLoop) {
        if self.in_spawn_depth > 0 {
            self.in_loop_depth += 1;
            let old_has_select = self.has_select_in_loop;
            self.has_select_in_loop = false;

            syn::visit::visit_expr_loop(self, loop_expr);

            if !self.has_select_in_loop {
                let context = loop_expr
                    .label
                    .as_ref()
                    .map(|l| format!("'{}", l.name.ident))
                    .unwrap_or_else(|| "loop".to_string());
                self.violations.push((
                    self.current_file.clone(),
                    format!("Spawned {} without cancellation handling", context),
                ));
            }

            self.has_select_in_loop = old_has_select;
            self.in_loop_depth -= 1;
        } else {
            syn::visit::visit_expr_loop(self, loop_expr);
        }
    }

    fn visit_expr_macro(&mut self, mac: &'ast ExprMacro) {
        if self.in_loop_depth > 0 && self.is_select_macro_path(&mac.mac) {
            self.has_select_in_loop = true;
        }
        syn::visit::visit_expr_macro(self, mac);
    }

    fn visit_stmt_macro(&mut self, mac: &'ast StmtMacro) {
        if self.in_loop_depth > 0 && self.is_select_macro_path(&mac.mac) {
            self.has_select_in_loop = true;
        }
        syn::visit::visit_stmt_macro(self, mac);
    }
}

fn report(title: &str, violations: &[(String, String)]) {
    if violations.is_empty() {
        return;
    }
    let mut msg = format!("\n\n{}\n\nViolations:\n", title);
    for (file, context) in violations {
        msg.push_str(&format!("  - {}: {}\n", file, context));
    }
    panic!("{}", msg);
}

#[test]
fn ui_tasks_are_scope_bound() {
    let app_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join("app");

    let mut violations = Vec::new();
    for entry in rust_files(&app_dir) {
        let Some(syntax) = parse(entry.path()) else {
            continue;
        };
        let mut visitor = DetachedSpawnVisitor {
            current_file: entry.path().display().to_string(),
            violations: Vec::new(),
        };
        visitor.visit_file(&syntax);
        violations.extend(visitor.violations);
    }

    report(
        "Found detached spawns in UI code! Use dioxus `spawn` so the task \
         is dropped when its component unmounts.",
        &violations,
    );
}

#[test]
fn spawned_loops_must_have_cancellation() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut violations = Vec::new();
    for entry in rust_files(&src_dir) {
        let Some(syntax) = parse(entry.path()) else {
            continue;
        };
        let mut visitor = SpawnLoopVisitor {
            current_file: entry.path().display().to_string(),
            in_spawn_depth: 0,
            in_loop_depth: 0,
            has_select_in_loop: false,
            violations: Vec::new(),
        };
        visitor.visit_file(&syntax);
        violations.extend(visitor.violations);
    }

    report(
        "Found spawned loops without cancellation handling! These prevent \
         graceful shutdown. Add tokio::select! with a shutdown branch, or \
         drive the loop from a channel that closes.",
        &violations,
    );
}

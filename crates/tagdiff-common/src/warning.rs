//! Pipeline diagnostics with colored terminal output.
//!
//! Warnings are de-duplicated so a malformed document does not flood stderr
//! with the same message. Debug messages are silent unless verbose mode has
//! been switched on by the caller (normally the CLI's `--verbose` flag).
//! Colors can be switched off with [`set_color`] for plain terminals and
//! machine-read output.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const DIM: &str = "\x1b[2m";
const RESET: &str = "\x1b[0m";

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether [`debug`] messages are printed.
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Whether diagnostics carry ANSI color codes.
static COLOR: AtomicBool = AtomicBool::new(true);

/// Warn about a suspicious input (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("Tree Builder", "closing tag </p> on line 3 has no opener");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", paint(YELLOW, &format!("[tagdiff {component}] ⚠ {message}")));
    }
}

/// Number of distinct warnings printed since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map_or(0, HashSet::len)
}

/// Clear all recorded warnings (call before starting a new comparison run).
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Turn [`debug`] output on or off.
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Returns true if verbose diagnostics are enabled.
#[must_use]
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Print a progress message to stderr when verbose mode is on.
pub fn debug(component: &str, message: &str) {
    if is_verbose() {
        eprintln!("{}", paint(DIM, &format!("[tagdiff {component}] {message}")));
    }
}

/// Turn ANSI colors in diagnostics on or off.
pub fn set_color(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

/// Returns true if diagnostics are colored.
#[must_use]
pub fn is_color() -> bool {
    COLOR.load(Ordering::Relaxed)
}

fn paint(color: &str, line: &str) -> String {
    if is_color() {
        format!("{color}{line}{RESET}")
    } else {
        line.to_string()
    }
}

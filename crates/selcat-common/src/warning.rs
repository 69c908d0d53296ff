//! Warnings with colored terminal output.
//!
//! Provides deduplication so that re-categorizing the same input does not
//! repeat the same warning. The lexer itself never warns; front ends decide
//! what deserves a message.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Warnings already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about something the user should know (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Selector", "no lexemes found in `>>`");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(component, message) {
        eprintln!("{}", format!("[selcat {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before handling a new input)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Record a warning key, returning true the first time it is seen.
fn record(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

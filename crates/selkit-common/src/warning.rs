//! Builder warnings with colored terminal output.
//!
//! Provides deduplication so a selector assembled in a loop does not spam
//! the same warning. Warnings never change what the builder produces.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

fn warned() -> MutexGuard<'static, Option<HashSet<String>>> {
    // A panic while holding the lock cannot leave the set half-updated.
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about questionable input (prints once per unique message).
///
/// Returns `true` when the warning was printed, `false` when it was
/// suppressed as a duplicate.
///
/// # Example
/// ```
/// use selkit_common::warning::warn_once;
///
/// let first = warn_once("CSS", "empty class name kept verbatim");
/// let second = warn_once("CSS", "empty class name kept verbatim");
/// assert!(first);
/// assert!(!second);
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let should_print = warned()
        .get_or_insert_with(HashSet::new)
        .insert(key(component, message));

    if should_print {
        eprintln!(
            "{}",
            format!("[selkit {component}] ⚠ {message}").yellow()
        );
    }
    should_print
}

/// Whether `message` has already been reported for `component`.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned()
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Clear all recorded warnings.
pub fn clear_warnings() {
    if let Some(set) = warned().as_mut() {
        set.clear();
    }
}
